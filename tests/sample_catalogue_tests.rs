//! Every catalogue sample run against the bundled dataset.

mod test_data_gen;

use quarry_core::config::SampleConfig;
use quarry_samples::{catalogue, find, CollectSink, SampleError};
use serde_json::{json, Value};
use test_data_gen::bundled_dataset;

fn run(id: &str) -> Vec<Value> {
    let ds = bundled_dataset();
    let mut sink = CollectSink::default();
    let rows = find(id)
        .unwrap()
        .run(&ds, &SampleConfig::default(), &mut sink)
        .unwrap();
    assert_eq!(rows, sink.rows.len());
    sink.rows
}

fn strings(rows: &[Value], field: &str) -> Vec<String> {
    rows.iter()
        .map(|r| r[field].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_every_sample_runs() {
    let ds = bundled_dataset();
    let config = SampleConfig::default();
    for sample in catalogue() {
        let mut sink = CollectSink::default();
        let rows = sample
            .run(&ds, &config, &mut sink)
            .unwrap_or_else(|e| panic!("{} failed: {e}", sample.id));
        assert_eq!(rows, sink.rows.len(), "{}", sample.id);
    }
}

#[test]
fn test_unknown_sample_id() {
    assert!(matches!(find("no-such-sample"), Err(SampleError::UnknownSample(_))));
}

#[test]
fn test_low_numbers() {
    assert_eq!(run("low-numbers"), vec![json!(4), json!(1), json!(3), json!(2), json!(0)]);
}

#[test]
fn test_products_in_stock_excludes_sold_out() {
    let names = strings(&run("products-in-stock"), "product_name");
    assert_eq!(names.len(), 10);
    assert!(!names.contains(&"Ipoh Coffee".to_string()));
    assert!(!names.contains(&"Mishi Kobe Niku".to_string()));
}

#[test]
fn test_customers_over_total() {
    let rows = run("customers-over-total");
    assert_eq!(
        strings(&rows, "customer_id"),
        vec!["ALFKI", "ANATR", "AROUT", "BSBEV", "SUSHI"]
    );
    assert_eq!(rows[0]["total"], json!(2022.5));
}

#[test]
fn test_three_supplier_pairings_agree() {
    let crossed = run("customer-suppliers");
    let joined = run("customer-suppliers-join");
    assert_eq!(crossed, joined);
    assert_eq!(crossed.len(), 9);
    assert_eq!(
        crossed[0],
        json!({"customer_id": "ALFKI", "supplier": "Heli Süßwaren GmbH & Co. KG"})
    );

    let groups = run("customer-supplier-groups");
    assert_eq!(
        strings(&groups, "customer"),
        vec![
            "Alfreds Futterkiste",
            "Around the Horn",
            "B's Beverages",
            "Paris spécialités",
            "Sushi Bar Minato",
            "Seven Seas Imports",
        ]
    );
    let paired: usize = groups
        .iter()
        .map(|g| g["suppliers"].as_array().map_or(0, |a| a.len()))
        .sum();
    assert_eq!(paired, crossed.len());
    assert_eq!(
        groups[1]["suppliers"],
        json!(["Exotic Liquids", "London Tea Merchants"])
    );
}

#[test]
fn test_customers_with_large_order() {
    assert_eq!(strings(&run("customers-with-large-order"), "customer_id"), vec!["SUSHI"]);
}

#[test]
fn test_first_order_dates() {
    let rows = run("first-order");
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], json!({"customer_id": "ALFKI", "month": 8, "year": 2023}));
}

#[test]
fn test_first_order_ranked() {
    let rows = run("first-order-ranked");
    assert_eq!(
        strings(&rows, "company_name"),
        vec![
            "B's Beverages",
            "Sushi Bar Minato",
            "Ana Trujillo Emparedados y helados",
            "Around the Horn",
            "Seven Seas Imports",
            "Alfreds Futterkiste",
        ]
    );
    assert_eq!(rows[0]["start_date"], json!("2022-08-26"));
}

#[test]
fn test_category_stock_groups() {
    let rows = run("products-by-category-stock");
    assert_eq!(rows[0]["category"], json!("Beverages"));
    let in_stock = &rows[0]["stock"][0];
    assert_eq!(in_stock["in_stock"], json!(true));
    let names: Vec<&str> = in_stock["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Chai", "Chartreuse verte", "Côte de Blaye"]);
    assert_eq!(rows[0]["stock"][1]["in_stock"], json!(false));
}

#[test]
fn test_price_tiers() {
    let rows = run("products-by-price-tier");
    let tiers: Vec<(String, usize)> = rows
        .iter()
        .map(|r| {
            (
                r["tier"].as_str().unwrap().to_string(),
                r["products"].as_array().unwrap().len(),
            )
        })
        .collect();
    assert_eq!(
        tiers,
        vec![
            ("Cheap".to_string(), 7),
            ("Expensive".to_string(), 1),
            ("Average".to_string(), 5),
        ]
    );
}

#[test]
fn test_city_statistics() {
    let rows = run("city-statistics");
    assert_eq!(
        strings(&rows, "city"),
        vec!["Berlin", "México D.F.", "London", "Paris", "Madrid", "Tokyo"]
    );
    assert_eq!(rows[0]["average_sum"], json!(2022.5));
    assert_eq!(rows[0]["intensity"], json!(3.0));

    let london = &rows[2];
    let avg = london["average_sum"].as_f64().unwrap();
    assert!((avg - 2554.0 / 3.0).abs() < 1e-9);
    assert_eq!(rows[3]["average_sum"], json!(0.0));
    assert_eq!(rows[3]["intensity"], json!(0.0));
}

#[test]
fn test_customer_order_periods() {
    let rows = run("customer-order-periods");
    assert_eq!(rows.len(), 8);
    let alfki = &rows[0];
    assert_eq!(
        alfki["months"],
        json!([{"period": 8, "orders": 1}, {"period": 10, "orders": 2}])
    );
    assert_eq!(alfki["years"], json!([{"period": 2023, "orders": 3}]));
    assert_eq!(
        alfki["year_months"],
        json!([{"period": "8 / 2023", "orders": 1}, {"period": "10 / 2023", "orders": 2}])
    );
    assert_eq!(rows[4]["months"], json!([]));
}
