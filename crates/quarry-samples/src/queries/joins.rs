//! Customer/supplier pairing by location, three ways.

use quarry_core::model::{Customer, Supplier};
use quarry_operators::{OpError, Sequence};

use crate::rows::{CustomerSupplier, CustomerSuppliers};

fn customer_location(c: &Customer) -> (&str, &str) {
    (&c.city, &c.country)
}

fn supplier_location(s: &Supplier) -> (&str, &str) {
    (&s.city, &s.country)
}

/// Pairs in the same city and country, as a filtered cross product.
pub fn customer_suppliers<'a>(
    customers: &'a [Customer],
    suppliers: &'a [Supplier],
) -> Sequence<'a, CustomerSupplier<'a>> {
    Sequence::from_slice(customers)
        .cross(&Sequence::from_slice(suppliers))
        .filter(|(c, s)| customer_location(c) == supplier_location(s))
        .project(|(c, s)| CustomerSupplier {
            customer_id: &c.customer_id,
            supplier: &s.supplier_name,
        })
}

/// Same pairs as `customer_suppliers`, via an equality join on named fields.
pub fn customer_suppliers_join<'a>(
    customers: &'a [Customer],
    suppliers: &'a [Supplier],
) -> Result<Sequence<'a, CustomerSupplier<'a>>, OpError> {
    let pairs = Sequence::from_slice(customers).join_on_fields(
        &Sequence::from_slice(suppliers),
        &["city", "country"],
        &["city", "country"],
    )?;
    Ok(pairs.project(|(c, s)| CustomerSupplier {
        customer_id: &c.customer_id,
        supplier: &s.supplier_name,
    }))
}

/// Each customer with the suppliers in its city and country; customers with no
/// local supplier are dropped after the group-join.
pub fn customer_supplier_groups<'a>(
    customers: &'a [Customer],
    suppliers: &'a [Supplier],
) -> Sequence<'a, CustomerSuppliers<'a>> {
    Sequence::from_slice(customers)
        .group_join(
            &Sequence::from_slice(suppliers),
            |c| customer_location(*c),
            |s| supplier_location(*s),
            |c, matches| CustomerSuppliers {
                customer: &c.company_name,
                suppliers: matches.project(|s| s.supplier_name.as_str()),
            },
        )
        .filter(|row| row.suppliers.is_nonempty())
}
