//! Key values shared by the data model and the operators.
//!
//! `Money` gives monetary amounts a total order so they can be used directly as
//! sort/group keys. `Value` and `CompositeKey` are the runtime key shapes used by
//! field-named joins; they compare structurally, component by component.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::Add;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Non-negative monetary amount.
///
/// Ordering uses `f64::total_cmp`, equality and hashing use the bit pattern, so
/// `Money` is a lawful `Ord + Hash` key. `-0.0` is stored as `0.0` so that both
/// zeros compare, hash and group as one amount. Non-negativity is checked by the
/// dataset loader, not here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub fn new(amount: f64) -> Self {
        // -0.0 == 0.0 under IEEE comparison
        Self(if amount == 0.0 { 0.0 } else { amount })
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    pub fn is_valid_amount(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl From<f64> for Money {
    fn from(v: f64) -> Self {
        Money::new(v)
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> Self {
        m.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// One component of a runtime key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Money(Money),
    Date(NaiveDate),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Money(m) => write!(f, "{m}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// Composite key compared structurally: two keys are equal iff they have the same
/// arity and every component is equal. Ordering is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompositeKey(pub Vec<Value>);

impl CompositeKey {
    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<Value> for CompositeKey {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        CompositeKey(iter.into_iter().collect())
    }
}

/// Named field access for records, used to build keys from field names at runtime.
pub trait Record {
    /// Record type name (stable, used in error messages).
    const NAME: &'static str;

    /// Every field name `field` answers for.
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<Value>;

    fn has_field(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}
