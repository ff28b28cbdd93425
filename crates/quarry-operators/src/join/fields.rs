//! Joins keyed by field names on `Record` types.
//!
//! The key shape is checked when the pipeline is built: both sides must name the
//! same number of fields, and every name must exist on its record type.

use quarry_core::types::{CompositeKey, Record};

use crate::error::{OpError, Result};
use crate::sequence::Sequence;

impl<'a, L: Record + Sync + 'a> Sequence<'a, &'a L> {
    /// Inner equality join on `outer_fields == inner_fields`, component-wise.
    pub fn join_on_fields<R: Record + Sync + 'a>(
        &self,
        inner: &Sequence<'a, &'a R>,
        outer_fields: &[&str],
        inner_fields: &[&str],
    ) -> Result<Sequence<'a, (&'a L, &'a R)>> {
        let (outer_fields, inner_fields) = check_key_shape::<L, R>(outer_fields, inner_fields)?;
        Ok(self.join(
            inner,
            move |o: &&'a L| composite_key(*o, &outer_fields),
            move |i: &&'a R| composite_key(*i, &inner_fields),
            |o, i| (o, i),
        ))
    }

    /// Group-join on `outer_fields == inner_fields`, component-wise.
    pub fn group_join_on_fields<R: Record + Sync + 'a>(
        &self,
        inner: &Sequence<'a, &'a R>,
        outer_fields: &[&str],
        inner_fields: &[&str],
    ) -> Result<Sequence<'a, (&'a L, Sequence<'a, &'a R>)>> {
        let (outer_fields, inner_fields) = check_key_shape::<L, R>(outer_fields, inner_fields)?;
        Ok(self.group_join(
            inner,
            move |o: &&'a L| composite_key(*o, &outer_fields),
            move |i: &&'a R| composite_key(*i, &inner_fields),
            |o, matches| (o, matches),
        ))
    }
}

fn check_key_shape<L: Record, R: Record>(
    outer: &[&str],
    inner: &[&str],
) -> Result<(Vec<String>, Vec<String>)> {
    if outer.len() != inner.len() {
        return Err(OpError::KeyMismatch {
            outer: outer.len(),
            inner: inner.len(),
        });
    }
    if outer.is_empty() {
        return Err(OpError::EmptyKey);
    }
    check_fields::<L>(outer)?;
    check_fields::<R>(inner)?;
    Ok((
        outer.iter().map(|f| f.to_string()).collect(),
        inner.iter().map(|f| f.to_string()).collect(),
    ))
}

fn check_fields<X: Record>(fields: &[&str]) -> Result<()> {
    match fields.iter().find(|f| !X::has_field(f)) {
        Some(missing) => Err(OpError::UnknownField {
            record: X::NAME,
            field: missing.to_string(),
        }),
        None => Ok(()),
    }
}

fn composite_key<X: Record>(record: &X, fields: &[String]) -> CompositeKey {
    fields.iter().filter_map(|f| record.field(f)).collect()
}
