//! The `Pageable` capability and its implementations
//!
//! A pageable is anything that can report its length and hand back a
//! contiguous run of items. The paginator never owns or mutates it.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::VecDeque;
use std::ops::Range;

/// Length-reporting, range-extractable collection
pub trait Pageable {
    /// Item yielded by [`Pageable::slice`]
    type Item;

    /// Number of items in the collection
    fn total_items(&self) -> Result<usize>;

    /// Items at the 0-indexed half-open `range`, truncated at the end
    fn slice(&self, range: Range<usize>) -> Result<Vec<Self::Item>>;
}

/// Clamp a range so it never indexes past `len`
fn bounded(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    range.start.min(end)..end
}

impl<T: Clone> Pageable for [T] {
    type Item = T;

    fn total_items(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<T>> {
        Ok(self[bounded(range, self.len())].to_vec())
    }
}

impl<T: Clone> Pageable for Vec<T> {
    type Item = T;

    fn total_items(&self) -> Result<usize> {
        self.as_slice().total_items()
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<T>> {
        self.as_slice().slice(range)
    }
}

impl<T: Clone> Pageable for VecDeque<T> {
    type Item = T;

    fn total_items(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<T>> {
        Ok(self.range(bounded(range, self.len())).cloned().collect())
    }
}

impl<P: Pageable + ?Sized> Pageable for &P {
    type Item = P::Item;

    fn total_items(&self) -> Result<usize> {
        (**self).total_items()
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<P::Item>> {
        (**self).slice(range)
    }
}

macro_rules! pageable_range {
    ($($t:ty),*) => {
        $(
            impl Pageable for Range<$t> {
                type Item = $t;

                fn total_items(&self) -> Result<usize> {
                    let len = (self.end as i128 - self.start as i128).max(0);
                    usize::try_from(len).map_err(|_| Error::not_pageable("oversized range"))
                }

                fn slice(&self, range: Range<usize>) -> Result<Vec<$t>> {
                    let range = bounded(range, self.total_items()?);
                    // The sum fits in the item type; the offset alone may not
                    Ok((range.start..range.end)
                        .map(|offset| (self.start as i128 + offset as i128) as $t)
                        .collect())
                }
            }
        )*
    };
}

pageable_range!(i32, i64, u32, u64, usize);

/// JSON kind name, used in `NotPageable` errors
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Only JSON arrays are pageable
impl Pageable for Value {
    type Item = Value;

    fn total_items(&self) -> Result<usize> {
        match self {
            Value::Array(items) => Ok(items.len()),
            other => Err(Error::not_pageable(json_kind(other))),
        }
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<Value>> {
        match self {
            Value::Array(items) => items.slice(range),
            other => Err(Error::not_pageable(json_kind(other))),
        }
    }
}

/// Pageable backed by an accessor closure
///
/// The closure receives an already bounded range and returns the items in
/// it. Useful when items live behind a store the caller can index into.
pub struct FromFn<F> {
    len: usize,
    fetch: F,
}

impl<F> FromFn<F> {
    /// Create an accessor-backed pageable of `len` items
    pub fn new(len: usize, fetch: F) -> Self {
        Self { len, fetch }
    }
}

impl<T, F> Pageable for FromFn<F>
where
    F: Fn(Range<usize>) -> Vec<T>,
{
    type Item = T;

    fn total_items(&self) -> Result<usize> {
        Ok(self.len)
    }

    fn slice(&self, range: Range<usize>) -> Result<Vec<T>> {
        Ok((self.fetch)(bounded(range, self.len)))
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("len", &self.len).finish()
    }
}
