// src/common/record.rs

use alloc::vec::Vec;
use core::fmt;

/// A single decoded field value.
///
/// Integer fields decode to `Int`, IEEE-754 fields to `Float`. Unit
/// conversion replaces values with `Float`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Int(u32),
    Float(f64),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(v) => f64::from(v),
            Value::Float(v) => v,
        }
    }

    /// Returns the raw integer, `None` for float values.
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Value::Int(v) => Some(v),
            Value::Float(_) => None,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Named field values in register model order.
///
/// Owns its values outright, nothing in it aliases the raw frame it was decoded from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedRecord {
    entries: Vec<(&'static str, Value)>,
}

impl DecodedRecord {
    pub fn with_capacity(capacity: usize) -> Self {
        DecodedRecord { entries: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: Value) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    /// Overwrites an existing field. Returns `false` if the record has no such field.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                entry.1 = value;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Value)> + '_ {
        self.entries.iter().copied()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut Value)> + '_ {
        self.entries.iter_mut().map(|(n, v)| (*n, v))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    /// Keeps only the fields for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&'static str, &Value) -> bool,
    {
        self.entries.retain(|(n, v)| keep(n, v));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DecodedRecord {
    type Item = (&'static str, Value);
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, (&'static str, Value)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}
