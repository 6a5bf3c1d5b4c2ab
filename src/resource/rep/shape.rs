use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Implemented by structured record types that can be bound to a data name.
///
/// The planner never looks inside a record, it only needs a stable name for the shape.
/// Field validation can later hang off this trait without touching the tables.
pub trait Record {
    const SHAPE: &'static str;
}

/// Opaque descriptor for a structured record shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordShape(String);

impl RecordShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn of<R: Record>() -> Self {
        Self(R::SHAPE.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for RecordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
