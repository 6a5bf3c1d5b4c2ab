use std::{fmt::Display, ops::Deref};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The kind of a command. Only `Read` and `Write` are ever produced by the dispatcher;
/// `DecStmt` and `DecDat` are reserved keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    Read,
    Write,
    DecStmt,
    DecDat,
}

impl OpKind {
    pub const ALL: [Self; 4] = [Self::Read, Self::Write, Self::DecStmt, Self::DecDat];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::DecStmt => "DECSTMT",
            Self::DecDat => "DECDAT",
        }
    }

    /// Usage string quoted by arity errors. Reserved kinds have none.
    pub fn syntax(&self) -> Option<&'static str> {
        match self {
            Self::Read => Some("READ src:field dst:field"),
            Self::Write => Some("WRITE src:field dst:field"),
            Self::DecStmt | Self::DecDat => None,
        }
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Which side of an operation an operand sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Source,
    Destination,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// A single field transfer between a statement and a data record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    pub kind: OpKind,
    pub src: String,
    pub src_field: String,
    pub dst: String,
    pub dst_field: String,
}

impl Operation {
    pub fn new(
        kind: OpKind,
        (src, src_field): (&str, &str),
        (dst, dst_field): (&str, &str),
    ) -> Self {
        Self {
            kind,
            src: src.to_string(),
            src_field: src_field.to_string(),
            dst: dst.to_string(),
            dst_field: dst_field.to_string(),
        }
    }

    pub fn name(&self, role: Role) -> &str {
        match role {
            Role::Source => &self.src,
            Role::Destination => &self.dst,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{} -> {}:{}",
            self.kind, self.src, self.src_field, self.dst, self.dst_field
        )
    }
}

/// Resolved operations in script order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationList(Vec<Operation>);

impl OperationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<Operation> {
        self.0
    }
}

impl Deref for OperationList {
    type Target = [Operation];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Operation> for OperationList {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OperationList {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for OperationList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("; "))
    }
}
