use std::fmt::Display;

use colored::Colorize;
use thiserror::Error;

use crate::resource::rep::{OpKind, Role};

pub type PlanResult<T> = Result<T, PlanErr>;

pub trait ReportableError {
    fn report(&self);
}

/// The symbol table a name lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Statement,
    Data,
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Statement => write!(f, "statement"),
            Self::Data => write!(f, "data"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanErr {
    #[error("malformed command '{command}': {detail}")]
    MalformedCommand { command: String, detail: String },

    #[error("unknown command '{keyword}'")]
    UnknownCommand { keyword: String },

    #[error("args to operations are name:field, found '{operand}'")]
    OperandFormat { operand: String },

    #[error("{kind} operation got unknown {role} statement '{name}'")]
    UnknownStatement { kind: OpKind, role: Role, name: String },

    #[error("{kind} operation got unknown {role} data '{name}'")]
    UnknownData { kind: OpKind, role: Role, name: String },

    #[error("{table} name '{name}' already declared")]
    DuplicateName { table: Table, name: String },
}

impl PlanErr {
    pub fn too_few_parts(command: impl Into<String>) -> Self {
        Self::MalformedCommand {
            command: command.into(),
            detail: "less than two parts".to_string(),
        }
    }

    pub fn bad_arity(command: impl Into<String>, kind: OpKind) -> Self {
        let detail = match kind.syntax() {
            Some(syntax) => format!("syntax: {syntax}"),
            None => format!("wrong number of arguments to {kind}"),
        };
        Self::MalformedCommand {
            command: command.into(),
            detail,
        }
    }

    /// Builds the lookup failure for a name missing from `table`.
    pub fn unknown(table: Table, kind: OpKind, role: Role, name: impl Into<String>) -> Self {
        let name = name.into();
        match table {
            Table::Statement => Self::UnknownStatement { kind, role, name },
            Table::Data => Self::UnknownData { kind, role, name },
        }
    }
}

impl ReportableError for PlanErr {
    fn report(&self) {
        eprintln!("{} {}", "[!]".red(), self);
    }
}
