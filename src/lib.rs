#![forbid(unsafe_code)]
#![deny(
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::style,
    clippy::use_self,
    clippy::cloned_instead_of_copied
)]
#![warn(clippy::panic, clippy::dbg_macro)]
pub mod passes;
pub mod resource;

use log::info;

use crate::{
    passes::midend::environment::Environment,
    resource::{
        errors::PlanResult,
        rep::{OperationList, Record, RecordShape},
    },
};

/// A planning session: the statement and data tables plus the last plan produced from them.
///
/// A session is meant to be driven by one caller at a time. Share it across threads only
/// behind a lock.
#[derive(Debug, Clone, Default)]
pub struct Session {
    env: Environment,
    ops: OperationList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_statement(&mut self, name: &str, text: &str) -> PlanResult<()> {
        self.env.add_statement(name, text)
    }

    pub fn register_data_type(&mut self, name: &str, shape: RecordShape) -> PlanResult<()> {
        self.env.add_data_type(name, shape)
    }

    pub fn register_record<R: Record>(&mut self, name: &str) -> PlanResult<()> {
        self.env.add_record::<R>(name)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parses `script` against the current tables without touching the stored plan.
    pub fn parse(&self, script: &str) -> PlanResult<OperationList> {
        passes::parse(&self.env, script)
    }

    /// Parses `script` and stores the result as the current plan. On failure the stored
    /// plan is cleared.
    pub fn plan(&mut self, script: &str) -> PlanResult<&OperationList> {
        self.ops = OperationList::new();
        self.ops = self.parse(script)?;
        Ok(&self.ops)
    }

    pub fn operations(&self) -> &OperationList {
        &self.ops
    }

    pub fn print_ops(&self) {
        info!("debug printing operations");
        for op in &self.ops {
            info!("\tOperation: {op}");
        }
    }
}
