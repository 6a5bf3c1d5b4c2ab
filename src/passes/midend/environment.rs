use itertools::Itertools;
use log::{debug, trace};
use ordermap::OrderMap;

use crate::resource::{
    errors::{PlanErr, PlanResult, Table},
    rep::{Record, RecordShape},
};

/// The two symbol tables a script is resolved against.
///
/// Names are add-once: registering an existing name fails and leaves the table as it was.
/// Entries keep their registration order, which is the order dumps and iteration use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    statements: OrderMap<String, String>,
    data: OrderMap<String, RecordShape>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_statement(&mut self, name: &str, text: &str) -> PlanResult<()> {
        if let Some(existing) = self.statements.get(name) {
            debug!("statement named {name} already contains value: {existing}");
            return Err(PlanErr::DuplicateName {
                table: Table::Statement,
                name: name.to_string(),
            });
        }
        self.statements.insert(name.to_string(), text.to_string());
        debug!("added statement '{text}' named {name}");
        trace!(
            "current declared statements: [{}]",
            self.statements
                .iter()
                .map(|(k, v)| format!("{k} = {v}"))
                .join(", ")
        );
        Ok(())
    }

    pub fn add_data_type(&mut self, name: &str, shape: RecordShape) -> PlanResult<()> {
        if let Some(existing) = self.data.get(name) {
            debug!("data type {name} already contains type: {existing}");
            return Err(PlanErr::DuplicateName {
                table: Table::Data,
                name: name.to_string(),
            });
        }
        debug!("added data type {shape} named {name}");
        self.data.insert(name.to_string(), shape);
        trace!(
            "current declared data: [{}]",
            self.data
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .join(", ")
        );
        Ok(())
    }

    pub fn add_record<R: Record>(&mut self, name: &str) -> PlanResult<()> {
        self.add_data_type(name, RecordShape::of::<R>())
    }

    pub fn statement(&self, name: &str) -> Option<&str> {
        self.statements.get(name).map(String::as_str)
    }

    pub fn data_type(&self, name: &str) -> Option<&RecordShape> {
        self.data.get(name)
    }

    pub fn contains(&self, table: Table, name: &str) -> bool {
        match table {
            Table::Statement => self.statements.contains_key(name),
            Table::Data => self.data.contains_key(name),
        }
    }

    pub fn statements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.statements.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn data_types(&self) -> impl Iterator<Item = (&str, &RecordShape)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }
}
