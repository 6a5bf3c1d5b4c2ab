use log::trace;

use crate::{
    passes::midend::environment::Environment,
    resource::{
        errors::{PlanErr, PlanResult, Table},
        rep::{OpKind, Operation, Role},
    },
};

/// The name resolution pass.
///
/// Checks that both operands of an operation name a symbol in the table their direction
/// requires: a READ moves a field out of a statement into a data record, a WRITE moves it
/// the other way. Field names are passed through untouched.
pub struct Resolver<'env> {
    env: &'env Environment,
}

impl<'env> Resolver<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    /// The (source, destination) tables for `kind`, or `None` for kinds with nothing to resolve.
    pub fn tables(kind: OpKind) -> Option<(Table, Table)> {
        match kind {
            OpKind::Read => Some((Table::Statement, Table::Data)),
            OpKind::Write => Some((Table::Data, Table::Statement)),
            OpKind::DecStmt | OpKind::DecDat => None,
        }
    }

    pub fn resolve(&self, op: Operation) -> PlanResult<Operation> {
        let Some((src_table, dst_table)) = Self::tables(op.kind) else {
            return Ok(op);
        };
        self.lookup(&op, Role::Source, src_table)?;
        self.lookup(&op, Role::Destination, dst_table)?;
        trace!("resolved {op}");
        Ok(op)
    }

    fn lookup(&self, op: &Operation, role: Role, table: Table) -> PlanResult<()> {
        let name = op.name(role);
        if self.env.contains(table, name) {
            Ok(())
        } else {
            Err(PlanErr::unknown(table, op.kind, role, name))
        }
    }
}
