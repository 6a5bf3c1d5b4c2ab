use log::trace;

use crate::resource::{
    errors::{PlanErr, PlanResult},
    rep::{OpKind, Operation},
};

pub const OPERAND_SEPARATOR: char = ':';

/// Splits `name:field` into its two halves. The field must be non-empty; an empty name is
/// left for the resolver to look up.
pub fn split_operand(operand: &str) -> PlanResult<(&str, &str)> {
    let parts: Vec<&str> = operand.split(OPERAND_SEPARATOR).collect();
    match parts.as_slice() {
        [name, field] if !field.is_empty() => Ok((*name, *field)),
        _ => Err(PlanErr::OperandFormat {
            operand: operand.to_string(),
        }),
    }
}

/// Builds an unresolved operation of `kind`. The source operand is split first, so a bad
/// source is reported even when the destination is also malformed.
pub fn parse_operands(kind: OpKind, src: &str, dst: &str) -> PlanResult<Operation> {
    trace!("parsing cmd {kind} with args: {src}, {dst}");
    let src = split_operand(src)?;
    let dst = split_operand(dst)?;
    Ok(Operation::new(kind, src, dst))
}
