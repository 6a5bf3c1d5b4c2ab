use log::debug;

use crate::{
    passes::frontend::{operand::parse_operands, tokenizer::split_tokens},
    resource::{
        errors::{PlanErr, PlanResult},
        rep::{OpKind, Operation},
        tk::Tk,
    },
};

/// Number of tokens in a READ or WRITE command: keyword, source, destination.
const OPERATION_ARITY: usize = 3;

/// Turns one command into an unresolved operation.
///
/// The two-part minimum is checked before the keyword is looked at, so a bare `FOO` is
/// malformed rather than unknown. Reserved keywords (`DECSTMT`, `DECDAT`) are unknown
/// commands.
pub fn dispatch(command: &str) -> PlanResult<Operation> {
    let parts = split_tokens(command);
    if parts.len() < 2 {
        return Err(PlanErr::too_few_parts(command));
    }

    match Tk::keyword(parts[0]).map(OpKind::from) {
        Some(kind @ (OpKind::Read | OpKind::Write)) => {
            if parts.len() != OPERATION_ARITY {
                return Err(PlanErr::bad_arity(command, kind));
            }
            debug!("dispatching {kind} command '{command}'");
            parse_operands(kind, parts[1], parts[2])
        }
        _ => Err(PlanErr::UnknownCommand {
            keyword: parts[0].to_string(),
        }),
    }
}
