pub mod frontend;
pub mod midend;

use crate::{
    passes::{
        frontend::{dispatch::dispatch, tokenizer::split_commands},
        midend::{environment::Environment, resolution::Resolver},
    },
    resource::{errors::PlanResult, rep::OperationList},
};

/// Runs every command of `script` through dispatch and resolution, stopping at the first error.
pub fn parse(env: &Environment, script: &str) -> PlanResult<OperationList> {
    let resolver = Resolver::new(env);
    split_commands(script)
        .into_iter()
        .map(|command| resolver.resolve(dispatch(command)?))
        .collect()
}
