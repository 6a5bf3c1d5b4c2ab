pub mod errors;
pub mod output;
pub mod rep;
pub mod tk;
