pub mod environment;
pub mod resolution;
