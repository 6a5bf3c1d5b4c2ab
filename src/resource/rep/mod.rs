pub mod operation;
pub mod shape;

pub use operation::{OpKind, Operation, OperationList, Role};
pub use shape::{Record, RecordShape};
