pub mod dispatch;
pub mod operand;
pub mod tokenizer;
