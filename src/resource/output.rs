use colored::Colorize;

use super::rep::{OpKind, Operation, OperationList};

#[macro_export]
macro_rules! note {
    () => {};
    ($($arg:tt)*) => {{
        use colored::Colorize;

        println!("{} {}", "[i]".cyan(), format_args!($($arg)*));
    }};
}

/// Renders one operation with its kind highlighted.
pub fn render(op: &Operation) -> String {
    let kind = match op.kind {
        OpKind::Read => op.kind.keyword().green(),
        OpKind::Write => op.kind.keyword().yellow(),
        OpKind::DecStmt | OpKind::DecDat => op.kind.keyword().normal(),
    };
    format!(
        "{kind} {}:{} {} {}:{}",
        op.src.bold(),
        op.src_field,
        "->".dimmed(),
        op.dst.bold(),
        op.dst_field
    )
}

pub fn print_plan(ops: &OperationList) {
    crate::note!("{} operation(s)", ops.len());
    for (i, op) in ops.iter().enumerate() {
        println!("\t{i:>3} {}", render(op));
    }
}
