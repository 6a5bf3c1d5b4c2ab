use std::{env, io::Write};

use anyhow::Result;
use fieldplan::{
    resource::{
        errors::ReportableError,
        output::print_plan,
        rep::Record,
    },
    Session,
};

const DEMO_SCRIPT: &str = "WRITE kotor:field kotstmt:field; WRITE kastor:field kotstmt:field";

/// Sample records bound by the demonstration session.
struct DataFoo;
struct DataBar;

impl Record for DataFoo {
    const SHAPE: &'static str = "DataFoo";
}

impl Record for DataBar {
    const SHAPE: &'static str = "DataBar";
}

fn enable_logging() {
    if cfg!(debug_assertions) {
        pretty_env_logger::formatted_builder()
            .filter_level(log::LevelFilter::Trace)
            .format(|f, r| writeln!(f, "fieldplan: {}", r.args()))
            .init();
    } else {
        pretty_env_logger::init();
    }
}

fn demo_session() -> Result<Session> {
    let mut session = Session::new();
    session.register_record::<DataFoo>("kotor")?;
    session.register_record::<DataBar>("kastor")?;
    session.register_statement("kotstmt", "foozong")?;
    Ok(session)
}

fn run(script: &str, json: bool) -> Result<()> {
    let mut session = demo_session()?;
    if let Err(e) = session.plan(script) {
        e.report();
        std::process::exit(1)
    }
    session.print_ops();

    if json {
        println!("{}", serde_json::to_string_pretty(session.operations())?);
    } else {
        print_plan(session.operations());
    }
    Ok(())
}

fn main() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    let prog_args: Vec<String> = env::args().collect();
    enable_logging();

    match prog_args.len() {
        1 => run(DEMO_SCRIPT, false),
        2 => match prog_args[1].as_str() {
            "--help" | "-h" => {
                println!("fieldplan v{VERSION}");
                println!("usage: fieldplan [-j | --json] [SCRIPT]");
                Ok(())
            }
            "--version" | "-V" => {
                println!("fieldplan v{VERSION}");
                Ok(())
            }
            "--json" | "-j" => run(DEMO_SCRIPT, true),
            script => run(script, false),
        },
        3 => match prog_args[1].as_str() {
            "--json" | "-j" => run(&prog_args[2], true),
            other => anyhow::bail!("unknown flag '{other}'"),
        },
        _ => anyhow::bail!("Invalid length of arguments!"),
    }
}
