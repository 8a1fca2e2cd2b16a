//! Stack Calculator - CLI
//!
//! Interactive line-oriented front end to the calculator engine.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use log::{error, info};

use calc_core::Calculator;

mod args;
mod command;
mod repl;

use args::Args;
use repl::Repl;

fn main() {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(buf, "{}: {}: {}", buf.timestamp_micros(), record.level(), record.args())
        })
        .init();

    let args = Args::parse();

    // Create calculator
    let calc = match Calculator::with_config(args.config()) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("stack capacity {}", calc.capacity());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut repl = Repl::new(calc, args.quiet);

    if let Err(e) = repl.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    info!("{} value(s) left on the stack", repl.calculator().count());
}
