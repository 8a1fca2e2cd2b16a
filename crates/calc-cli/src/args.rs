//! Command line arguments

use calc_core::config::{CalcConfig, DEFAULT_STACK_CAPACITY};
use clap::Parser;

/// Interactive stack calculator. Reads one command or integer per line.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "calc")]
pub struct Args {
    /// Number of values the stack can hold
    #[arg(short, long)]
    #[clap(default_value_t = DEFAULT_STACK_CAPACITY)]
    pub capacity: usize,

    /// Do not print the stack and prompt after each line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Engine configuration requested on the command line
    pub fn config(&self) -> CalcConfig {
        CalcConfig::new().with_stack_capacity(self.capacity)
    }
}
