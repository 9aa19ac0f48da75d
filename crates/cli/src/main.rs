// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use clap::Parser;
use cli::Cli;
use helpers::telemetry::setup_simple_tracing;

mod bound;
mod cli;
mod divergence;
pub mod helpers;
mod round;
mod shrink;
mod sqrt_bound;

pub fn main() {
    let cli = Cli::parse();
    setup_simple_tracing(cli.log_level());

    if let Err(err) = cli.execute() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
