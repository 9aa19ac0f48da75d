// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{bound, divergence, round, shrink, sqrt_bound};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use tracing::{info, instrument, Level};
use walkround_arith::{RoundingMode, WeightVector};
use walkround_config::{load_config, WalkroundConfig};

#[derive(Parser, Debug)]
#[command(name = "walkround")]
#[command(about = "Exact integer rounding for Gröbner walk weight vectors", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `walkround -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn execute(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute_with(&mut out)
    }

    /// Runs the subcommand, writing its report to `out`.
    ///
    /// Configuration is only read by the commands that fall back to it.
    #[instrument(skip_all)]
    pub fn execute_with(self, out: &mut impl Write) -> Result<()> {
        let Cli { config, command, .. } = self;

        match command {
            Commands::Round {
                values,
                mode,
                compare,
            } => {
                let defaults = load_settings(config)?;
                round::execute(
                    out,
                    &values,
                    mode.unwrap_or(defaults.rounding()),
                    compare,
                )?
            }
            Commands::SqrtBound { n } => sqrt_bound::execute(out, n)?,
            Commands::Shrink {
                weights,
                limit,
                mode,
            } => {
                let defaults = load_settings(config)?;
                shrink::execute(
                    out,
                    weights,
                    limit.unwrap_or(defaults.shrink_limit()),
                    mode.unwrap_or(defaults.rounding()),
                )?
            }
            Commands::Bound { weights } => bound::execute(out, &weights)?,
            Commands::Divergence { from, to } => divergence::execute(out, from, to)?,
        }

        Ok(())
    }
}

fn load_settings(config_file: Option<String>) -> Result<WalkroundConfig> {
    let config = load_config(config_file)?;
    info!("Config loaded from: {:?}", config.config_file());
    Ok(config)
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Round `x / 10` to the nearest integer as `(x + 5) / 10`
    Round {
        /// Values to round
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Rounding for negative values: "truncate" or "floor". Defaults to the config
        #[arg(long)]
        mode: Option<RoundingMode>,

        /// Also print the floor result and flag values where the two differ
        #[arg(long)]
        compare: bool,
    },

    /// Print `1 + trunc(sqrt(n))`
    SqrtBound {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Shrink a weight vector by tenths until every entry is within the limit
    Shrink {
        /// Weight vector, eg. "120,-45,3" or "(120, -45, 3)"
        #[arg(allow_hyphen_values = true)]
        weights: WeightVector,

        /// Largest entry magnitude to keep. Defaults to the config
        #[arg(long)]
        limit: Option<u64>,

        /// Rounding for negative entries. Defaults to the config
        #[arg(long)]
        mode: Option<RoundingMode>,
    },

    /// Print the perturbation bound `1 + trunc(sqrt(|w|^2))` of a weight vector
    Bound {
        #[arg(allow_hyphen_values = true)]
        weights: WeightVector,
    },

    /// List values in `[from, to]` where truncating and floor rounding differ
    Divergence {
        #[arg(long, allow_negative_numbers = true)]
        from: i64,

        #[arg(long, allow_negative_numbers = true)]
        to: i64,
    },
}
