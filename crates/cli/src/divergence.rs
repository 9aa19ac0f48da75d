// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use std::io::Write;
use walkround_arith::{diverges_from_floor, floor_round_div10, round_div10};

/// Largest number of values a single `divergence` scan will check
pub const MAX_SCAN: u64 = 1_000_000;

pub fn execute(out: &mut impl Write, from: i64, to: i64) -> Result<()> {
    if from > to {
        bail!("--from ({from}) must not be greater than --to ({to})");
    }
    let total = to as i128 - from as i128 + 1;
    if total > MAX_SCAN as i128 {
        bail!("range of {total} values exceeds the limit of {MAX_SCAN}");
    }

    let mut diverging = 0u64;
    for x in from..=to {
        if diverges_from_floor(x) {
            diverging += 1;
            writeln!(
                out,
                "{x}: truncate={} floor={}",
                round_div10(x),
                floor_round_div10(x)
            )?;
        }
    }
    writeln!(out, "{diverging} of {total} values diverge")?;

    Ok(())
}
