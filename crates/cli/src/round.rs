// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use std::io::Write;
use tracing::debug;
use walkround_arith::{diverges_from_floor, floor_round_div10, RoundingMode};

pub fn execute(
    out: &mut impl Write,
    values: &[i64],
    mode: RoundingMode,
    compare: bool,
) -> Result<()> {
    debug!(count = values.len(), %mode, "Rounding values");
    for &x in values {
        let rounded = mode.round_div10(x);
        if compare {
            let marker = if diverges_from_floor(x) {
                ", diverges"
            } else {
                ""
            };
            writeln!(
                out,
                "{x} -> {rounded} (floor: {}{marker})",
                floor_round_div10(x)
            )?;
        } else {
            writeln!(out, "{x} -> {rounded}")?;
        }
    }

    Ok(())
}
