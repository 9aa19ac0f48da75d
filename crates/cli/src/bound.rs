// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use std::io::Write;
use walkround_arith::WeightVector;

pub fn execute(out: &mut impl Write, weights: &WeightVector) -> Result<()> {
    let bound = weights.perturbation_bound()?;
    writeln!(out, "{}", bound)?;

    Ok(())
}
