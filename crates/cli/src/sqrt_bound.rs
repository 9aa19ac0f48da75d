// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use std::io::Write;
use walkround_arith::sqrt_ceil_like;

pub fn execute(out: &mut impl Write, n: i64) -> Result<()> {
    let bound = sqrt_ceil_like(n)?;
    writeln!(out, "{}", bound)?;

    Ok(())
}
