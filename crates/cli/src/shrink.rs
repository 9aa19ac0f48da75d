// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use std::io::Write;
use tracing::info;
use walkround_arith::{RoundingMode, WeightVector};

pub fn execute(
    out: &mut impl Write,
    mut weights: WeightVector,
    limit: u64,
    mode: RoundingMode,
) -> Result<()> {
    let before = weights.clone();
    let passes = weights.shrink_until(limit, mode);
    info!(%before, after = %weights, passes, "Shrunk weight vector");
    writeln!(out, "{} ({} passes)", weights, passes)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink() {
        let mut out = Vec::new();
        execute(
            &mut out,
            WeightVector::new(vec![123_456, -7, 0]),
            100,
            RoundingMode::Truncate,
        )
        .expect("shrink should succeed");
        assert_eq!(String::from_utf8(out).unwrap(), "(12, 0, 0) (4 passes)\n");
    }

    #[test]
    fn test_shrink_modes_differ_on_negatives() {
        let mut truncated = Vec::new();
        execute(&mut truncated, WeightVector::new(vec![-16]), 5, RoundingMode::Truncate)
            .expect("shrink should succeed");
        let mut floored = Vec::new();
        execute(&mut floored, WeightVector::new(vec![-16]), 5, RoundingMode::Floor)
            .expect("shrink should succeed");

        assert_eq!(String::from_utf8(truncated).unwrap(), "(-1) (1 passes)\n");
        assert_eq!(String::from_utf8(floored).unwrap(), "(-2) (1 passes)\n");
    }
}
