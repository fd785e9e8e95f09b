//! Key-size scoring
//!
//! Smaller keys are riskier, so each formula weights an MSU by its size.
//!
//! ```text
//! Elliot(k)   = ∏_{i=k}^{U-1} (M - i),   U = min(maxK, M - 1)
//! sdcMicro(k) = (2^(M-k) - 1) · k! · (M-k)! / M!
//! ```
//!
//! where `M` is the number of columns. The sdcMicro weight is evaluated in
//! log space as `(2^(M-k) - 1) / C(M, k)` so wide tables do not overflow.

use serde::{Deserialize, Serialize};

/// Scoring formula selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormula {
    Elliot,
    SdcMicro,
}

impl Default for ScoringFormula {
    fn default() -> Self {
        ScoringFormula::SdcMicro
    }
}

/// Precomputed weights for key sizes `1..=max_key_size`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    formula: ScoringFormula,
    /// Index `k - 1` holds the weight of a size-k key
    weights: Vec<f64>,
}

impl ScoreTable {
    pub fn new(formula: ScoringFormula, columns: usize, max_key_size: usize) -> Self {
        let weights = (1..=max_key_size)
            .map(|k| match formula {
                ScoringFormula::Elliot => elliot_score(k, columns, max_key_size),
                ScoringFormula::SdcMicro => sdc_micro_score(k, columns),
            })
            .collect();
        Self { formula, weights }
    }

    #[inline]
    pub fn formula(&self) -> ScoringFormula {
        self.formula
    }

    #[inline]
    pub fn max_key_size(&self) -> usize {
        self.weights.len()
    }

    /// Weight of a size-k key (0 outside the table)
    #[inline]
    pub fn score(&self, key_size: usize) -> f64 {
        key_size
            .checked_sub(1)
            .and_then(|i| self.weights.get(i))
            .copied()
            .unwrap_or(0.0)
    }
}

fn elliot_score(k: usize, columns: usize, max_key_size: usize) -> f64 {
    let upper = max_key_size.min(columns.saturating_sub(1));
    (k..upper).map(|i| (columns - i) as f64).product()
}

fn sdc_micro_score(k: usize, columns: usize) -> f64 {
    if k == 0 || k >= columns {
        return 0.0;
    }
    let free = (columns - k) as f64;
    // ln(2^n - 1) = n·ln2 + ln(1 - 2^-n)
    let ln_numerator = free * std::f64::consts::LN_2 + (-(2f64.powf(-free))).ln_1p();
    (ln_numerator - ln_binomial(columns, k)).exp()
}

fn ln_binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum()
}
