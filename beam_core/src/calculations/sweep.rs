//! # Parameter Sweeps
//!
//! Batch sensitivity runs over one request. Each analysis is independent and
//! the engine holds no state, so the variants are evaluated in parallel with
//! rayon. Results come back in the order of the supplied values.

use log::trace;
use rayon::prelude::*;

use crate::errors::CalcResult;

use super::analysis::{analyze, AnalysisResult};
use super::input::{AnalysisInput, AnalysisSettings};

/// One sweep sample: the varied value and its analysis outcome
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub value: f64,
    pub result: CalcResult<AnalysisResult>,
}

fn sweep<F>(
    input: &AnalysisInput,
    settings: &AnalysisSettings,
    values: &[f64],
    label: &str,
    apply: F,
) -> Vec<SweepPoint>
where
    F: Fn(AnalysisInput, f64) -> AnalysisInput + Sync,
{
    values
        .par_iter()
        .map(|&value| {
            trace!("{} sweep: analyzing {} = {}", label, label, value);
            let variant = apply(input.clone(), value);
            SweepPoint {
                value,
                result: analyze(&variant, settings),
            }
        })
        .collect()
}

/// Analyze the request once per load factor
pub fn load_factor_sweep(
    input: &AnalysisInput,
    settings: &AnalysisSettings,
    factors: &[f64],
) -> Vec<SweepPoint> {
    sweep(input, settings, factors, "load_factor", AnalysisInput::with_load_factor)
}

/// Analyze the request once per effective-length factor K
pub fn effective_length_sweep(
    input: &AnalysisInput,
    settings: &AnalysisSettings,
    factors: &[f64],
) -> Vec<SweepPoint> {
    sweep(
        input,
        settings,
        factors,
        "effective_length_factor",
        AnalysisInput::with_effective_length_factor,
    )
}
