//! Simple Moving Average (SMA).
//!
//! Trailing mean of close prices over a fixed number of observations.
//! Positions with fewer than `window` observations have no value; a partial
//! window is never averaged. A window containing a blank (NaN) close also has
//! no value.

use thiserror::Error;

use crate::domain::Bar;

/// Window of the dashboard's trend line, in trading days.
pub const SMA_WINDOW: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmaError {
    #[error("SMA window must be >= 1")]
    ZeroWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sma {
    window: usize,
}

impl Sma {
    pub fn new(window: usize) -> Result<Self, SmaError> {
        if window == 0 {
            return Err(SmaError::ZeroWindow);
        }
        Ok(Self { window })
    }

    pub fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        compute_sma(&closes, self.window)
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self { window: SMA_WINDOW }
    }
}

/// Trailing simple moving average, aligned with `closes`.
///
/// `result[i]` is `None` when `i + 1 < window`, otherwise the mean of
/// `closes[i + 1 - window ..= i]`. A zero window yields all `None`.
pub fn compute_sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut result = vec![None; n];

    if window == 0 || n < window {
        return result;
    }

    // Sum of the finite values in the window plus a count of blanks, so a NaN
    // leaving the window does not poison the running sum.
    let mut sum = 0.0;
    let mut nan_count = 0usize;

    for i in 0..n {
        let entering = closes[i];
        if entering.is_nan() {
            nan_count += 1;
        } else {
            sum += entering;
        }

        if i >= window {
            let leaving = closes[i - window];
            if leaving.is_nan() {
                nan_count -= 1;
            } else {
                sum -= leaving;
            }
        }

        if i + 1 >= window && nan_count == 0 {
            result[i] = Some(sum / window as f64);
        }
    }

    result
}
