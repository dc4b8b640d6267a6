use crate::dataframe::base::DataFrame;
use crate::error::Result;
use crate::na::NA;
use crate::scalar::Scalar;
use crate::series::Series;

/// Positions of the deepest peak-to-recovery stretch of a value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawdownPeriod {
    /// Position of the running-maximum peak preceding the deepest trough
    pub start: usize,
    /// First later position whose value recovers to at least the peak
    pub end: usize,
}

/// Drawdown of a value sequence relative to its running maximum.
///
/// Same-length output; `out[i] = value[i] / max - 1`. Missing and non-numeric
/// cells leave the running maximum untouched and produce a missing output.
/// The maximum seeds at the first numeric value, so leading missing cells
/// yield `NA` rather than poisoning the rest of the sequence; with a numeric
/// first cell, position 0 is 0. A running maximum of zero yields `NA` (no
/// division by zero).
pub fn calculate_drawdown(values: &[NA<Scalar>]) -> Vec<NA<Scalar>> {
    let mut result = Vec::with_capacity(values.len());
    let mut max: Option<f64> = None;
    for cell in values {
        match cell.value().and_then(Scalar::as_f64) {
            Some(value) => {
                let peak = max.map_or(value, |m| m.max(value));
                max = Some(peak);
                if peak == 0.0 {
                    result.push(NA::NA);
                } else {
                    result.push(NA::Value(Scalar::Number(value / peak - 1.0)));
                }
            }
            None => result.push(NA::NA),
        }
    }
    result
}

/// Drawdown analytics over a DataFrame column.
pub trait DrawdownExt {
    /// Compute the drawdown of a column and add it to the frame as a new
    /// column keyed by the frame's row index.
    fn drawdown(&mut self, column: &str, new_column: &str) -> Result<()>;

    /// Deepest drawdown of a column: the minimum of its drawdown sequence,
    /// missing values excluded. `NA` when nothing is numeric.
    fn maximum_drawdown(&self, column: &str) -> NA<f64>;

    /// Start and end positions of the deepest drawdown: the running-maximum
    /// peak preceding the global trough, and the first later position whose
    /// raw value recovers to at least the peak. `None` when no recovery
    /// exists by series end.
    fn drawdown_duration(&self, column: &str) -> Option<DrawdownPeriod>;
}

impl DrawdownExt for DataFrame {
    fn drawdown(&mut self, column: &str, new_column: &str) -> Result<()> {
        let drawdown = calculate_drawdown(&self.values(column));
        let keys = self.index().to_vec();
        let series = Series::with_index(drawdown, keys)?;
        self.add_column(series, Some(new_column))?;
        Ok(())
    }

    fn maximum_drawdown(&self, column: &str) -> NA<f64> {
        calculate_drawdown(&self.values(column))
            .iter()
            .filter_map(|cell| cell.value().and_then(Scalar::as_f64))
            .fold(None, |min: Option<f64>, value| {
                Some(min.map_or(value, |m| m.min(value)))
            })
            .into()
    }

    fn drawdown_duration(&self, column: &str) -> Option<DrawdownPeriod> {
        let values: Vec<Option<f64>> = self
            .values(column)
            .iter()
            .map(|cell| cell.value().and_then(Scalar::as_f64))
            .collect();
        let drawdown: Vec<Option<f64>> = calculate_drawdown(&self.values(column))
            .iter()
            .map(|cell| cell.value().and_then(Scalar::as_f64))
            .collect();

        // Global trough of the drawdown sequence, earliest on ties
        let mut trough: Option<(usize, f64)> = None;
        for (pos, cell) in drawdown.iter().enumerate() {
            if let Some(value) = cell {
                if trough.map_or(true, |(_, min)| *value < min) {
                    trough = Some((pos, *value));
                }
            }
        }
        let (trough_pos, _) = trough?;

        // Running-maximum peak up to and including the trough
        let mut peak: Option<(usize, f64)> = None;
        for (pos, cell) in values.iter().enumerate().take(trough_pos + 1) {
            if let Some(value) = cell {
                if peak.map_or(true, |(_, max)| *value > max) {
                    peak = Some((pos, *value));
                }
            }
        }
        let (start, peak_value) = peak?;

        // First later position recovering to the peak
        for (pos, cell) in values.iter().enumerate().skip(start + 1) {
            if let Some(value) = cell {
                if *value >= peak_value {
                    return Some(DrawdownPeriod { start, end: pos });
                }
            }
        }
        None
    }
}
