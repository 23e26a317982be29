//! Min-max feature scaling.
//!
//! Fit on a sample matrix, transform maps each column to [0, 1] over the
//! fitted range. A constant column has no range and maps to 0.0.

use super::ModelError;

/// Per-column min-max scaler.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    mins: Vec<f64>,
    ranges: Vec<f64>,
}

impl MinMaxScaler {
    /// Fit column minima and ranges on a sample matrix.
    pub fn fit(samples: &[Vec<f64>]) -> Result<Self, ModelError> {
        let first = samples.first().ok_or(ModelError::EmptyTrainingSet)?;
        let dim = first.len();

        let mut mins = vec![f64::INFINITY; dim];
        let mut maxs = vec![f64::NEG_INFINITY; dim];

        for row in samples {
            if row.len() != dim {
                return Err(ModelError::DimensionMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
            for (j, &v) in row.iter().enumerate() {
                mins[j] = mins[j].min(v);
                maxs[j] = maxs[j].max(v);
            }
        }

        let ranges = mins.iter().zip(&maxs).map(|(lo, hi)| hi - lo).collect();
        Ok(Self { mins, ranges })
    }

    /// Scale one row with the fitted ranges.
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        if row.len() != self.mins.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.mins.len(),
                got: row.len(),
            });
        }
        Ok(row
            .iter()
            .enumerate()
            .map(|(j, &v)| {
                if self.ranges[j] == 0.0 {
                    0.0
                } else {
                    (v - self.mins[j]) / self.ranges[j]
                }
            })
            .collect())
    }

    /// Scale a whole sample matrix.
    pub fn transform_all(&self, samples: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ModelError> {
        samples.iter().map(|row| self.transform(row)).collect()
    }
}
