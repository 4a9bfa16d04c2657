//! Pairwise Pearson correlation over the per-game feature columns

use super::source::GameLog;
use crate::constants::columns::FEATURES;
use crate::error::Result;

/// Square correlation matrix. Entries are full-precision Pearson r in
/// [-1, 1], or NaN where the coefficient is undefined (fewer than two
/// complete pairs, or a constant column).
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub features: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlate the standard feature columns of `log`
    pub fn compute(log: &GameLog) -> Result<Self> {
        profiling::scope!("CorrelationMatrix::compute");

        let columns = FEATURES
            .iter()
            .map(|name| log.column_as_f64(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_columns(&FEATURES, &columns))
    }

    /// Correlate arbitrary equally-long columns
    pub fn from_columns(features: &[&str], columns: &[Vec<f64>]) -> Self {
        let n = columns.len();
        let mut values = vec![vec![f64::NAN; n]; n];

        for i in 0..n {
            values[i][i] = if has_variance(&columns[i]) { 1.0 } else { f64::NAN };
            for j in (i + 1)..n {
                let r = pearson(&columns[i], &columns[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            features: features.iter().map(|f| f.to_string()).collect(),
            values,
        }
    }

    /// Coefficient for (row, column); NaN when out of range
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// True when no coefficient is defined (e.g. an empty selection)
    pub fn is_undefined(&self) -> bool {
        self.values.iter().flatten().all(|v| v.is_nan())
    }
}

/// Pearson correlation over the positions where both values are finite
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

fn has_variance(values: &[f64]) -> bool {
    let mut finite = values.iter().filter(|v| v.is_finite());
    match finite.next() {
        Some(first) => {
            let mut count = 1;
            let mut varies = false;
            for v in finite {
                count += 1;
                varies |= v != first;
            }
            count >= 2 && varies
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Selection;
    use crate::data::source::tests::sample_log;
    use chrono::NaiveDate;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_pearson_known_values() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&x, &[2.0, 4.0, 6.0, 8.0]) - 1.0).abs() < EPS);
        assert!((pearson(&x, &[8.0, 6.0, 4.0, 2.0]) + 1.0).abs() < EPS);

        // r for this pair is 0.8 exactly in closed form
        let r = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 5.0]);
        assert!((r - 0.8).abs() < 1e-9, "r = {r}");
    }

    #[test]
    fn test_pearson_undefined_cases() {
        assert!(pearson(&[], &[]).is_nan());
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_nan());
    }

    #[test]
    fn test_pearson_skips_incomplete_pairs() {
        let r = pearson(&[1.0, f64::NAN, 2.0, 3.0], &[2.0, 100.0, 4.0, 6.0]);
        assert!((r - 1.0).abs() < EPS);
    }

    #[test]
    fn test_matrix_symmetric_with_unit_diagonal() {
        let log = sample_log();
        let matrix = CorrelationMatrix::compute(&log).unwrap();

        assert_eq!(matrix.features.len(), 6);
        assert_eq!(matrix.features[0], "points");
        assert_eq!(matrix.features[5], "plusMinusPoints");

        for i in 0..matrix.features.len() {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..matrix.features.len() {
                let (a, b) = (matrix.get(i, j), matrix.get(j, i));
                assert!(a.to_bits() == b.to_bits(), "M[{i}][{j}]={a} M[{j}][{i}]={b}");
                assert!((-1.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn test_constant_column_is_nan() {
        let matrix = CorrelationMatrix::from_columns(
            &["a", "b"],
            &[vec![1.0, 2.0, 3.0], vec![5.0, 5.0, 5.0]],
        );
        assert_eq!(matrix.get(0, 0), 1.0);
        assert!(matrix.get(1, 1).is_nan());
        assert!(matrix.get(0, 1).is_nan());
        assert!(matrix.get(1, 0).is_nan());
        assert!(!matrix.is_undefined());
    }

    #[test]
    fn test_empty_selection_is_all_nan() {
        let log = sample_log();
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let filtered = log.filter(&Selection::new(log.players(), day, day)).unwrap();

        let matrix = CorrelationMatrix::compute(&filtered).unwrap();
        assert_eq!(matrix.features.len(), 6);
        assert!(matrix.is_undefined());
    }

    #[test]
    fn test_single_row_is_all_nan() {
        let log = sample_log();
        let day = NaiveDate::from_ymd_opt(2025, 4, 24).unwrap();
        let filtered = log.filter(&Selection::new(log.players(), day, day)).unwrap();
        assert_eq!(filtered.height(), 1);

        assert!(CorrelationMatrix::compute(&filtered).unwrap().is_undefined());
    }
}
