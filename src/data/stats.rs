use super::model::{CellValue, DataTable};

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// One histogram bar: bin center, bin width, and count.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

/// Fixed bin count for the distribution view.
pub const HISTOGRAM_BINS: usize = 20;

/// Bin `values` into `bins` equal-width bins spanning [min, max].
/// Returns an empty vec when there is nothing to bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Degenerate case: all values identical → one bar holding everything.
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            center: min,
            width: 1.0,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in &finite {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Gaussian KDE evaluated on an even grid over the data range, scaled to the
/// histogram's count units (density × n × bin_width) so the curve overlays
/// the bars directly.
pub fn density_curve(values: &[f64], bin_width: f64, points: usize) -> Vec<[f64; 2]> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = finite.len();
    if n < 2 || points == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return Vec::new();
    }

    let bandwidth = silverman_bandwidth(&finite);
    if bandwidth <= 0.0 {
        return Vec::new();
    }

    let norm = 1.0 / ((n as f64) * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let scale = n as f64 * bin_width;

    (0..points)
        .map(|i| {
            let x = min + (max - min) * i as f64 / (points - 1) as f64;
            let density: f64 = finite
                .iter()
                .map(|&xi| {
                    let z = (x - xi) / bandwidth;
                    norm * (-0.5 * z * z).exp()
                })
                .sum();
            [x, density * scale]
        })
        .collect()
}

/// Silverman's rule-of-thumb bandwidth.
fn silverman_bandwidth(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    1.06 * var.sqrt() * n.powf(-0.2)
}

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

/// Pairwise Pearson correlation matrix over the table's numeric columns.
/// Returns the column names and a square matrix in the same order; entries
/// are NaN where a pair has fewer than two complete observations or zero
/// variance. Needs at least two numeric columns, else `None`.
pub fn correlation_matrix(table: &DataTable) -> Option<(Vec<String>, Vec<Vec<f64>>)> {
    let names = table.numeric_column_names();
    if names.len() < 2 {
        return None;
    }

    let columns: Vec<&[CellValue]> = names
        .iter()
        .map(|n| table.column(n).map(|c| c.values.as_slice()))
        .collect::<Option<_>>()?;

    let k = columns.len();
    let mut matrix = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        matrix[i][i] = 1.0;
        for j in (i + 1)..k {
            let r = pearson(columns[i], columns[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    Some((names, matrix))
}

/// Pearson r over pairwise-complete observations: rows where either cell is
/// null (or non-numeric) are skipped.
fn pearson(a: &[CellValue], b: &[CellValue]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| Some((x.as_f64()?, y.as_f64()?)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let n = pairs.len() as f64;
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

// ---------------------------------------------------------------------------
// Value counts
// ---------------------------------------------------------------------------

/// Frequency counts of distinct non-null values, descending. Ties break by
/// value so rendering order is deterministic.
pub fn value_counts(values: &[CellValue]) -> Vec<(String, usize)> {
    let mut counts: std::collections::BTreeMap<String, usize> = std::collections::BTreeMap::new();
    for v in values {
        if !v.is_null() {
            *counts.entry(v.to_string()).or_default() += 1;
        }
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Column, Dtype};

    fn text(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|s| CellValue::Text(s.to_string())).collect()
    }

    #[test]
    fn histogram_counts_sum_to_input_len() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = histogram(&values, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        // uniform data over evenly divisible range → even bins
        assert!(bins.iter().all(|b| b.count == 5));
    }

    #[test]
    fn histogram_of_constant_data_is_one_bar() {
        let bins = histogram(&[4.2; 17], HISTOGRAM_BINS);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 17);
    }

    #[test]
    fn histogram_of_empty_input_is_empty() {
        assert!(histogram(&[], HISTOGRAM_BINS).is_empty());
        assert!(histogram(&[f64::NAN], HISTOGRAM_BINS).is_empty());
    }

    #[test]
    fn density_curve_spans_data_range() {
        let values: Vec<f64> = (0..50).map(|i| i as f64 / 7.0).collect();
        let curve = density_curve(&values, 0.35, 100);
        assert_eq!(curve.len(), 100);
        assert!((curve[0][0] - 0.0).abs() < 1e-9);
        assert!((curve[99][0] - 49.0 / 7.0).abs() < 1e-9);
        assert!(curve.iter().all(|p| p[1] >= 0.0));
    }

    #[test]
    fn pearson_of_linear_data_is_one() {
        let a: Vec<CellValue> = (0..10).map(|i| CellValue::Integer(i)).collect();
        let b: Vec<CellValue> = (0..10).map(|i| CellValue::Float(2.0 * i as f64 + 1.0)).collect();
        assert!((pearson(&a, &b) - 1.0).abs() < 1e-12);

        let c: Vec<CellValue> = (0..10).map(|i| CellValue::Integer(-i)).collect();
        assert!((pearson(&a, &c) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_skips_null_rows() {
        let a = vec![
            CellValue::Integer(1),
            CellValue::Null,
            CellValue::Integer(2),
            CellValue::Integer(3),
        ];
        let b = vec![
            CellValue::Float(2.0),
            CellValue::Float(100.0),
            CellValue::Float(4.0),
            CellValue::Float(6.0),
        ];
        assert!((pearson(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_needs_two_numeric_columns() {
        let table = DataTable::new(vec![Column {
            name: "only".into(),
            dtype: Dtype::Integer,
            values: (0..5).map(CellValue::Integer).collect(),
        }]);
        assert!(correlation_matrix(&table).is_none());

        let empty = DataTable::new(vec![Column {
            name: "words".into(),
            dtype: Dtype::Text,
            values: text(&["a", "b"]),
        }]);
        assert!(correlation_matrix(&empty).is_none());
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let a: Vec<CellValue> = [1.0, 2.0, 3.0, 4.0].iter().map(|&v| CellValue::Float(v)).collect();
        let b: Vec<CellValue> = [2.0, 1.0, 4.0, 3.0].iter().map(|&v| CellValue::Float(v)).collect();
        let table = DataTable::new(vec![
            Column { name: "a".into(), dtype: Dtype::Float, values: a },
            Column { name: "b".into(), dtype: Dtype::Float, values: b },
        ]);
        let (names, m) = correlation_matrix(&table).unwrap();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][1], 1.0);
        assert_eq!(m[0][1], m[1][0]);
        assert!(m[0][1].abs() <= 1.0);
    }

    #[test]
    fn value_counts_descend_with_deterministic_ties() {
        let values = text(&["a", "b", "a", "c", "a"]);
        let counts = value_counts(&values);
        assert_eq!(counts[0], ("a".to_string(), 3));
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), 5);
        assert!(counts[0].1 >= counts[1].1 && counts[1].1 >= counts[2].1);
        // b and c tie at 1 → value order
        assert_eq!(counts[1].0, "b");
        assert_eq!(counts[2].0, "c");
    }

    #[test]
    fn value_counts_ignore_nulls() {
        let mut values = text(&["x", "x"]);
        values.push(CellValue::Null);
        let counts = value_counts(&values);
        assert_eq!(counts, vec![("x".to_string(), 2)]);
    }
}
