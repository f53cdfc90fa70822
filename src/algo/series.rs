/// The default number of peaks reported by [peaks]
pub const DEFAULT_LIMIT: usize = 100;

/// Slide a window of `window` values over `data`. In each window whose
/// (population) variance exceeds `threshold`, the values above the mean
/// plus one standard deviation count as peaks.
///
/// All peaks found, sorted in descending order and truncated to `limit`
/// entries. A value is reported once for each window it peaks in.
pub fn peaks(data: &[f64], window: usize, threshold: f64, limit: usize) -> Vec<f64> {
    if window == 0 || window > data.len() {
        return Vec::new();
    }

    let n = window as f64;
    let mut results = Vec::new();
    for values in data.windows(window) {
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        if variance <= threshold {
            continue;
        }
        let cutoff = mean + variance.sqrt();
        results.extend(values.iter().copied().filter(|&x| x > cutoff));
    }

    results.sort_by(|a, b| b.total_cmp(a));
    results.truncate(limit);
    results
}

// ----- T E S T S ---------------------------------------------------------------------
