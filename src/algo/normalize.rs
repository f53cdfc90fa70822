use log::{debug, trace};
use thiserror::Error;

/// The threshold used when none is given
pub const DEFAULT_THRESHOLD: f64 = 0.5;
/// The number of rounds used when none is given
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Accumulator cap for [normalize_with_means]
pub const DEFAULT_LIMIT: usize = 1000;

// The threshold grows by 10% per round
const GROWTH: f64 = 1.1;

/// The values passing the filter in round `round` span no usable range:
/// either a single value, a set of identical values, or a range too wide
/// to represent.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("degenerate range in round {round}: [{min}, {max}]")]
pub struct DegenerateRange {
    pub round: usize,
    pub min: f64,
    pub max: f64,
}

/// Iterated filtering and min-max normalization.
///
/// For up to `max_iterations` rounds, the values of `data` strictly
/// greater than the current threshold are rescaled into [0, 1] by
/// `(x - min) / (max - min)`, and appended to the result in their original
/// relative order. Then the threshold grows by a factor of 1.1.
///
/// Iteration stops early when nothing passes the filter. NaN never passes.
/// If the filtered values span no finite range (e.g. just a single value,
/// or one of them infinite), the call fails with [DegenerateRange] rather
/// than producing NaN or infinity.
///
/// ```
/// use algobox::algo::normalize;
/// assert_eq!(normalize(&[], 0.5, 100).unwrap(), Vec::<f64>::new());
/// assert_eq!(normalize(&[1., 2., 0.25], 0.5, 1).unwrap(), vec![0., 1.]);
/// ```
pub fn normalize(
    data: &[f64],
    threshold: f64,
    max_iterations: usize,
) -> Result<Vec<f64>, DegenerateRange> {
    let mut results = Vec::new();
    let mut threshold = threshold;

    for round in 0..max_iterations {
        let Some(normalized) = normalize_round(data, threshold, round)? else {
            debug!("normalize: nothing above {threshold} in round {round}");
            break;
        };
        results.extend(normalized);
        threshold *= GROWTH;
    }

    Ok(results)
}

/// The long form of [normalize]: After the normalized values of each
/// round, their mean is appended as well. If the accumulated result
/// grows beyond `limit` entries, it is truncated to `limit`, and
/// iteration stops. The final result is sorted in ascending order.
pub fn normalize_with_means(
    data: &[f64],
    threshold: f64,
    max_iterations: usize,
    limit: usize,
) -> Result<Vec<f64>, DegenerateRange> {
    let mut results = Vec::new();
    let mut threshold = threshold;

    for round in 0..max_iterations {
        let Some(normalized) = normalize_round(data, threshold, round)? else {
            debug!("normalize_with_means: nothing above {threshold} in round {round}");
            break;
        };
        let mean = normalized.iter().sum::<f64>() / normalized.len() as f64;
        results.extend(normalized);
        threshold *= GROWTH;

        results.push(mean);
        if results.len() > limit {
            results.truncate(limit);
            break;
        }
    }

    results.sort_by(f64::total_cmp);
    Ok(results)
}

// One round of filtering and rescaling. `None` when nothing passes the filter.
fn normalize_round(
    data: &[f64],
    threshold: f64,
    round: usize,
) -> Result<Option<Vec<f64>>, DegenerateRange> {
    let filtered: Vec<f64> = data
        .iter()
        .copied()
        .filter(|&x| x > threshold)
        .collect();
    if filtered.is_empty() {
        return Ok(None);
    }

    let (min, max) = filtered
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });

    // Zero for a single (or repeated) value, infinite on overflow
    let width = max - min;
    if width <= 0.0 || !width.is_finite() {
        return Err(DegenerateRange { round, min, max });
    }

    trace!(
        "normalize: round {round}, threshold {threshold}, {} values in [{min}, {max}]",
        filtered.len()
    );
    Ok(Some(filtered.iter().map(|x| (x - min) / width).collect()))
}

// ----- T E S T S ---------------------------------------------------------------------
