//! The algorithms proper: pure, stateless functions over in-memory
//! sequences. Nothing in here keeps state between calls, and nothing
//! in here depends on the operator machinery built on top of it.

/// Iterated threshold filtering and min-max normalization
pub mod normalize;
pub use normalize::normalize;
pub use normalize::normalize_with_means;
pub use normalize::DegenerateRange;

/// Nested conditional arithmetic on three numbers and a flag
pub mod evaluate;
pub use evaluate::evaluate;
pub use evaluate::evaluate_total;

/// Repeated values, repeat removal and intersections
pub mod duplicates;
pub use duplicates::common_elements;
pub use duplicates::dedupe;
pub use duplicates::dedupe_reals;
pub use duplicates::find_duplicate_reals;
pub use duplicates::find_duplicates;

/// Conversions between sequence, set and map representations
pub mod structures;

/// Division that reports its failures instead of producing NaN or infinity
pub mod divide;
pub use divide::average;
pub use divide::safe_divide;
pub use divide::safe_divide_text;
pub use divide::DivisionErrorKind;

/// Sliding window statistics
pub mod series;
pub use series::peaks;
