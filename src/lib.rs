//! *A sandbox of small, deterministic data transformation algorithms*
//!
//! The algorithms
//! ==============
//!
//! The [algo] module holds a handful of pure, stateless functions, each
//! a well behaved rendition of a small, classic exercise:
//!
//! - [normalize](algo::normalize): iterated threshold filtering and min-max normalization
//! - [evaluate](algo::evaluate): nested conditional arithmetic on three numbers and a flag
//! - [find_duplicates](algo::find_duplicates): the values occurring more than once, in linear time
//! - [structures](algo::structures): conversions between sets, sequences, and ordered maps,
//!   and a single sentinel for absent values
//! - [safe_divide](algo::safe_divide): division reporting its failures as tagged values
//!
//! The operators
//! =============
//!
//! On top of the algorithms, a small operator layer makes them available by
//! textual definition, e.g. `normalize threshold=0.7 max_iterations=10`,
//! through a [Context] provider:
//!
//! ```
//! use algobox::prelude::*;
//! let mut ctx = Minimal::new();
//! let op = ctx.op("evaluate flag")?;
//! assert_eq!(ctx.apply(op, &[5., 6., 2.])?, Outcome::Scalar(22.));
//! # Ok::<(), Error>(())
//! ```

pub mod algo;
mod context;
mod kernel;
mod op;
mod token;

use thiserror::Error;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::context::Minimal;
    pub use crate::op::OpHandle;
    pub use crate::op::Outcome;
    pub use crate::Error;
}

/// Preamble for kernels and context providers (built-in or user defined)
pub mod authoring {
    pub use crate::prelude::*;

    pub use crate::context::BUILTIN_MACROS;
    pub use crate::kernel::expect_operands;
    pub use crate::kernel::InnerOp;
    pub use crate::kernel::OpConstructor;
    pub use crate::op::Op;
    pub use crate::op::OpParameter;
    pub use crate::op::ParsedParameters;
    pub use crate::op::RawParameters;
    pub use crate::token::Tokenize;

    pub use log::debug;
    pub use log::error;
    pub use log::info;
    pub use log::trace;
    pub use log::warn;

    pub use std::collections::BTreeMap;
    pub use std::collections::BTreeSet;
}

pub use crate::context::Context;
pub use crate::context::Minimal;
pub use crate::op::OpHandle;
pub use crate::op::Outcome;

/// Everything that can go wrong in *algobox*: The failures of the algorithms
/// proper, wrapped from their own narrow types, and the errors of operator
/// instantiation and application
#[derive(Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    General(&'static str),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error(transparent)]
    DegenerateRange(#[from] algo::DegenerateRange),

    #[error(transparent)]
    Division(#[from] algo::DivisionErrorKind),

    #[error("operator {0} not found{1}")]
    NotFound(String, String),

    #[error("recursion too deep for {0}, at {1}")]
    Recursion(String, String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("{op}: expected {expected} operands, found {found}")]
    Operands {
        op: String,
        expected: usize,
        found: usize,
    },
}

// ----- T E S T S ---------------------------------------------------------------------
