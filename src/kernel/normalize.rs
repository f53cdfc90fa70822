//! Iterated threshold filtering and min-max normalization
use crate::algo::normalize as algo;
use crate::authoring::*;

// ----- K E R N E L -------------------------------------------------------------------

fn normalize(op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    let threshold = op.params.real("threshold")?;
    let max_iterations = op.params.natural("max_iterations")?;

    let result = if op.params.boolean("means") {
        let limit = op.params.natural("limit")?;
        algo::normalize_with_means(operands, threshold, max_iterations, limit)?
    } else {
        algo::normalize(operands, threshold, max_iterations)?
    };
    Ok(Outcome::Sequence(result))
}

// ----- C O N S T R U C T O R ---------------------------------------------------------

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 4] = [
    OpParameter::Flag    { key: "means" },
    OpParameter::Real    { key: "threshold",      default: Some(algo::DEFAULT_THRESHOLD) },
    OpParameter::Natural { key: "max_iterations", default: Some(algo::DEFAULT_MAX_ITERATIONS) },
    OpParameter::Natural { key: "limit",          default: Some(algo::DEFAULT_LIMIT) },
];

pub fn new(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    Op::plain(parameters, InnerOp(normalize), &GAMUT, ctx)
}

// ----- T E S T S ---------------------------------------------------------------------
