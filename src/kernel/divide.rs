//! Guarded division (`divide`) and the arithmetic mean built on it (`average`)
use crate::algo;
use crate::authoring::*;

// ----- K E R N E L S -----------------------------------------------------------------

fn divide(op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    expect_operands(op, operands, 2)?;
    let quotient = algo::safe_divide(operands[0], operands[1])?;
    Ok(Outcome::Scalar(quotient))
}

fn mean(_op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    Ok(Outcome::Scalar(algo::average(operands)?))
}

// ----- C O N S T R U C T O R S -------------------------------------------------------

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 0] = [];

pub fn new(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    Op::plain(parameters, InnerOp(divide), &GAMUT, ctx)
}

pub fn average(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    Op::plain(parameters, InnerOp(mean), &GAMUT, ctx)
}

// ----- T E S T S ---------------------------------------------------------------------
