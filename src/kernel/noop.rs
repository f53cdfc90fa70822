//! The no-operation: Hands back its operands unchanged
use crate::authoring::*;

fn noop(_op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    Ok(Outcome::Sequence(operands.to_vec()))
}

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 0] = [];

pub fn new(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    Op::plain(parameters, InnerOp(noop), &GAMUT, ctx)
}

// ----- T E S T S ---------------------------------------------------------------------
