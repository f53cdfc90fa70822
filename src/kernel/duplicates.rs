//! Repeated values: Report them (`duplicates`), or remove them (`dedupe`)
use crate::algo;
use crate::authoring::*;

// ----- K E R N E L S -----------------------------------------------------------------

fn duplicates(_op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    Ok(Outcome::Sequence(algo::find_duplicate_reals(operands)))
}

fn dedupe_reals(_op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    Ok(Outcome::Sequence(algo::dedupe_reals(operands)))
}

// ----- C O N S T R U C T O R S -------------------------------------------------------

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 0] = [];

pub fn new(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    Op::plain(parameters, InnerOp(duplicates), &GAMUT, ctx)
}

pub fn dedupe(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    Op::plain(parameters, InnerOp(dedupe_reals), &GAMUT, ctx)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates() -> Result<(), Error> {
        let mut ctx = Minimal::default();
        let op = ctx.op("duplicates")?;
        assert_eq!(
            ctx.apply(op, &[1., 2., 2., 3., 3., 3.])?,
            Outcome::Sequence(vec![2., 3.])
        );
        assert_eq!(ctx.apply(op, &[1., 2., 3.])?, Outcome::Sequence(vec![]));
        Ok(())
    }

    #[test]
    fn dedupe() -> Result<(), Error> {
        let mut ctx = Minimal::default();
        let op = ctx.op("dedupe")?;
        assert_eq!(
            ctx.apply(op, &[3., 1., 3., 2., -0., 1., 0.])?,
            Outcome::Sequence(vec![3., 1., 2., 0.])
        );
        Ok(())
    }
}
