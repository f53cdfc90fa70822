//! Nested conditional arithmetic on three operands
use crate::algo;
use crate::authoring::*;

// ----- K E R N E L -------------------------------------------------------------------

fn evaluate(op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    expect_operands(op, operands, 3)?;
    let (x, y, z) = (operands[0], operands[1], operands[2]);
    let flag = op.params.boolean("flag");

    if op.params.boolean("total") {
        return Ok(Outcome::Scalar(algo::evaluate_total(x, y, z, flag)));
    }
    Ok(algo::evaluate(x, y, z, flag).into())
}

// ----- C O N S T R U C T O R ---------------------------------------------------------

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 2] = [
    OpParameter::Flag { key: "flag" },
    OpParameter::Flag { key: "total" },
];

pub fn new(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    Op::plain(parameters, InnerOp(evaluate), &GAMUT, ctx)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate() -> Result<(), Error> {
        let mut ctx = Minimal::default();

        let op = ctx.op("evaluate flag")?;
        assert_eq!(ctx.apply(op, &[5., 6., 2.])?, Outcome::Scalar(22.));
        assert_eq!(ctx.apply(op, &[1., 2., 0.])?, Outcome::Scalar(3.));

        // Unflagged: no value
        let op = ctx.op("evaluate")?;
        assert!(ctx.apply(op, &[1., 2., 3.])?.is_missing());

        // ...unless asked for the total version
        let op = ctx.op("evaluate total")?;
        assert_eq!(ctx.apply(op, &[1., 4., 2.])?, Outcome::Scalar(6.));
        let op = ctx.op("evaluate total flag")?;
        assert_eq!(ctx.apply(op, &[5., 6., 2.])?, Outcome::Scalar(22.));
        Ok(())
    }

    #[test]
    fn operand_count() -> Result<(), Error> {
        let mut ctx = Minimal::default();
        let op = ctx.op("evaluate flag")?;
        assert!(matches!(
            ctx.apply(op, &[1., 2.]),
            Err(Error::Operands { expected: 3, found: 2, .. })
        ));
        assert!(ctx.apply(op, &[1., 2., 3., 4.]).is_err());
        Ok(())
    }
}
