//! Peaks in sliding windows of high variance
use crate::algo;
use crate::authoring::*;

// ----- K E R N E L -------------------------------------------------------------------

fn peaks(op: &Op, _ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
    let window = op.params.natural("window")?;
    let threshold = op.params.real("threshold")?;
    let limit = op.params.natural("limit")?;
    Ok(Outcome::Sequence(algo::peaks(operands, window, threshold, limit)))
}

// ----- C O N S T R U C T O R ---------------------------------------------------------

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 3] = [
    OpParameter::Natural { key: "window",    default: None },
    OpParameter::Real    { key: "threshold", default: Some(0.) },
    OpParameter::Natural { key: "limit",     default: Some(algo::series::DEFAULT_LIMIT) },
];

pub fn new(parameters: &RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
    let op = Op::plain(parameters, InnerOp(peaks), &GAMUT, ctx)?;
    if op.params.natural("window")? == 0 {
        return Err(Error::BadParam(
            "window".to_string(),
            "0".to_string(),
        ));
    }
    Ok(op)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks() -> Result<(), Error> {
        let mut ctx = Minimal::default();
        let data = [0., 0., 10., 0., 0.];

        let op = ctx.op("peaks window=3 threshold=1")?;
        assert_eq!(ctx.apply(op, &data)?, Outcome::Sequence(vec![10., 10., 10.]));

        let op = ctx.op("peaks window=3 limit=1")?;
        assert_eq!(ctx.apply(op, &data)?, Outcome::Sequence(vec![10.]));

        // Window longer than the data
        let op = ctx.op("peaks window=30")?;
        assert_eq!(ctx.apply(op, &data)?, Outcome::Sequence(vec![]));
        Ok(())
    }

    #[test]
    fn window() {
        let mut ctx = Minimal::default();
        assert!(matches!(ctx.op("peaks"), Err(Error::MissingParam(_))));
        assert!(matches!(ctx.op("peaks window=0"), Err(Error::BadParam(_, _))));
    }
}
