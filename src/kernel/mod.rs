use crate::authoring::*;

// ----- B U I L T I N   O P E R A T O R S ---------------------------------------------

// Install new builtin operators by adding them in the `mod` and
// `BUILTIN_OPERATORS` blocks below

mod divide;
mod duplicates;
mod evaluate;
mod noop;
mod normalize;
mod peaks;

#[rustfmt::skip]
const BUILTIN_OPERATORS: [(&str, OpConstructor); 8] = [
    ("average",     OpConstructor(divide::average)),
    ("dedupe",      OpConstructor(duplicates::dedupe)),
    ("divide",      OpConstructor(divide::new)),
    ("duplicates",  OpConstructor(duplicates::new)),
    ("evaluate",    OpConstructor(evaluate::new)),
    ("noop",        OpConstructor(noop::new)),
    ("normalize",   OpConstructor(normalize::new)),
    ("peaks",       OpConstructor(peaks::new)),
];
// A BTreeMap would have been a better choice for BUILTIN_OPERATORS, except
// for the annoying fact that it cannot be compile-time const-constructed.

/// Handle instantiation of built-in operators, as defined in
/// `BUILTIN_OPERATORS` above.
pub(crate) fn builtin(name: &str) -> Result<OpConstructor, Error> {
    for p in BUILTIN_OPERATORS {
        if p.0 == name {
            return Ok(p.1);
        }
    }
    Err(Error::NotFound(name.to_string(), String::default()))
}

/// Check that an operator taking a fixed number of operands got just that
pub fn expect_operands(op: &Op, operands: &[f64], expected: usize) -> Result<(), Error> {
    if operands.len() == expected {
        return Ok(());
    }
    Err(Error::Operands {
        op: op.params.name.clone(),
        expected,
        found: operands.len(),
    })
}

// ----- S T R U C T   O P C O N S T R U C T O R ---------------------------------------

/// Blueprint for the overall instantiation of an operator.
///
/// OpConstructor needs to be a newtype, rather than a type alias,
/// since we must implement the Debug-trait for OpConstructor (to
/// make auto derive of the Debug-trait work for any derived type).
#[derive(Clone, Copy)]
pub struct OpConstructor(pub fn(args: &RawParameters, ctx: &dyn Context) -> Result<Op, Error>);

// Cannot autoderive the Debug trait
impl core::fmt::Debug for OpConstructor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "OpConstructor")
    }
}

// ----- S T R U C T   I N N E R O P ---------------------------------------------------

/// Blueprint for the functions doing the actual work.
///
/// InnerOp needs to be a newtype, rather than a type alias, since we
/// must implement the Debug-trait for InnerOp (to make auto derive
/// of the Debug-trait work for any derived type).
pub struct InnerOp(pub fn(op: &Op, ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error>);

// Cannot autoderive the Debug trait
impl core::fmt::Debug for InnerOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "InnerOp")
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry() -> Result<(), Error> {
        for (name, _) in BUILTIN_OPERATORS {
            assert!(builtin(name).is_ok());
        }
        assert!(matches!(builtin("cheese"), Err(Error::NotFound(_, _))));

        // A builtin constructor, called directly
        let ctx = Minimal::default();
        let raw = RawParameters::new("noop", &BTreeMap::new());
        let op = builtin("noop")?.0(&raw, &ctx)?;
        assert_eq!(op.params.name, "noop");
        assert_eq!(op.apply(&ctx, &[1., 2.])?, Outcome::Sequence(vec![1., 2.]));
        Ok(())
    }
}
