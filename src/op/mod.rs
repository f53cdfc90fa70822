use crate::authoring::*;
use std::fmt;

mod parameter;
mod parsed_parameters;
mod raw_parameters;

pub use parameter::OpParameter;
pub use parsed_parameters::ParsedParameters;
pub use raw_parameters::RawParameters;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct OpHandle(uuid::Uuid);
impl OpHandle {
    pub fn new() -> Self {
        OpHandle(uuid::Uuid::new_v4())
    }
}
impl Default for OpHandle {
    fn default() -> Self {
        OpHandle(uuid::Uuid::new_v4())
    }
}

// ----- O U T C O M E -----------------------------------------------------------------

/// The result of applying an operator to a set of operands
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sequence(Vec<f64>),
    Scalar(f64),
    /// No value defined for this input
    Missing,
}

impl Outcome {
    pub fn sequence(&self) -> Option<&[f64]> {
        match self {
            Outcome::Sequence(values) => Some(values),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<f64> {
        match self {
            Outcome::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        *self == Outcome::Missing
    }
}

impl From<Option<f64>> for Outcome {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) => Outcome::Scalar(value),
            None => Outcome::Missing,
        }
    }
}

/// One value per line. `missing` for [Outcome::Missing]
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sequence(values) => {
                let lines: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Outcome::Scalar(value) => write!(f, "{value}"),
            Outcome::Missing => write!(f, "missing"),
        }
    }
}

// ----- O P ---------------------------------------------------------------------------

/// The defining parameters and kernel function for an operator
#[derive(Debug)]
pub struct Op {
    pub definition: String,
    pub params: ParsedParameters,
    pub kernel: InnerOp,
    pub id: OpHandle,
}

impl Op {
    pub fn apply(&self, ctx: &dyn Context, operands: &[f64]) -> Result<Outcome, Error> {
        self.kernel.0(self, ctx, operands)
    }

    pub fn new(definition: &str, ctx: &dyn Context) -> Result<Op, Error> {
        let globals = ctx.globals();
        let parameters = RawParameters::new(definition, &globals);
        Self::op(parameters, ctx)
    }

    // Helper for implementation of kernels: Instantiate an `Op` for the simple
    // (and common) case, where the constructor does not need to set any
    // other parameters than the ones given by the definition
    pub fn plain(
        parameters: &RawParameters,
        kernel: InnerOp,
        gamut: &[OpParameter],
        _ctx: &dyn Context,
    ) -> Result<Op, Error> {
        let definition = parameters.definition.clone();
        let params = ParsedParameters::new(parameters, gamut)?;
        let id = OpHandle::new();

        Ok(Op {
            definition,
            params,
            kernel,
            id,
        })
    }

    // Instantiate the actual operator, taking into account the relative order
    // of precedence between macros, user defined operators, and built-in operators
    #[allow(clippy::self_named_constructors)]
    pub fn op(parameters: RawParameters, ctx: &dyn Context) -> Result<Op, Error> {
        if parameters.nesting_too_deep() {
            return Err(Error::Recursion(
                parameters.invocation,
                parameters.definition,
            ));
        }

        let name = parameters.definition.operator_name("");
        if name.is_empty() {
            return Err(Error::Syntax(format!(
                "Missing operator name in '{}'",
                parameters.definition
            )));
        }

        // A macro?
        if parameters.definition.is_resource_name() {
            let body = ctx.get_resource(&name)?;
            return Op::op(parameters.expand(&body), ctx);
        }

        // A user defined operator?
        if let Ok(constructor) = ctx.get_op(&name) {
            return constructor.0(&parameters, ctx);
        }

        // A built in operator?
        if let Ok(constructor) = crate::kernel::builtin(&name) {
            return constructor.0(&parameters, ctx);
        }

        Err(Error::NotFound(
            name,
            ": ".to_string() + &parameters.definition,
        ))
    }
}

// ----- T E S T S ------------------------------------------------------------------
