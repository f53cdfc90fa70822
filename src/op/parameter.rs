/// The `OpParameter` enumeration is used to represent which defining parameters
/// are valid for a given `Op`erator.
///
/// The individual kernels use these to define the types of the parameters
/// accepted, and whether they are *required* (in which case the provided
/// default value is set to `None`), or *optional* (in which case, a default
/// value of the proper type is provided). The odd man out here is the `Flag`
/// type: Since a flag is a boolean which is true if present and false if not,
/// it does not make much sense to provide a default in this case.
///
/// Any other parameters given are ignored, but warned about.
///
/// For a given operator, the union of the sets of its required and optional
/// parameters is called the *gamut* of the operator.
#[derive(Debug)]
pub enum OpParameter {
    /// A flag is a boolean that is true if present, false if not
    Flag { key: &'static str },
    /// The natural numbers + zero (𝐍₀ or 𝐖 in math terms)
    Natural {
        key: &'static str,
        default: Option<usize>,
    },
    /// Reals (𝐑 in math terms)
    Real {
        key: &'static str,
        default: Option<f64>,
    },
}

impl OpParameter {
    pub fn key(&self) -> &'static str {
        match *self {
            OpParameter::Flag { key } => key,
            OpParameter::Natural { key, .. } => key,
            OpParameter::Real { key, .. } => key,
        }
    }
}
