use crate::authoring::*;
mod minimal;
pub use minimal::Minimal;

// ----- T H E   C O N T E X T   T R A I T ---------------------------------------------

/// The `Context` trait defines the mode of communication between the operator
/// machinery and its surroundings: Where operator instances live, where user
/// defined operators and macros are registered, and which global parameter
/// defaults apply.
pub trait Context {
    /// In general, implementations should make sure that `new` differs from `default`
    /// only by adding access to the builtin macros (`chat:normalize` etc.)
    fn new() -> Self
    where
        Self: Sized;

    /// Instantiate the operator given by `definition`
    fn op(&mut self, definition: &str) -> Result<OpHandle, Error>;

    /// Apply operator `op` to `operands`
    fn apply(&self, op: OpHandle, operands: &[f64]) -> Result<Outcome, Error>;

    /// Globally defined default values for operator parameters
    fn globals(&self) -> BTreeMap<String, String>;

    /// The parsed parameters of the operator `op`
    fn params(&self, op: OpHandle) -> Result<&ParsedParameters, Error>;

    /// Register a new user-defined operator
    fn register_op(&mut self, name: &str, constructor: OpConstructor);
    /// Register a new user-defined resource (i.e. a macro)
    fn register_resource(&mut self, name: &str, definition: &str);

    /// Helper for the `Op` instantiation logic in `Op::op(...)`
    fn get_op(&self, name: &str) -> Result<OpConstructor, Error>;
    /// Helper for the `Op` instantiation logic in `Op::op(...)`
    fn get_resource(&self, name: &str) -> Result<String, Error>;
}

// Help context providers provide canonically named, built in macros
#[rustfmt::skip]
pub const BUILTIN_MACROS: [(&str, &str); 2] = [
    ("chat:normalize", "normalize means"),
    ("chat:evaluate",  "evaluate flag"),
];
