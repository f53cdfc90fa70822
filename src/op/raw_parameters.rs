use crate::authoring::*;

// Macros nested deeper than this are taken to be self-referential
const MAX_NESTING: usize = 100;

/// Interface between the high level [Op::op()](crate::op::Op) and the
/// kernel constructors.
///
/// `RawParameters` is the vehicle used by the `Op`erator factory in `Op::op(...)`,
/// to ferry args around from the invocator into the constructor of the individual
/// kernels, which typically interpret the contents of `RawParameters`, and
/// convert it into a more runtime friendly instance of `ParsedParameters`.
#[derive(Debug, Default, Clone)]
pub struct RawParameters {
    pub invocation: String,
    pub definition: String,
    pub globals: BTreeMap<String, String>,
    pub recursion_level: usize,
}

impl RawParameters {
    pub fn new(invocation: &str, globals: &BTreeMap<String, String>) -> RawParameters {
        // This, and RawParameters::expand() should be the only places, where the syntax
        // cleanup functions from the Tokenize trait, are needed
        let invocation = invocation.remove_comments().normalize();
        let definition = invocation.clone();
        RawParameters {
            invocation,
            definition,
            globals: globals.clone(),
            recursion_level: 0,
        }
    }

    /// Replace the macro name at the front of the current definition by the
    /// macro `body`. The arguments following the macro name go to the end,
    /// so they take precedence over those given in the body
    pub fn expand(&self, body: &str) -> RawParameters {
        let body = body.remove_comments().normalize();
        let definition = format!("{} {}", body, self.definition.arguments())
            .trim()
            .to_string();
        trace!("Expanding '{}' into '{definition}'", self.definition);
        RawParameters {
            invocation: self.invocation.clone(),
            definition,
            globals: self.globals.clone(),
            recursion_level: self.recursion_level + 1,
        }
    }

    pub fn nesting_too_deep(&self) -> bool {
        if self.recursion_level > MAX_NESTING {
            error!("Too deeply nested macro expansion of '{}'", self.invocation);
            return true;
        }
        false
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion() {
        let globals = BTreeMap::new();
        let raw = RawParameters::new("my:norm   threshold = 0.7 # comment", &globals);
        assert_eq!(raw.definition, "my:norm threshold=0.7");

        let expanded = raw.expand("normalize threshold=0.2 means");
        assert_eq!(expanded.definition, "normalize threshold=0.2 means threshold=0.7");
        assert_eq!(expanded.invocation, raw.invocation);
        assert_eq!(expanded.recursion_level, 1);
        assert_eq!(expanded.definition.split_into_parameters()["threshold"], "0.7");

        let bare = RawParameters::new("my:norm", &globals).expand("normalize");
        assert_eq!(bare.definition, "normalize");
    }
}
