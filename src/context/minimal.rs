use crate::authoring::*;

// ----- T H E   M I N I M A L   P R O V I D E R ---------------------------------------

/// A minimalistic context provider, keeping everything in memory.
/// Usually sufficient, and used for internal test authoring.
#[derive(Debug, Default)]
pub struct Minimal {
    /// Constructors for user defined operators
    constructors: BTreeMap<String, OpConstructor>,
    /// User defined resources (macros)
    resources: BTreeMap<String, String>,
    /// Global parameter defaults
    globals: BTreeMap<String, String>,
    /// Instantiations of operators
    operators: BTreeMap<OpHandle, Op>,
}

const BAD_ID_MESSAGE: Error = Error::General("Minimal: Unknown operator id");

impl Minimal {
    /// Set a global default for the parameter `key`. Affects operators
    /// instantiated from here on
    pub fn set_global(&mut self, key: &str, value: &str) {
        self.globals.insert(key.trim().to_string(), value.trim().to_string());
    }
}

impl Context for Minimal {
    fn new() -> Minimal {
        let mut ctx = Minimal::default();
        for item in BUILTIN_MACROS {
            ctx.register_resource(item.0, item.1);
        }
        ctx
    }

    fn op(&mut self, definition: &str) -> Result<OpHandle, Error> {
        let op = Op::new(definition, self)?;
        let id = op.id;
        debug!("Minimal: instantiated '{}'", op.definition);
        self.operators.insert(id, op);
        Ok(id)
    }

    fn apply(&self, op: OpHandle, operands: &[f64]) -> Result<Outcome, Error> {
        let op = self.operators.get(&op).ok_or(BAD_ID_MESSAGE)?;
        op.apply(self, operands)
    }

    fn globals(&self) -> BTreeMap<String, String> {
        self.globals.clone()
    }

    fn params(&self, op: OpHandle) -> Result<&ParsedParameters, Error> {
        let op = self.operators.get(&op).ok_or(BAD_ID_MESSAGE)?;
        Ok(&op.params)
    }

    fn register_op(&mut self, name: &str, constructor: OpConstructor) {
        self.constructors.insert(String::from(name), constructor);
    }

    fn get_op(&self, name: &str) -> Result<OpConstructor, Error> {
        if let Some(result) = self.constructors.get(name) {
            return Ok(OpConstructor(result.0));
        }

        Err(Error::NotFound(
            name.to_string(),
            ": User defined constructor".to_string(),
        ))
    }

    fn register_resource(&mut self, name: &str, definition: &str) {
        self.resources
            .insert(String::from(name), String::from(definition));
    }

    fn get_resource(&self, name: &str) -> Result<String, Error> {
        if let Some(result) = self.resources.get(name) {
            return Ok(result.to_string());
        }

        Err(Error::NotFound(
            name.to_string(),
            ": User defined resource".to_string(),
        ))
    }
}

// ----- T E S T S ------------------------------------------------------------------
