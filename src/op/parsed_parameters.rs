use crate::authoring::*;
use std::str::FromStr;

/// The parameters of an operator, type checked against its gamut, and
/// sorted into bins by type
#[derive(Debug, Default)]
pub struct ParsedParameters {
    pub name: String,

    pub boolean: BTreeSet<&'static str>,
    pub natural: BTreeMap<&'static str, usize>,
    pub real: BTreeMap<&'static str, f64>,
}

// Accessors
impl ParsedParameters {
    pub fn boolean(&self, key: &str) -> bool {
        self.boolean.contains(key)
    }
    pub fn natural(&self, key: &str) -> Result<usize, Error> {
        if let Some(value) = self.natural.get(key) {
            return Ok(*value);
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn real(&self, key: &str) -> Result<f64, Error> {
        if let Some(value) = self.real.get(key) {
            return Ok(*value);
        }
        Err(Error::MissingParam(key.to_string()))
    }
}

impl ParsedParameters {
    pub fn new(
        parameters: &RawParameters,
        gamut: &[OpParameter],
    ) -> Result<ParsedParameters, Error> {
        let locals = parameters.definition.split_into_parameters();
        let globals = &parameters.globals;
        let mut params = ParsedParameters::default();

        // Try to locate all accepted parameters, type check, and place them into
        // their proper bins
        for p in gamut {
            let found = lookup(globals, &locals, p.key())?;
            match *p {
                OpParameter::Flag { key } => {
                    // Flags are always optional (i.e. implicitly false when not given)
                    let Some(value) = found else {
                        continue;
                    };
                    match value.to_lowercase().as_str() {
                        "" | "true" => {
                            params.boolean.insert(key);
                        }
                        "false" => {}
                        _ => {
                            warn!("Cannot parse {key}:{value} as a boolean constant!");
                            return Err(Error::BadParam(key.to_string(), value));
                        }
                    }
                }

                OpParameter::Natural { key, default } => {
                    let value = match found {
                        Some(value) => parse_scalar(key, &value, "a natural number")?,
                        None => default.ok_or_else(|| missing(key))?,
                    };
                    params.natural.insert(key, value);
                }

                OpParameter::Real { key, default } => {
                    let value = match found {
                        Some(value) => parse_scalar(key, &value, "a real number")?,
                        None => default.ok_or_else(|| missing(key))?,
                    };
                    params.real.insert(key, value);
                }
            };
        }

        // Params specified, but not used
        let accepted: BTreeSet<&str> = gamut.iter().map(|p| p.key()).collect();
        for key in locals.keys() {
            if key == "name" || accepted.contains(key.as_str()) {
                continue;
            }
            warn!("Ignoring unknown parameter '{key}' in '{}'", parameters.definition);
        }

        params.name = locals
            .get("name")
            .unwrap_or(&"unknown".to_string())
            .to_string();
        Ok(params)
    }
}

// ----- A N C I L L A R Y   F U N C T I O N S -----------------------------------------

/// Look up `key`, first among the locally given parameters, then among the
/// globals of the context
fn lookup(
    globals: &BTreeMap<String, String>,
    locals: &BTreeMap<String, String>,
    key: &str,
) -> Result<Option<String>, Error> {
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::Syntax(String::from("Empty key")));
    }
    let value = locals.get(key).or_else(|| globals.get(key));
    Ok(value.map(|v| v.trim().to_string()))
}

fn parse_scalar<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T, Error> {
    if let Ok(v) = value.trim().parse::<T>() {
        return Ok(v);
    }
    warn!("Cannot parse {key}:{value} as {kind}");
    Err(Error::BadParam(key.to_string(), value.to_string()))
}

fn missing(key: &str) -> Error {
    error!("Missing required parameter '{key}'");
    Error::MissingParam(key.to_string())
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const GAMUT: [OpParameter; 4] = [
        OpParameter::Flag    { key: "flag" },
        OpParameter::Flag    { key: "galf" },
        OpParameter::Natural { key: "natural",  default: Some(0) },
        OpParameter::Real    { key: "real",     default: Some(1.25) },
    ];

    #[test]
    fn basic() -> Result<(), Error> {
        let globals = BTreeMap::<String, String>::new();
        let raw = RawParameters::new("cucumber flag real = 2.5 bonk=3", &globals);
        let p = ParsedParameters::new(&raw, &GAMUT)?;

        assert_eq!(p.name, "cucumber");

        // Booleans correctly parsed?
        assert!(p.boolean("flag"), "`flag` not in registered booleans: {:#?}", p.boolean);
        assert!(!p.boolean("galf"), "`galf` in registered booleans: {:?}", p.boolean);

        // Etc.
        assert_eq!(p.natural("natural")?, 0_usize);
        assert_eq!(p.real("real")?, 2.5);
        assert!(matches!(p.real("natural"), Err(Error::MissingParam(_))));

        // Unknown parameters are ignored
        assert!(matches!(p.natural("bonk"), Err(Error::MissingParam(_))));
        assert!(matches!(p.real("bonk"), Err(Error::MissingParam(_))));
        Ok(())
    }

    #[test]
    fn globals() -> Result<(), Error> {
        let globals = BTreeMap::from([
            ("real".to_string(), "7".to_string()),
            ("natural".to_string(), "3".to_string()),
        ]);

        // Globals trump defaults, locals trump globals
        let raw = RawParameters::new("cucumber natural=4 galf=false", &globals);
        let p = ParsedParameters::new(&raw, &GAMUT)?;
        assert_eq!(p.real("real")?, 7.);
        assert_eq!(p.natural("natural")?, 4);
        assert!(!p.boolean("galf"));
        Ok(())
    }

    #[test]
    fn bad() {
        const REQUIRED: [OpParameter; 1] = [OpParameter::Natural { key: "n", default: None }];
        let globals = BTreeMap::<String, String>::new();

        let raw = RawParameters::new("cucumber", &globals);
        assert!(matches!(
            ParsedParameters::new(&raw, &REQUIRED),
            Err(Error::MissingParam(_))
        ));

        for definition in ["cucumber n=-1", "cucumber n=many", "cucumber n=1.5"] {
            let raw = RawParameters::new(definition, &globals);
            assert!(matches!(
                ParsedParameters::new(&raw, &REQUIRED),
                Err(Error::BadParam(_, _))
            ));
        }

        let raw = RawParameters::new("cucumber flag=maybe", &globals);
        assert!(matches!(
            ParsedParameters::new(&raw, &GAMUT),
            Err(Error::BadParam(_, _))
        ));

        let raw = RawParameters::new("cucumber real=1,2", &globals);
        assert!(matches!(
            ParsedParameters::new(&raw, &GAMUT),
            Err(Error::BadParam(_, _))
        ));
    }
}
