use std::collections::BTreeMap;

/// Convenience methods for lexical analysis of operator definitions.
/// - For removing comments
/// - For splitting a definition into parameters (i.e. key=value-pairs)
/// - For syntactical normalization by eliminating non-significant whitespace
/// - For checking whether a name is a macro name ("resource name"), and
/// - For accessing the name and the arguments of a given operator.
pub trait Tokenize {
    /// Remove `#`-comments, and join the remaining lines by a single space
    fn remove_comments(&self) -> String;

    /// Split an operator definition into parameters. Give special treatment
    /// to names and flags:
    /// ```txt
    /// 'foo bar=baz bonk=blue flag' -> ('name=foo', 'bar=baz', 'bonk=blue', 'flag=true')
    /// ```
    fn split_into_parameters(&self) -> BTreeMap<String, String>;

    /// Glue syntactical elements together, and separate them from each other
    /// by a single space:
    ///
    /// 1. Glue key-value pairs together by omitting whitespace around '=':
    ///    ```txt
    ///    key1= value1            key2    =value2  ->  key1=value1 key2=value2
    ///    ```
    /// 2. Trim whitespace on both sides of the macro sigil ':' and of
    ///    the series separator ',':
    ///    ```txt
    ///    foo : bar  x= 1 , 2 -> foo:bar x=1,2
    ///    ```
    fn normalize(&self) -> String;

    fn is_resource_name(&self) -> bool;
    fn operator_name(&self, default: &str) -> String;

    /// Everything following the operator name
    fn arguments(&self) -> String;
}

/// Tokenize implementation for string-like objects
impl<T> Tokenize for T
where
    T: AsRef<str>,
{
    fn remove_comments(&self) -> String {
        // Impose some line ending sanity
        let all = self.as_ref().replace("\r\n", "\n").replace('\r', "\n");

        let mut trimmed = String::new();
        for line in all.lines() {
            // Collect everything before `#`, skipping what becomes empty
            let content = line.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            trimmed += " ";
            trimmed += content;
        }
        trimmed.trim().to_string()
    }

    fn split_into_parameters(&self) -> BTreeMap<String, String> {
        // Remove non-significant whitespace
        let definition = self.normalize();
        let mut params = BTreeMap::new();

        for element in definition.split_whitespace() {
            match element.split_once('=') {
                Some((key, value)) => {
                    params.insert(key.to_string(), value.to_string());
                }

                // If the first element is a key-without-value, it is the name
                // of the operator. Later ones are flags
                None if params.is_empty() => {
                    params.insert(String::from("name"), element.to_string());
                }
                None => {
                    params.insert(element.to_string(), String::from("true"));
                }
            }
        }

        params
    }

    fn normalize(&self) -> String {
        let elements: Vec<_> = self.as_ref().split_whitespace().collect();
        elements
            .join(" ")
            .replace("= ", "=")
            .replace(": ", ":")
            .replace(", ", ",")
            .replace(" =", "=")
            .replace(" :", ":")
            .replace(" ,", ",")
    }

    fn is_resource_name(&self) -> bool {
        self.operator_name("").contains(':')
    }

    fn operator_name(&self, default: &str) -> String {
        self.split_into_parameters()
            .get("name")
            .unwrap_or(&default.to_string())
            .to_string()
    }

    fn arguments(&self) -> String {
        let definition = self.normalize();
        if self.operator_name("").is_empty() {
            return definition;
        }
        match definition.split_once(' ') {
            Some((_name, rest)) => rest.to_string(),
            None => String::new(),
        }
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token() {
        assert_eq!("foo  bar  baz = bonk".normalize(), "foo bar baz=bonk");
        assert_eq!("foo x = 1 , 2 ,3".normalize(), "foo x=1,2,3");
        assert_eq!("foo : bar".normalize(), "foo:bar");

        let params = "foo bar baz=bonk".split_into_parameters();
        assert_eq!(params["name"], "foo");
        assert_eq!(params["bar"], "true");
        assert_eq!(params["baz"], "bonk");

        // Later values win
        assert_eq!("foo x=1 x=2".split_into_parameters()["x"], "2");

        // No name
        assert!("x=1 flag".split_into_parameters().get("name").is_none());
        assert_eq!("x=1 flag".operator_name("nameless"), "nameless");

        assert!("foo:bar".is_resource_name());
        assert!(!"foo bar=baz:bonk".is_resource_name());
        assert_eq!("foo bar baz=bonk".operator_name(""), "foo");
    }

    #[test]
    fn arguments() {
        assert_eq!("normalize  threshold = 0.7 means".arguments(), "threshold=0.7 means");
        assert_eq!("normalize".arguments(), "");
        assert_eq!("x=1 y=2".arguments(), "x=1 y=2");
    }

    #[test]
    fn comments() {
        let definition = "normalize # the operator\n  threshold=0.7 # parameters\r\n# nothing\nmeans";
        assert_eq!(definition.remove_comments(), "normalize threshold=0.7 means");
        assert_eq!("# only a comment".remove_comments(), "");
    }
}
