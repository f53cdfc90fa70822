//! TX: Apply an algobox operator to a sequence of numbers

use algobox::authoring::Tokenize;
use algobox::prelude::*;
use anyhow::{bail, Context as _};
use clap::Parser;
use log::{debug, info, trace};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tx", version)]
#[command(about = "Apply an algobox operator to a sequence of numbers", long_about = None)]
struct Cli {
    /// The operator definition, e.g. "normalize threshold=0.7"
    operation: String,

    /// Global parameter default (repeatable)
    #[arg(short, long = "global", value_name = "KEY=VALUE")]
    globals: Vec<String>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to read operands from. Stdin if none given
    files: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    trace!("This is TX");
    debug!("{:#?}", options);

    let mut ctx = Minimal::new();
    for global in &options.globals {
        let Some((key, value)) = global.split_once('=') else {
            bail!("Malformed global '{global}': expected key=value");
        };
        ctx.set_global(key, value);
    }

    let op = ctx
        .op(&options.operation)
        .with_context(|| format!("Cannot instantiate '{}'", options.operation))?;

    let mut operands = Vec::new();
    if options.files.is_empty() {
        let stdin = std::io::stdin();
        operands.extend(read_operands(stdin.lock(), "stdin")?);
    }
    for path in &options.files {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Cannot open {}", path.display()))?;
        let source = path.display().to_string();
        operands.extend(read_operands(BufReader::new(file), &source)?);
    }
    info!("Applying '{}' to {} operands", options.operation, operands.len());

    let outcome = ctx.apply(op, &operands)?;
    if outcome != Outcome::Sequence(Vec::new()) {
        println!("{outcome}");
    }
    Ok(())
}

/// Whitespace separated numbers, `#` starting a comment
fn read_operands<R: BufRead>(reader: R, source: &str) -> Result<Vec<f64>, anyhow::Error> {
    let mut operands = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Cannot read {source}"))?;
        for token in line.remove_comments().split_whitespace() {
            let value = token.parse::<f64>().with_context(|| {
                format!("{source}, line {}: '{token}' is not a number", index + 1)
            })?;
            operands.push(value);
        }
    }
    Ok(operands)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operands() -> Result<(), anyhow::Error> {
        let text = "1.2 3.4  # sample data\n\n0.5\t2.8\n# nothing here\n4.1\n";
        let operands = read_operands(text.as_bytes(), "test")?;
        assert_eq!(operands, [1.2, 3.4, 0.5, 2.8, 4.1]);

        let err = read_operands("1 2\n3 x".as_bytes(), "test").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        Ok(())
    }

    #[test]
    fn cli() {
        let cli = Cli::parse_from(["tx", "-g", "threshold=1", "-vv", "normalize", "a.txt", "b.txt"]);
        assert_eq!(cli.operation, "normalize");
        assert_eq!(cli.globals, ["threshold=1"]);
        assert_eq!(cli.files.len(), 2);

        // Macros come from the library only
        assert!(Cli::try_parse_from(["tx", "-m", "my.macros", "noop"]).is_err());
        let cli = Cli::parse_from(["tx", "chat:evaluate"]);
        assert_eq!(cli.operation, "chat:evaluate");
        assert!(cli.files.is_empty());
    }
}
