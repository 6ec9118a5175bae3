//! Orion CLI
//!
//! Tokenizes a markup file or inline source and prints the token stream,
//! for debugging templates and the tokenizer itself.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use orion_common::warning::{clear_warnings, warn_once};
use orion_dsl::{Snapshot, Token, TokenizeError, TokenizerOptions, TruncatedInput};
use owo_colors::OwoColorize;

/// Orion — print the token stream of a markup template
#[derive(Parser, Debug)]
#[command(name = "orion")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Tokenize a file
    orion ./button.orion

    # Tokenize inline source
    orion --source '<button label="Save" onClick={save}/>'

    # JSON output, failing on truncated input
    orion --json --strict ./button.orion
"#)]
struct Cli {
    /// Path to a markup file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Tokenize this source string instead of a file
    #[arg(long, value_name = "MARKUP")]
    source: Option<String>,

    /// Print tokens as a JSON array
    #[arg(long)]
    json: bool,

    /// Fail when input ends inside a tag, attribute or comment
    #[arg(long)]
    strict: bool,

    /// Append an end-of-input token
    #[arg(long)]
    eof: bool,
}

impl Cli {
    fn options(&self) -> TokenizerOptions {
        let policy = if self.strict {
            TruncatedInput::Fail
        } else {
            TruncatedInput::Drop
        };
        TokenizerOptions::new()
            .with_truncated_input(policy)
            .with_end_of_input(self.eof)
    }

    fn read_source(&self) -> Result<String> {
        if let Some(ref source) = self.source {
            Ok(source.clone())
        } else if let Some(ref path) = self.path {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        } else {
            bail!("expected a file path or --source")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = cli.read_source()?;

    clear_warnings();
    let tokens = match run(&source, &cli.options()) {
        Ok(tokens) => tokens,
        Err(error) => {
            report(&source, &error);
            return Err(error.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        print_tokens(&tokens);
    }
    Ok(())
}

/// Tokenize `source`, warning when a trailing construct is dropped.
fn run(source: &str, options: &TokenizerOptions) -> Result<Vec<Token>, TokenizeError> {
    let snapshot = Snapshot::new().feed_str(source)?;
    if snapshot.has_pending_construct() && options.truncated_input == TruncatedInput::Drop {
        warn_once(
            "DSL Tokenizer",
            &format!(
                "input ended in {} state at offset {}, unfinished construct dropped",
                snapshot.state(),
                snapshot.offset()
            ),
        );
    }
    snapshot.finish(options)
}

/// Print one token per line, numbered.
fn print_tokens(tokens: &[Token]) {
    println!("{}", format!("=== {} tokens ===", tokens.len()).bold());
    for (index, token) in tokens.iter().enumerate() {
        println!("{index:>5}  {token}");
    }
}

/// Show the line of the failing character with a caret under it.
fn report(source: &str, error: &TokenizeError) {
    let offset = error.offset();
    let before: Vec<char> = source.chars().take(offset).collect();
    let line_start = before
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(0, |i| i + 1);
    let line: String = source
        .chars()
        .skip(line_start)
        .take_while(|&c| c != '\n')
        .collect();
    let column = offset.saturating_sub(line_start);

    eprintln!("{} {error}", "error:".red().bold());
    eprintln!("  {line}");
    eprintln!("  {}{}", " ".repeat(column), "^".red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_drops_truncated_input() {
        let tokens = run("ok<a x=", &TokenizerOptions::new()).unwrap();
        assert_eq!(tokens, vec![Token::character('o'), Token::character('k')]);
    }

    #[test]
    fn test_run_strict_reports_truncated_input() {
        let options = TokenizerOptions::new().with_truncated_input(TruncatedInput::Fail);
        assert!(matches!(
            run("ok<a x=", &options),
            Err(TokenizeError::TruncatedInput { offset: 7, .. })
        ));
    }
}
