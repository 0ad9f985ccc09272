//! Wren CLI
//!
//! Dumps the token stream of an HTML document for testing and debugging.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use wren_common::warning::{clear_warnings, warn_once};
use wren_html::{HTMLTokenizer, ParseError, Token, TokenizerOptions};

/// Wren: print the tokens of an HTML document
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Tokenize a file
    wren ./index.html

    # Tokenize inline HTML
    wren --html '<p class=x>Hi</p>'

    # JSON output with parse errors
    wren --json --errors ./index.html

    # Conformance options from a file
    wren --config options.json ./index.html
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Path to HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Tokenize HTML string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print tokens as JSON, one object per line
    #[arg(long)]
    json: bool,

    /// Also print the parse errors
    #[arg(short, long)]
    errors: bool,

    /// Read tokenizer options from a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable every WHATWG conformance option
    #[arg(long)]
    whatwg: bool,

    /// Accept `<!doctype` in any case
    #[arg(long)]
    case_insensitive_doctype: bool,

    /// Keep only the first of repeated attributes
    #[arg(long)]
    drop_duplicate_attributes: bool,

    /// Lowercase tag and attribute names
    #[arg(long)]
    lowercase_names: bool,

    /// Leave CR and CR LF line endings untouched
    #[arg(long)]
    keep_carriage_returns: bool,

    /// Treat `<![CDATA[` as a CDATA section
    #[arg(long)]
    allow_cdata: bool,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
    clear_warnings();

    let html = load_input(&cli)?;
    let options = resolve_options(&cli)?;

    let mut tokenizer = HTMLTokenizer::with_options(&html, options);
    tokenizer.set_cdata_allowed(cli.allow_cdata);

    let mut count = 0usize;
    while let Some(token) = tokenizer.next_token() {
        if cli.json {
            println!("{}", serde_json::to_string(&token)?);
        } else {
            print_token(&token);
        }
        count += 1;
    }
    log::info!("{count} tokens, {} parse errors", tokenizer.errors().len());

    if cli.errors {
        print_errors(tokenizer.errors(), cli.json)?;
    } else {
        warn_error_kinds(tokenizer.errors());
    }

    Ok(())
}

/// Load the document from CLI arguments
fn load_input(cli: &Cli) -> Result<String> {
    if let Some(ref html_string) = cli.html {
        Ok(html_string.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        anyhow::bail!("a file path or --html is required")
    }
}

/// Start from the config file (or the defaults) and apply the flags on top.
fn resolve_options(cli: &Cli) -> Result<TokenizerOptions> {
    let mut options = match cli.config {
        Some(ref path) => read_config(path)?,
        None if cli.whatwg => TokenizerOptions::whatwg(),
        None => TokenizerOptions::default(),
    };
    options.case_insensitive_doctype |= cli.case_insensitive_doctype;
    options.drop_duplicate_attributes |= cli.drop_duplicate_attributes;
    options.lowercase_names |= cli.lowercase_names;
    if cli.keep_carriage_returns {
        options.normalize_newlines = false;
    }
    log::debug!("tokenizer options: {options:?}");
    Ok(options)
}

fn read_config(path: &Path) -> Result<TokenizerOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn print_token(token: &Token) {
    let kind = token.kind_name();
    match token {
        Token::Doctype { .. } => println!("{:<10} {token}", kind.magenta()),
        Token::StartTag { .. } => println!("{:<10} {token}", kind.green()),
        Token::EndTag { .. } => println!("{:<10} {token}", kind.red()),
        Token::Comment { data } => println!("{:<10} {data:?}", kind.dimmed()),
        Token::Character { data } => println!("{:<10} {data:?}", kind.cyan()),
        Token::EndOfFile => println!("{}", kind.bold()),
    }
}

/// One warning per distinct error kind when the full list was not requested.
fn warn_error_kinds(errors: &[ParseError]) {
    for error in errors {
        let _ = warn_once("wren", &format!("{} ({})", error.kind, error.kind.code()));
    }
}

fn print_errors(errors: &[ParseError], json: bool) -> Result<()> {
    if json {
        for error in errors {
            println!("{}", serde_json::to_string(error)?);
        }
        return Ok(());
    }

    println!("\n=== Parse Errors ===");
    if errors.is_empty() {
        println!("  (none)");
    }
    for error in errors {
        println!(
            "  {:>6}  {}  {}",
            error.position,
            error.kind.code().yellow(),
            error.kind
        );
    }
    Ok(())
}
