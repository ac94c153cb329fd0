//! Command-line interface for gramdoc.
//!
//! Reads a grammar source file and writes the chosen rendering to a file or
//! standard output.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use gramdoc::render::{ebnf, markdown};
use gramdoc::Grammar;

/// Convert an ANTLR-style grammar into Markdown documentation or common
/// EBNF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grammar source file.
    input: PathBuf,

    /// Output rendering.
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Wrap each Markdown rule block in an anchored container.
    #[arg(long)]
    anchors: bool,

    /// Write output to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Ebnf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let grammar: Grammar = source
        .parse()
        .with_context(|| format!("converting {}", args.input.display()))?;
    log::info!("extracted {} rules", grammar.rules.len());

    let rendered = match args.format {
        Format::Markdown => markdown::to_markdown(&grammar.rules, args.anchors),
        Format::Ebnf => ebnf::to_common_ebnf(&grammar.rules),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}
