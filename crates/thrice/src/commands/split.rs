//! Split command

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use thrice_core::convert::parse_delimited_with;
use thrice_core::{Error, ThriceConfig};

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Delimited text to split
    pub text: String,

    /// Type every item must parse as
    #[arg(long = "as", value_enum, default_value_t = ItemKind::String)]
    pub kind: ItemKind,

    /// Separator, overriding list.separator from the config
    #[arg(short, long)]
    pub separator: Option<char>,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ItemKind {
    String,
    Int,
    Float,
    Bool,
    Char,
}

pub fn run(args: SplitArgs, config: &ThriceConfig) -> Result<()> {
    let separator = args.separator.unwrap_or(config.list.separator);

    let lines = match args.kind {
        ItemKind::String => render::<String>(&args.text, separator, args.json),
        ItemKind::Int => render::<i64>(&args.text, separator, args.json),
        ItemKind::Float => render_finite(&args.text, separator, args.json),
        ItemKind::Bool => render::<bool>(&args.text, separator, args.json),
        ItemKind::Char => render::<char>(&args.text, separator, args.json),
    }?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Parse `text` as a list of `T` and format it for printing
fn render<T>(text: &str, separator: char, json: bool) -> Result<Vec<String>>
where
    T: FromStr + Display + Serialize,
    T::Err: Display,
{
    let items: Vec<T> = parse_delimited_with(text, separator)
        .with_context(|| format!("cannot split '{}'", text))?;
    to_lines(&items, json)
}

/// Like `render::<f64>`, but NaN and infinities are rejected since JSON
/// cannot represent them
fn render_finite(text: &str, separator: char, json: bool) -> Result<Vec<String>> {
    let items: Vec<f64> = parse_delimited_with(text, separator)
        .with_context(|| format!("cannot split '{}'", text))?;

    if let Some(item) = items.iter().find(|item| !item.is_finite()) {
        return Err(Error::parse_item(item.to_string(), "not a finite number"))
            .with_context(|| format!("cannot split '{}'", text));
    }

    to_lines(&items, json)
}

fn to_lines<T: Display + Serialize>(items: &[T], json: bool) -> Result<Vec<String>> {
    if json {
        Ok(vec![serde_json::to_string(&items)?])
    } else {
        Ok(items.iter().map(ToString::to_string).collect())
    }
}
