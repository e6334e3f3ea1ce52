//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use anyhow::{bail, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::compare::{NormalizationOptions, Section};
use crate::styles::ColorChoice;

/// What the command line asks us to do
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the help screen, colored as requested
    Help(ColorChoice),
    /// Print the name and version
    Version,
    /// Compare two lists
    Compare(Args),
}

/// The settings for a comparison
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    /// `list_a` names the first list, `-` meaning standard input
    pub list_a: PathBuf,
    /// `list_b` names the second list
    pub list_b: PathBuf,
    /// `swap` asks us to compare B with A rather than A with B
    pub swap: bool,
    /// `options` says how lines are matched
    pub options: NormalizationOptions,
    /// `show` is the section (or all sections) to print
    pub show: Show,
    /// `format` is the output format
    pub format: Format,
    /// `color` says whether to color text output
    pub color: ColorChoice,
}

/// Which sections to print
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum Show {
    /// Every section, each under a heading with its item count
    #[default]
    All,
    /// Lines found only in A
    AOnly,
    /// Lines found in both lists
    Intersection,
    /// Lines found only in B
    BOnly,
    /// Lines found in either list
    Union,
}

impl Show {
    /// The single section requested, or `None` for all of them
    #[must_use]
    pub fn section(self) -> Option<Section> {
        match self {
            Show::All => None,
            Show::AOnly => Some(Section::AOnly),
            Show::Intersection => Some(Section::Intersection),
            Show::BOnly => Some(Section::BOnly),
            Show::Union => Some(Section::Union),
        }
    }
}

/// How to print the result
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    /// Plain (or colored) text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Returns the parsed command line. Exits with a usage message if clap
/// rejects it, and returns an error if the number of lists isn't two.
pub fn parsed() -> Result<Command> {
    parse_from(std::env::args_os())
}

/// Like `parsed`, but parses `args` rather than the process's arguments.
pub fn parse_from<I, T>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = CliArgs::parse_from(args);
    if parsed.help {
        return Ok(Command::Help(parsed.color));
    }
    if parsed.version {
        return Ok(Command::Version);
    }
    let [list_a, list_b] = match <[PathBuf; 2]>::try_from(parsed.lists) {
        Ok(pair) => pair,
        Err(lists) => bail!("Expected two lists to compare, but got {}", lists.len()),
    };
    let options = NormalizationOptions {
        case_sensitive: parsed.case_sensitive,
        ignore_begin_end_spaces: !parsed.keep_edge_spaces,
        ignore_extra_spaces: parsed.ignore_extra_spaces,
    };
    Ok(Command::Compare(Args {
        list_a,
        list_b,
        swap: parsed.swap,
        options,
        show: parsed.show,
        format: parsed.format,
        color: parsed.color,
    }))
}

#[derive(Debug, Parser)]
#[command(name = "listdiff", disable_help_flag = true, disable_version_flag = true)]
/// `CliArgs` contains the parsed command line.
struct CliArgs {
    #[arg(short = 'c', long)]
    /// Items that differ only in case are different items
    case_sensitive: bool,
    #[arg(short = 'k', long)]
    /// Leading and trailing whitespace is part of the item
    keep_edge_spaces: bool,
    #[arg(short = 'x', long)]
    /// A run of whitespace inside an item matches a single space
    ignore_extra_spaces: bool,
    #[arg(short = 's', long)]
    /// Swap the lists before comparing
    swap: bool,
    #[arg(long, value_enum, default_value_t = Show::All)]
    /// The section to print
    show: Show,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    /// The output format
    format: Format,
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    /// When to color the output
    color: ColorChoice,
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    /// Print help
    help: bool,
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    /// Print version
    version: bool,
    #[arg(value_name = "LIST")]
    /// The two lists to compare
    lists: Vec<PathBuf>,
}
