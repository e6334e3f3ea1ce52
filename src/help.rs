//! The help screen. Its text lives in `help.txt`, which is laid out the way
//! clap lays out help; we parse it and wrap it to fit the terminal.
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use terminal_size::{terminal_size, Width};
use textwrap::{wrap, Options};

use crate::styles::{colored, display_width, ColorChoice, StyleSheet};

enum HelpItem<'a> {
    Usage(&'a str),
    Paragraph(&'a str),
    Section(Section<'a>),
}
struct Section<'a> {
    title: &'a str,
    entries: Vec<Entry<'a>>,
}
struct Entry<'a> {
    item: &'a str,
    caption: &'a str,
}

const NAME: &str = "listdiff";

/// The program name and version
#[must_use]
pub fn version() -> String {
    let version = std::env!("CARGO_PKG_VERSION");
    format!("{NAME} {version}")
}

/// Prints the help screen to stdout, colored according to `color_choice`.
pub fn print(color_choice: ColorChoice) -> Result<()> {
    let styles = colored(color_choice);
    let mut stdout = std::io::stdout().lock();
    match write_help(&mut stdout, styles, *LINE_WIDTH) {
        Err(e) => bail!("failed printing to stdout: {e}"),
        Ok(()) => Ok(()),
    }
}

fn write_help(out: &mut dyn std::io::Write, styles: &StyleSheet, width: usize) -> std::io::Result<()> {
    writeln!(out, "{} {}", styles.app_name(NAME), std::env!("CARGO_PKG_VERSION"))?;
    for help_item in parse(include_str!("help.txt")) {
        match help_item {
            HelpItem::Usage(args) => {
                writeln!(out, "{}{}{}", styles.title("Usage: "), styles.app_name(NAME), args)?;
            }
            HelpItem::Paragraph(text) => {
                for line in wrap(text, width) {
                    writeln!(out, "{line}")?;
                }
            }
            HelpItem::Section(section) => {
                writeln!(out, "{}", styles.title(section.title))?;
                section.write_entries(out, styles, width)?;
            }
        }
    }
    out.flush()
}

fn parse(text: &str) -> Vec<HelpItem> {
    const USAGE: &str = "Usage: ";
    let mut help = Vec::new();
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix(USAGE) {
            let args = rest.find(' ').map_or("", |sp| &rest[sp..]);
            help.push(HelpItem::Usage(args));
        } else if line.ends_with(':') {
            let mut entries = Vec::new();
            let mut ended_by_blank = false;
            for entry in lines.by_ref() {
                let entry = entry.trim_end();
                if entry.is_empty() {
                    ended_by_blank = true;
                    break;
                }
                // The item is indented; the caption follows the last double space
                let (item, caption) = match entry.trim_start().rfind("  ") {
                    Some(sp_sp) => {
                        let (item, caption) = entry.trim_start().split_at(sp_sp);
                        (item, caption.trim_start())
                    }
                    None => (entry.trim_start(), ""),
                };
                entries.push(Entry { item, caption });
            }
            help.push(HelpItem::Section(Section { title: line, entries }));
            if ended_by_blank {
                help.push(HelpItem::Paragraph(""));
            }
        } else {
            help.push(HelpItem::Paragraph(line));
        }
    }
    help
}

const INDENT: usize = 2;
const GUTTER: usize = 2;
const BLANKS: &str = "                                        ";

impl Section<'_> {
    // Captions go in a column to the right of the items when that leaves them
    // at least half the line; otherwise each caption goes under its item.
    fn write_entries(
        &self,
        out: &mut dyn std::io::Write,
        styles: &StyleSheet,
        width: usize,
    ) -> std::io::Result<()> {
        let widest = self.entries.iter().map(|e| display_width(e.item)).max().unwrap_or(0);
        let column = INDENT + widest + GUTTER;
        let side_by_side = column <= BLANKS.len() && column * 2 <= width;
        for entry in &self.entries {
            let item = styles.item(entry.item);
            if side_by_side {
                let pad = &BLANKS[..column - INDENT - display_width(entry.item)];
                let options = Options::new(width.saturating_sub(column).max(1));
                let mut caption = wrap(entry.caption, options).into_iter();
                let first = caption.next().unwrap_or_default();
                writeln!(out, "{}{item}{pad}{first}", &BLANKS[..INDENT])?;
                for line in caption {
                    writeln!(out, "{}{line}", &BLANKS[..column])?;
                }
            } else {
                let indent = &BLANKS[..INDENT * 4];
                writeln!(out, "{}{item}", &BLANKS[..INDENT])?;
                let options = Options::new(width).initial_indent(indent).subsequent_indent(indent);
                for line in wrap(entry.caption, options) {
                    writeln!(out, "{line}")?;
                }
            }
        }
        Ok(())
    }
}

static LINE_WIDTH: Lazy<usize> = Lazy::new(|| {
    fn from_env() -> Option<usize> {
        std::env::var_os("COLUMNS")?.to_str()?.parse::<usize>().ok()
    }
    if let Some((Width(width), _)) = terminal_size() {
        width as usize
    } else {
        from_env().unwrap_or(100)
    }
});

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn help_text(width: usize) -> String {
        let mut out = Vec::new();
        write_help(&mut out, colored(ColorChoice::Never), width).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn every_option_is_listed() {
        let help = help_text(100);
        for flag in [
            "--case-sensitive",
            "--keep-edge-spaces",
            "--ignore-extra-spaces",
            "--swap",
            "--show",
            "--format",
            "--color",
            "--help",
            "--version",
        ] {
            assert!(help.contains(flag), "{flag} missing from help");
        }
    }

    #[test]
    fn help_starts_with_name_version_and_usage() {
        let help = help_text(100);
        let mut lines = help.lines();
        assert_eq!(lines.next(), Some(version().as_str()));
        assert_eq!(lines.next(), Some("Usage: listdiff [OPTIONS] <LIST_A> <LIST_B>"));
    }

    #[test]
    fn help_fits_the_requested_width() {
        for width in [50, 60, 100] {
            for line in help_text(width).lines() {
                assert!(display_width(line) <= width, "{line:?} is wider than {width}");
            }
        }
    }

    #[test]
    fn entries_split_at_the_last_double_space() {
        let help = parse("Options:\n  -s, --swap  Swap the lists\n");
        let HelpItem::Section(section) = &help[0] else { panic!("expected a section") };
        assert_eq!(section.title, "Options:");
        assert_eq!(section.entries[0].item, "-s, --swap");
        assert_eq!(section.entries[0].caption, "Swap the lists");
    }
}
