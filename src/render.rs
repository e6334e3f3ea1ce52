//! Writes a `Comparison` to the output, as text or JSON.
use anyhow::Result;
use std::io;

use crate::args::{Format, Show};
use crate::compare::{Comparison, Section};
use crate::styles::StyleSheet;

/// Shown in place of the items of an empty section
pub const NO_ITEMS: &str = "No items";

/// The number of non-blank lines in each list, duplicates included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemCounts {
    /// Non-blank lines in A
    pub a: usize,
    /// Non-blank lines in B
    pub b: usize,
}

/// Writes `comparison` to `out` in `format`.
///
/// * `Show::All` as text first prints `counts` as `A: 3 items, B: 2 items`,
///   then each section under a heading like `A only (2)`, with a blank line
///   between sections.
/// * A single section as text prints that section's lines, one per line and
///   nothing else, so it can be piped to other tools.
/// * As JSON, `Show::All` prints an object with the fields `aOnly`, `bOnly`,
///   `intersection` and `union`; a single section prints an array of strings.
pub fn output_to(
    comparison: &Comparison,
    counts: ItemCounts,
    show: Show,
    format: Format,
    styles: &StyleSheet,
    mut out: impl io::Write,
) -> Result<()> {
    match (format, show.section()) {
        (Format::Text, None) => {
            let summary = format!("A: {} items, B: {} items", counts.a, counts.b);
            writeln!(out, "{}\n", styles.muted(&summary))?;
            write_sections(comparison, styles, &mut out)?;
        }
        (Format::Text, Some(section)) => {
            let text = comparison.copy_text(section);
            if !text.is_empty() {
                writeln!(out, "{text}")?;
            }
        }
        (Format::Json, None) => {
            serde_json::to_writer_pretty(&mut out, comparison)?;
            writeln!(out)?;
        }
        (Format::Json, Some(section)) => {
            serde_json::to_writer_pretty(&mut out, comparison.section(section))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_sections(
    comparison: &Comparison,
    styles: &StyleSheet,
    out: &mut impl io::Write,
) -> Result<()> {
    for (n, section) in Section::ALL.into_iter().enumerate() {
        if n > 0 {
            writeln!(out)?;
        }
        let items = comparison.section(section);
        let heading = format!("{} ({})", section.title(), items.len());
        writeln!(out, "{}", styles.section(section, &heading))?;
        if items.is_empty() {
            writeln!(out, "{}", styles.muted(NO_ITEMS))?;
        }
        for item in items {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::compare::compare;
    use crate::styles::{colored, ColorChoice};

    fn render(comparison: &Comparison, show: Show, format: Format) -> String {
        render_counted(comparison, ItemCounts { a: 2, b: 2 }, show, format)
    }

    fn render_counted(
        comparison: &Comparison,
        counts: ItemCounts,
        show: Show,
        format: Format,
    ) -> String {
        let mut out = Vec::new();
        output_to(comparison, counts, show, format, colored(ColorChoice::Never), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn fruit() -> Comparison<'static> {
        compare(["apple", "banana"], ["banana", "cherry"], &Default::default())
    }

    #[test]
    fn all_sections_as_text() {
        let expected = "A: 2 items, B: 2 items\n\nA only (1)\napple\n\nA ∩ B (1)\nbanana\n\nB only (1)\ncherry\n\n\
                        A ∪ B (3)\napple\nbanana\ncherry\n";
        assert_eq!(render(&fruit(), Show::All, Format::Text), expected);
    }

    #[test]
    fn empty_sections_say_so() {
        let nothing = compare(Vec::<&str>::new(), Vec::<&str>::new(), &Default::default());
        let expected = "A: 0 items, B: 0 items\n\n\
                        A only (0)\nNo items\n\nA ∩ B (0)\nNo items\n\nB only (0)\nNo items\n\n\
                        A ∪ B (0)\nNo items\n";
        let counts = ItemCounts::default();
        assert_eq!(render_counted(&nothing, counts, Show::All, Format::Text), expected);
    }

    #[test]
    fn item_counts_head_only_the_full_text_output() {
        let counts = ItemCounts { a: 5, b: 1 };
        let all = render_counted(&fruit(), counts, Show::All, Format::Text);
        assert!(all.starts_with("A: 5 items, B: 1 items\n\n"), "{all:?}");
        let one = render_counted(&fruit(), counts, Show::AOnly, Format::Text);
        assert_eq!(one, "apple\n");
        let json = render_counted(&fruit(), counts, Show::All, Format::Json);
        assert!(!json.contains("items"), "{json}");
    }

    #[test]
    fn one_section_as_text_is_one_item_per_line() {
        assert_eq!(render(&fruit(), Show::Union, Format::Text), "apple\nbanana\ncherry\n");
        assert_eq!(render(&fruit(), Show::BOnly, Format::Text), "cherry\n");
        let nothing = compare(["x"], ["x"], &Default::default());
        assert_eq!(render(&nothing, Show::AOnly, Format::Text), "");
    }

    #[test]
    fn json_output() {
        let all: serde_json::Value =
            serde_json::from_str(&render(&fruit(), Show::All, Format::Json)).unwrap();
        assert_eq!(
            all,
            serde_json::json!({
                "aOnly": ["apple"],
                "bOnly": ["cherry"],
                "intersection": ["banana"],
                "union": ["apple", "banana", "cherry"],
            })
        );
        let one: Vec<String> =
            serde_json::from_str(&render(&fruit(), Show::Intersection, Format::Json)).unwrap();
        assert_eq!(one, ["banana"]);
    }

    #[test]
    fn colored_headings_keep_their_text() {
        let mut out = Vec::new();
        let counts = ItemCounts { a: 2, b: 2 };
        let styles = colored(ColorChoice::Always);
        output_to(&fruit(), counts, Show::All, Format::Text, styles, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1B[31;1mA only (1)\x1B[m\n"), "{text:?}");
    }
}
