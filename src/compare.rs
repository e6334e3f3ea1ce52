//! Houses the `compare` function, and the `normalize` function it uses to
//! decide when two lines are "the same line".
//!
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;

/// The three switches that control how a line is turned into the key used
/// for matching. All eight combinations are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// When `false`, lines that differ only in case match
    pub case_sensitive: bool,
    /// When `true`, leading and trailing whitespace is ignored
    pub ignore_begin_end_spaces: bool,
    /// When `true`, each run of whitespace is treated as a single space
    pub ignore_extra_spaces: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        NormalizationOptions {
            case_sensitive: false,
            ignore_begin_end_spaces: true,
            ignore_extra_spaces: false,
        }
    }
}

/// Returns the key `line` is matched by. The enabled transforms are applied
/// in a fixed order: trim, then collapse whitespace runs, then lowercase.
/// When no transform changes anything, the result borrows `line`.
#[must_use]
pub fn normalize<'a>(line: &'a str, options: &NormalizationOptions) -> Cow<'a, str> {
    let mut key = Cow::Borrowed(if options.ignore_begin_end_spaces { trim(line) } else { line });

    if options.ignore_extra_spaces && has_collapsible_whitespace(&key) {
        key = Cow::Owned(collapse_whitespace(&key));
    }

    if !options.case_sensitive {
        let folded = key.to_lowercase();
        if folded != *key {
            key = Cow::Owned(folded);
        }
    }

    key
}

/// The whitespace class used for trimming, collapsing, and the blank test:
/// Unicode `White_Space`, less NEXT LINE (U+0085), plus ZERO WIDTH NO-BREAK
/// SPACE (U+FEFF). This is the set browsers trim, so a stray Byte Order Mark
/// inside a list counts as space.
#[must_use]
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

// True when replacing each whitespace run by a single ASCII space would change
// `s`: some run is longer than one character, or is a single non-space.
fn has_collapsible_whitespace(s: &str) -> bool {
    let mut previous_was_space = false;
    for c in s.chars() {
        if is_space(c) {
            if previous_was_space || c != ' ' {
                return true;
            }
            previous_was_space = true;
        } else {
            previous_was_space = false;
        }
    }
    false
}

fn collapse_whitespace(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if is_space(c) {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }
    collapsed
}

/// A blank line is empty or all whitespace. The test is made on the raw line,
/// whatever the `NormalizationOptions` say.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    trim(line).is_empty()
}

// Maps each normalized key to its representative, the first line in the
// operand with that key. `IndexMap` keeps keys in first-occurrence order.
type KeyedLines<'data> = IndexMap<Cow<'data, str>, &'data str, FxBuildHasher>;

fn keyed_lines<'data>(
    lines: impl IntoIterator<Item = &'data str>,
    options: &NormalizationOptions,
) -> KeyedLines<'data> {
    let mut map = KeyedLines::default();
    for line in lines {
        if is_blank(line) {
            continue;
        }
        map.entry(normalize(line, options)).or_insert(line);
    }
    map
}

/// The result of comparing list A with list B. Every entry is the original
/// text of a line, never its normalized key, and no two entries of one list
/// share a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison<'data> {
    /// Lines whose key occurs in A but not B, in A's order
    pub a_only: Vec<&'data str>,
    /// Lines whose key occurs in B but not A, in B's order
    pub b_only: Vec<&'data str>,
    /// Lines (from A) whose key occurs in both, in A's order
    pub intersection: Vec<&'data str>,
    /// A's lines in A's order, then B's lines whose key isn't in A
    pub union: Vec<&'data str>,
}

/// Compares `list_a` with `list_b`. Blank lines are skipped; the other lines
/// are grouped by their `normalize`d key, each key represented by the first
/// line (in its own list) that produced it.
///
/// * `a_only` gets the keys found only in A,
/// * `b_only` the keys found only in B,
/// * `intersection` the keys found in both (represented by A's line), and
/// * `union` every key, A's first.
///
pub fn compare<'data>(
    list_a: impl IntoIterator<Item = &'data str>,
    list_b: impl IntoIterator<Item = &'data str>,
    options: &NormalizationOptions,
) -> Comparison<'data> {
    let a = keyed_lines(list_a, options);
    let b = keyed_lines(list_b, options);
    log::trace!("comparing {} distinct keys in A with {} in B", a.len(), b.len());

    let mut result = Comparison::default();
    for (key, &original) in &a {
        if b.contains_key(key) {
            result.intersection.push(original);
        } else {
            result.a_only.push(original);
        }
        result.union.push(original);
    }
    for (key, &original) in &b {
        if !a.contains_key(key) {
            result.b_only.push(original);
            result.union.push(original);
        }
    }
    result
}

/// Names the four lists of a `Comparison`, in the order they're displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Lines only in A
    AOnly,
    /// Lines in both A and B
    Intersection,
    /// Lines only in B
    BOnly,
    /// Lines in either A or B
    Union,
}

impl Section {
    /// All four sections, in display order
    pub const ALL: [Section; 4] =
        [Section::AOnly, Section::Intersection, Section::BOnly, Section::Union];

    /// The heading shown above the section
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::AOnly => "A only",
            Section::Intersection => "A ∩ B",
            Section::BOnly => "B only",
            Section::Union => "A ∪ B",
        }
    }
}

impl<'data> Comparison<'data> {
    /// The lines belonging to `section`
    #[must_use]
    pub fn section(&self, section: Section) -> &[&'data str] {
        match section {
            Section::AOnly => &self.a_only,
            Section::Intersection => &self.intersection,
            Section::BOnly => &self.b_only,
            Section::Union => &self.union,
        }
    }

    /// The section's lines joined by `\n`, with no trailing newline. This is
    /// the text a user copies out of a section.
    #[must_use]
    pub fn copy_text(&self, section: Section) -> String {
        self.section(section).join("\n")
    }
}
