//! ANSI styling for the help screen and for section titles.
use clap::ValueEnum;
use once_cell::sync::Lazy;

use crate::compare::Section;

/// When to color the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal that supports it
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// The escape sequences used for each kind of styled text. The `NEVER` sheet
/// has empty strings throughout.
#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    app_start: &'static str,
    item_start: &'static str,
    title_start: &'static str,
    a_only_start: &'static str,
    intersection_start: &'static str,
    b_only_start: &'static str,
    union_start: &'static str,
    muted_start: &'static str,
    end: &'static str,
}

impl StyleSheet {
    /// The program name, as shown in the help screen
    #[must_use]
    pub fn app_name(&self, s: &str) -> String {
        format!("{}{}{}", self.app_start, s, self.end)
    }
    /// An option or argument name in the help screen
    #[must_use]
    pub fn item(&self, s: &str) -> String {
        format!("{}{}{}", self.item_start, s, self.end)
    }
    /// A help screen heading
    #[must_use]
    pub fn title(&self, s: &str) -> String {
        format!("{}{}{}", self.title_start, s, self.end)
    }
    /// The heading of a comparison section, in that section's color
    #[must_use]
    pub fn section(&self, section: Section, s: &str) -> String {
        let start = match section {
            Section::AOnly => self.a_only_start,
            Section::Intersection => self.intersection_start,
            Section::BOnly => self.b_only_start,
            Section::Union => self.union_start,
        };
        format!("{}{}{}", start, s, self.end)
    }
    /// Placeholder text, like the note shown for an empty section
    #[must_use]
    pub fn muted(&self, s: &str) -> String {
        format!("{}{}{}", self.muted_start, s, self.end)
    }
}

const GREEN: &str = "\x1B[32m";
const BOLD_GREEN: &str = "\x1B[32;1m";
const YELLOW: &str = "\x1B[33m";
const BOLD_RED: &str = "\x1B[31;1m";
const BOLD_BLUE: &str = "\x1B[34;1m";
const BOLD_MAGENTA: &str = "\x1B[35;1m";
const DIM_ITALIC: &str = "\x1B[2;3m";
const RESET: &str = "\x1B[m";
const ALWAYS: StyleSheet = StyleSheet {
    app_start: BOLD_GREEN,
    item_start: GREEN,
    title_start: YELLOW,
    a_only_start: BOLD_RED,
    intersection_start: BOLD_GREEN,
    b_only_start: BOLD_BLUE,
    union_start: BOLD_MAGENTA,
    muted_start: DIM_ITALIC,
    end: RESET,
};
const NEVER: StyleSheet = StyleSheet {
    app_start: "",
    item_start: "",
    title_start: "",
    a_only_start: "",
    intersection_start: "",
    b_only_start: "",
    union_start: "",
    muted_start: "",
    end: "",
};
static AUTO: Lazy<StyleSheet> = Lazy::new(|| {
    use enable_ansi_support::enable_ansi_support;
    use supports_color::Stream;
    let use_color = enable_ansi_support().is_ok() && supports_color::on(Stream::Stdout).is_some();
    if use_color {
        ALWAYS
    } else {
        NEVER
    }
});

/// Returns the style sheet for `cc`
#[must_use]
pub fn colored(cc: ColorChoice) -> &'static StyleSheet {
    match cc {
        ColorChoice::Always => &ALWAYS,
        ColorChoice::Never => &NEVER,
        ColorChoice::Auto => &*AUTO,
    }
}

/// The number of `char`s in `s` outside the escape sequences a `StyleSheet`
/// wraps around it. For the ASCII help text that's its width in columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            in_escape = c != 'm';
        } else if c == '\x1B' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}
