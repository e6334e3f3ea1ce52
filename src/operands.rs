//! Provides the `first_and_second` function, which reads the two lists to be
//! compared, and `lines_of`, which splits a list into its lines. Either list
//! may be UTF-16; we translate it to UTF-8 when we see a UTF-16 Byte Order
//! Mark.
use anyhow::{bail, Context, Result};
use bstr::ByteSlice;
use encoding_rs_io::DecodeReaderBytesBuilder;
use memchr::memchr;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::compare::is_blank;

/// The path that stands for standard input
pub const STDIN: &str = "-";

/// Reads the operands named by `first` and `second`. At most one of them may
/// be standard input.
pub fn first_and_second(first: &Path, second: &Path) -> Result<(String, String)> {
    if is_stdin(first) && is_stdin(second) {
        bail!("Standard input ({STDIN}) can be used for only one of the two lists");
    }
    Ok((read_operand(first)?, read_operand(second)?))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN
}

/// Returns the contents of `path` (or of standard input, if `path` is `-`) as
/// a `String`:
/// * a UTF-8 or UTF-16 Byte Order Mark is removed,
/// * UTF-16 is translated to UTF-8, and
/// * malformed UTF-8 is replaced by the Unicode REPLACEMENT CHARACTER.
pub fn read_operand(path: &Path) -> Result<String> {
    let contents = if is_stdin(path) {
        decode(io::stdin().lock()).context("Can't read standard input")?
    } else {
        let f = File::open(path).with_context(|| format!("Can't open file: {}", path.display()))?;
        decode(f).with_context(|| format!("Error reading file: {}", path.display()))?
    };
    log::debug!("read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

fn decode(source: impl Read) -> io::Result<String> {
    let mut reader = DecodeReaderBytesBuilder::new()
        .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
        .strip_bom(true) // Remove the BOM before sending data to us
        .utf8_passthru(true) // Don't enforce UTF-8 (BOM or no BOM)
        .build(source);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes.to_str_lossy().into_owned())
}

/// Returns the lines of `text`. Lines end with `\n` or `\r\n`; the terminator
/// isn't part of the line. A final line needn't be terminated.
#[must_use]
pub fn lines_of(mut text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    while let Some(end) = memchr(b'\n', text.as_bytes()) {
        let (line, rest) = text.split_at(end);
        text = &rest[1..];
        lines.push(line.strip_suffix('\r').unwrap_or(line));
    }
    if !text.is_empty() {
        lines.push(text);
    }
    lines
}

/// The number of non-blank lines in `lines`, the number of items the list
/// contributes to a comparison before duplicates are removed.
#[must_use]
pub fn item_count(lines: &[&str]) -> usize {
    lines.iter().filter(|line| !is_blank(line)).count()
}

/// The paths of the two lists, in the order they'll be compared.
#[must_use]
pub fn ordered(first: PathBuf, second: PathBuf, swap: bool) -> (PathBuf, PathBuf) {
    if swap {
        (second, first)
    } else {
        (first, second)
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    const UTF8_BOM: &str = "\u{FEFF}";

    fn utf_16le(source: &str) -> Vec<u8> {
        let mut result = b"\xff\xfe".to_vec();
        for b in source.as_bytes().iter() {
            result.push(*b);
            result.push(0);
        }
        result
    }

    fn utf_16be(source: &str) -> Vec<u8> {
        let mut result = b"\xfe\xff".to_vec();
        for b in source.as_bytes().iter() {
            result.push(0);
            result.push(*b);
        }
        result
    }

    fn read_bytes(contents: &[u8]) -> String {
        let temp_dir = TempDir::new().unwrap();
        let operand = temp_dir.child("operand");
        operand.write_binary(contents).unwrap();
        read_operand(operand.path()).unwrap()
    }

    const EXPECTED: &str = "The cute red crab\n jumps over the lazy blue gopher\n";

    #[test]
    fn utf_16le_is_translated_to_utf8() {
        assert_eq!(read_bytes(&utf_16le(EXPECTED)), EXPECTED);
    }

    #[test]
    fn utf_16be_is_translated_to_utf8() {
        assert_eq!(read_bytes(&utf_16be(EXPECTED)), EXPECTED);
    }

    #[test]
    fn utf8_bom_is_removed() {
        let with_bom = UTF8_BOM.to_string() + EXPECTED;
        assert_eq!(read_bytes(with_bom.as_bytes()), EXPECTED);
    }

    #[test]
    fn malformed_utf8_is_replaced() {
        assert_eq!(read_bytes(b"ok\n\xffbad\n"), "ok\n\u{FFFD}bad\n");
    }

    #[test]
    fn missing_file_is_an_error_naming_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.child("no-such-list");
        let err = read_operand(missing.path()).unwrap_err();
        assert!(format!("{err}").contains("no-such-list"), "{err}");
    }

    #[test]
    fn stdin_can_be_used_only_once() {
        let stdin = Path::new(STDIN);
        assert!(first_and_second(stdin, stdin).is_err());
    }

    #[test]
    fn lines_of_strips_line_terminators() {
        assert_eq!(lines_of("a\nb\r\nc"), ["a", "b", "c"]);
        assert_eq!(lines_of("a\n\nb\n"), ["a", "", "b"]);
        assert_eq!(lines_of(" x \r\n"), [" x "]);
        assert!(lines_of("").is_empty());
    }

    #[test]
    fn item_count_skips_blank_lines() {
        assert_eq!(item_count(&lines_of("a\n  \n\nb\n\t\na\n")), 3);
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn ordered_swaps_on_request() {
        let (a, b) = (PathBuf::from("a"), PathBuf::from("b"));
        assert_eq!(ordered(a.clone(), b.clone(), false), (a.clone(), b.clone()));
        assert_eq!(ordered(a.clone(), b.clone(), true), (b, a));
    }
}
