//! The `compare` function is the kernel of the application: given two lists of
//! lines it finds the lines only in the first, only in the second, in both, and
//! in either. The `args` module parses the command line, `operands` reads the
//! two lists, and `render` prints the result.
//!
//! Lines match when their normalized keys are equal. By default a key ignores
//! case and leading/trailing whitespace; see `NormalizationOptions`.
//!
//! ```
//! use listdiff::{compare, NormalizationOptions};
//!
//! let result = compare(["apple", "banana"], ["banana", "cherry"], &NormalizationOptions::default());
//! assert_eq!(result.a_only, ["apple"]);
//! assert_eq!(result.intersection, ["banana"]);
//! assert_eq!(result.b_only, ["cherry"]);
//! assert_eq!(result.union, ["apple", "banana", "cherry"]);
//! ```

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod compare;
pub mod help;
pub mod operands;
pub mod render;
pub mod styles;

pub use crate::compare::{compare, normalize, Comparison, NormalizationOptions, Section};
