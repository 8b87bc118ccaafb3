#![forbid(unsafe_code)]

//! Text utilities: quick-search highlighting and width measurement.

pub mod measure;
pub mod search;

pub use measure::{MonospaceMeasure, TextMeasure, fit_to_width};
pub use search::{Highlight, SpanStyle, find_ascii_case_insensitive, highlight};
