pub mod pattern;

pub use pattern::{FileLoader, LoadError, PatternLoader, parse_pattern};
