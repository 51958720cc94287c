use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Birth/survival table indexed by live-neighbor count (0..=8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    birth: [bool; 9],
    survival: [bool; 9],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("rule must look like B3/S23, got {0:?}")]
    Format(String),

    #[error("neighbor count {0:?} is out of range 0-8")]
    Count(char),
}

impl Rule {
    /// Conway's rule: born with 3 neighbors, survives with 2 or 3
    pub fn conway() -> Self {
        Self::from_counts(&[3], &[2, 3])
    }

    pub fn from_counts(birth: &[u8], survival: &[u8]) -> Self {
        let mut rule = Self {
            birth: [false; 9],
            survival: [false; 9],
        };
        for &n in birth.iter().filter(|&&n| n <= 8) {
            rule.birth[n as usize] = true;
        }
        for &n in survival.iter().filter(|&&n| n <= 8) {
            rule.survival[n as usize] = true;
        }
        rule
    }

    /// Whether a cell is alive in the next generation
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive { &self.survival } else { &self.birth };
        table.get(neighbors as usize).copied().unwrap_or(false)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

fn parse_counts(part: &str) -> Result<Vec<u8>, RuleParseError> {
    part.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if d <= 8 => Ok(d as u8),
            _ => Err(RuleParseError::Count(c)),
        })
        .collect()
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || RuleParseError::Format(s.to_string());
        let (b, s_part) = s.trim().split_once('/').ok_or_else(format_err)?;

        let birth = b
            .strip_prefix(['B', 'b'])
            .ok_or_else(format_err)
            .and_then(parse_counts)?;
        let survival = s_part
            .strip_prefix(['S', 's'])
            .ok_or_else(format_err)
            .and_then(parse_counts)?;

        Ok(Self::from_counts(&birth, &survival))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |table: &[bool; 9]| -> String {
            (0..9)
                .filter(|&n| table[n])
                .map(|n| char::from(b'0' + n as u8))
                .collect()
        };
        write!(f, "B{}/S{}", digits(&self.birth), digits(&self.survival))
    }
}
