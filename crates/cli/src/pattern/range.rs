// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric range operators (`">100"`, `"<=0.5"`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A well-formed range operator.
#[allow(clippy::expect_used)]
static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(<=?|>=?)(\d+(?:\.\d+)?)$").expect("valid regex pattern")
});

/// Anything that reads as an operator followed by a number-ish bound.
///
/// Strings matching this but not [`RANGE_PATTERN`] are typos, not literals.
#[allow(clippy::expect_used)]
static RANGE_LIKE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(<=?|>=?)\s*[-+]?\d[\d.eE+-]*$").expect("valid regex pattern")
});

/// Comparison operator of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Gt,
    Lt,
    Ge,
    Le,
}

impl RangeOp {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(RangeOp::Gt),
            "<" => Some(RangeOp::Lt),
            ">=" => Some(RangeOp::Ge),
            "<=" => Some(RangeOp::Le),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RangeOp::Gt => ">",
            RangeOp::Lt => "<",
            RangeOp::Ge => ">=",
            RangeOp::Le => "<=",
        }
    }
}

/// A numeric comparison such as `> 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBound {
    pub op: RangeOp,
    pub bound: f64,
}

/// How a string leaf reads.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum RangeText {
    Valid(RangeBound),
    /// Operator-shaped, but the bound does not parse; carries the reason.
    Invalid(String),
    NotARange,
}

impl RangeBound {
    /// Whether `value` satisfies the comparison.
    pub fn contains(&self, value: f64) -> bool {
        match self.op {
            RangeOp::Gt => value > self.bound,
            RangeOp::Lt => value < self.bound,
            RangeOp::Ge => value >= self.bound,
            RangeOp::Le => value <= self.bound,
        }
    }

    pub(super) fn classify(text: &str) -> RangeText {
        if let Some(caps) = RANGE_PATTERN.captures(text)
            && let Some(op) = caps.get(1).and_then(|m| RangeOp::from_symbol(m.as_str()))
            && let Some(bound) = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok())
        {
            return RangeText::Valid(RangeBound { op, bound });
        }
        if RANGE_LIKE_PATTERN.is_match(text) {
            let bound = text.trim_start_matches(['<', '>', '=']).trim();
            return RangeText::Invalid(format!(
                "bound `{bound}` is not a plain decimal number"
            ));
        }
        RangeText::NotARange
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.bound)
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
