//! `numericFilters` clauses such as `price>=10`.
//!
//! Parsing is lenient. A clause missing its field, operator or value is
//! dropped. The value is read like `parseFloat`: the longest numeric prefix
//! counts (`200abc` is 200) and a value with no numeric prefix becomes NaN,
//! which no product satisfies. A clause naming a field that is unknown or not
//! numeric lets every product through.

use crate::types::{Product, ProductField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::debug;

// Two-character operators come first in the alternation so `>=` wins over `>`.
static CLAUSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<field>[^<>=\s]+)\s*(?P<op>>=|<=|>|<|=)\s*(?P<value>\S+)\s*$")
        .expect("numeric filter regex is valid")
});

static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("float prefix regex is valid")
});

/// Reads the longest leading float of `raw`, NaN when there is none.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let Some(m) = FLOAT_PREFIX_RE.find(raw) else {
        return f64::NAN;
    };
    let text = m.as_str().trim_start();
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = if body == "Infinity" {
        f64::INFINITY
    } else {
        body.parse::<f64>().unwrap_or(f64::NAN)
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Gt,
    Gte,
    Eq,
    Lt,
    Lte,
}

impl Comparison {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Comparison::Gt),
            ">=" => Some(Comparison::Gte),
            "=" => Some(Comparison::Eq),
            "<" => Some(Comparison::Lt),
            "<=" => Some(Comparison::Lte),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Gt => ">",
            Comparison::Gte => ">=",
            Comparison::Eq => "=",
            Comparison::Lt => "<",
            Comparison::Lte => "<=",
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Gt => lhs > rhs,
            Comparison::Gte => lhs >= rhs,
            Comparison::Eq => lhs == rhs,
            Comparison::Lt => lhs < rhs,
            Comparison::Lte => lhs <= rhs,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericFilter {
    pub field: String,
    pub comparison: Comparison,
    pub value: f64,
}

impl NumericFilter {
    /// Parses one clause, `None` when its field, operator or value is missing.
    pub fn parse(clause: &str) -> Option<Self> {
        let caps = CLAUSE_RE.captures(clause)?;
        let comparison = Comparison::from_symbol(&caps["op"])?;
        let value = parse_float_prefix(&caps["value"]);
        Some(Self {
            field: caps["field"].to_string(),
            comparison,
            value,
        })
    }

    /// Parses a comma-separated list, silently skipping malformed clauses.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(',')
            .filter_map(|clause| {
                let parsed = Self::parse(clause);
                if parsed.is_none() {
                    debug!(clause, "Dropping malformed numeric filter");
                }
                parsed
            })
            .collect()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let lhs = self
            .field
            .parse::<ProductField>()
            .ok()
            .and_then(|field| product.numeric(field));
        match lhs {
            Some(n) => self.comparison.apply(n, self.value),
            None => true,
        }
    }
}

impl fmt::Display for NumericFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.comparison.symbol(), self.value)
    }
}
