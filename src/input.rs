//! Reading test-case documents.
//!
//! A document names the threshold under `keys` and carries one entry per
//! share, keyed by the share's index:
//!
//! ```json
//! { "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2",  "value": "111" } }
//! ```
//!
//! Only indices 1..=n are read, in ascending order; missing indices are
//! skipped and any other key is ignored.
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::base::{parse_base, MAX_BASE, MIN_BASE};
use crate::errors::{ReconstructError, Result};
use crate::types::{Share, TestCase, Threshold};

#[derive(Deserialize)]
struct RawCase {
    keys: Threshold,
    #[serde(flatten)]
    entries: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

/// Bases appear both as strings ("16") and as numbers (16).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBase {
    Text(String),
    Number(Value),
}

impl RawBase {
    fn resolve(&self) -> Result<u32> {
        match self {
            RawBase::Text(s) => parse_base(s),
            RawBase::Number(v) => v
                .as_u64()
                .and_then(|b| u32::try_from(b).ok())
                .filter(|b| (MIN_BASE..=MAX_BASE).contains(b))
                .ok_or_else(|| ReconstructError::InvalidBase { base: v.to_string() }),
        }
    }
}

/// Parse a document into a named [`TestCase`].
pub fn parse_case(name: &str, text: &str) -> Result<TestCase> {
    let raw: RawCase = serde_json::from_str(text)?;
    let Threshold { n, k } = raw.keys;
    if k == 0 || k > n {
        return Err(ReconstructError::InvalidThreshold { n, k });
    }

    let mut indexed: Vec<(u64, &Value)> = raw
        .entries
        .iter()
        .filter_map(|(key, v)| {
            let index: u64 = key.parse().ok()?;
            // "01" is not share 1
            (index.to_string() == *key && index >= 1 && index <= n as u64).then_some((index, v))
        })
        .collect();
    indexed.sort_by_key(|(i, _)| *i);

    let mut shares = Vec::with_capacity(indexed.len());
    for (index, v) in indexed {
        let entry = RawShare::deserialize(v)?;
        let base = entry.base.resolve().map_err(|e| e.for_share(index))?;
        shares.push(Share { index, base, value: entry.value });
    }

    if shares.len() < n {
        warn!(case = name, n, present = shares.len(), "document lists fewer shares than n");
    }
    debug!(case = name, n, k, shares = shares.len(), "parsed test case");

    Ok(TestCase { name: name.to_string(), threshold: Threshold { n, k }, shares })
}

/// Read and parse a document from `path`.
pub fn load_case(name: &str, path: impl AsRef<Path>) -> Result<TestCase> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_case(name, &text)
}
