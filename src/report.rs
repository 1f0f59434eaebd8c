use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::Result;
use crate::reconstruct::Outcome;

const RULE: usize = 50;

/// One entry of the results document.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CaseResult {
    Solved { secret: String, n: usize, k: usize },
    Failed { error: String },
}

impl CaseResult {
    pub fn from_result(result: &Result<Outcome>) -> Self {
        match result {
            Ok(o) => CaseResult::Solved {
                secret: o.secret.to_string(),
                n: o.threshold.n,
                k: o.threshold.k,
            },
            Err(e) => CaseResult::Failed { error: e.to_string() },
        }
    }
}

/// `{ "testCase1": {...}, "testCase2": {...} }`, in input order.
pub fn results_document<'a>(results: impl IntoIterator<Item = &'a Result<Outcome>>) -> Result<Value> {
    let mut doc = Map::new();
    for (i, r) in results.into_iter().enumerate() {
        doc.insert(format!("testCase{}", i + 1), serde_json::to_value(CaseResult::from_result(r))?);
    }
    Ok(Value::Object(doc))
}

pub fn write_results(path: impl AsRef<Path>, doc: &Value) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serde_json::to_string_pretty(doc)?)?;
    info!(path = %path.display(), "results written");
    Ok(())
}

fn rule(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    writeln!(f, "{}", c.to_string().repeat(RULE))
}

/// Console report for one reconstructed case.
pub struct CaseReport<'a>(pub &'a Outcome);

impl fmt::Display for CaseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.0;
        writeln!(f)?;
        rule(f, '=')?;
        writeln!(f, "{}", o.name)?;
        rule(f, '=')?;
        writeln!(f, "n (total roots provided): {}", o.threshold.n)?;
        writeln!(f, "k (minimum roots required): {}", o.threshold.k)?;
        writeln!(f, "Polynomial degree: {}", o.degree())?;
        writeln!(f)?;

        for (share, p) in o.shares.iter().zip(&o.points) {
            writeln!(f, "Point {}: x = {}, y = {}", share.index, p.x, p.y)?;
            writeln!(f, "  (Original: base {}, value \"{}\")", share.base, share.value)?;
        }

        writeln!(f, "\nFinal points:\n")?;
        let listed: Vec<String> = o.points.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
        writeln!(f, "{}", listed.join(", "))?;

        writeln!(f)?;
        rule(f, '*')?;
        writeln!(f, "SECRET (Constant term c): {}", o.secret)?;
        rule(f, '*')
    }
}

/// Closing summary over every case, failed ones included.
pub struct Summary<'a>(pub &'a [(String, Result<Outcome>)]);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        rule(f, '=')?;
        writeln!(f, "{}", if self.0.len() == 1 { "RESULT" } else { "SUMMARY OF RESULTS" })?;
        rule(f, '=')?;
        for (name, r) in self.0 {
            match r {
                Ok(o) => writeln!(f, "{} Secret: {}", name, o.secret)?,
                Err(e) => writeln!(f, "{} FAILED: {}", name, e)?,
            }
        }
        rule(f, '=')
    }
}
