//! Run configuration for the command-line front end.

use std::path::PathBuf;

use clap::Parser;

use crate::reconstruct::Division;

pub const DEFAULT_INPUTS: [&str; 2] = ["testcase1.json", "testcase2.json"];
pub const DEFAULT_OUTPUT: &str = "output.json";

/// Settings for one run over a set of test-case documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Documents to reconstruct, reported as TEST CASE 1, 2, ... in this order.
    pub inputs: Vec<PathBuf>,

    /// Where the results document goes. `None` skips writing it.
    pub output: Option<PathBuf>,

    pub division: Division,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            division: Division::default(),
        }
    }
}

/// Reconstruct Shamir secrets from base-encoded shares.
#[derive(Debug, Parser)]
#[command(name = "shamir-reconstruct", version)]
pub struct Cli {
    /// Test-case documents (default: testcase1.json testcase2.json)
    pub inputs: Vec<PathBuf>,

    /// Results document path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Do not write the results document
    #[arg(long)]
    pub no_write: bool,

    /// Division strategy: term-wise or exact
    #[arg(long, default_value_t = Division::TermWise)]
    pub division: Division,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            inputs: if self.inputs.is_empty() { defaults.inputs } else { self.inputs },
            output: (!self.no_write).then_some(self.output),
            division: self.division,
        }
    }
}
