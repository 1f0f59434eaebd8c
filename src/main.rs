use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use shamir_reconstruct::config::{Cli, Config};
use shamir_reconstruct::input::load_case;
use shamir_reconstruct::reconstruct::{reconstruct_all, Outcome};
use shamir_reconstruct::report::{results_document, write_results, CaseReport, Summary};
use shamir_reconstruct::types::TestCase;
use shamir_reconstruct::Result;

fn banner() {
    println!("\n╔════════════════════════════════════════════════╗");
    println!("║   SHAMIR'S SECRET SHARING - RECONSTRUCTION     ║");
    println!("║   Polynomial Reconstruction using Lagrange     ║");
    println!("╚════════════════════════════════════════════════╝");
}

/// Returns whether every case was reconstructed.
fn run(config: &Config) -> Result<bool> {
    let cases = config
        .inputs
        .iter()
        .enumerate()
        .map(|(i, path)| load_case(&format!("TEST CASE {}", i + 1), path))
        .collect::<Result<Vec<TestCase>>>()?;

    let results: Vec<Result<Outcome>> = reconstruct_all(&cases, config.division);

    let mut all_ok = true;
    for (case, r) in cases.iter().zip(&results) {
        match r {
            Ok(o) => print!("{}", CaseReport(o)),
            Err(e) => {
                all_ok = false;
                error!(case = %case.name, "reconstruction failed: {e}");
            }
        }
    }

    let named: Vec<(String, Result<Outcome>)> = cases
        .iter()
        .enumerate()
        .map(|(i, _)| format!("Test Case {}", i + 1))
        .zip(results)
        .collect();
    print!("{}", Summary(&named));

    if let Some(path) = &config.output {
        let doc = results_document(named.iter().map(|(_, r)| r))?;
        write_results(path, &doc)?;
        println!("\n✓ Results saved to {}", path.display());
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = Cli::parse().into_config();
    banner();

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
