//! # layout-scope - Main Entry Point
//!
//! Headless one-shot resolution: read a request manifest, consult the
//! running kernel's type catalog (or a BTF dump given with `--btf`), and
//! emit the resolved id → value map as JSON for a probe loader to consume.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use layout_scope::catalog::BtfTypeCatalog;
use layout_scope::cli::Args;
use layout_scope::fetcher::ConstantFetcher;
use layout_scope::requests::{load_requests, RequestSpec};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_NOPERM: i32 = 77;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.to_string().to_lowercase().contains("permission denied") {
        EXIT_NOPERM
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let requests = load_requests(&args.requests)?;

    let catalog = match &args.btf {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read BTF file: {}", path.display()))?;
            BtfTypeCatalog::from_bytes(&bytes)?
        }
        None => BtfTypeCatalog::from_current_kernel()?,
    };

    let mut fetcher = ConstantFetcher::new(&catalog);
    for request in &requests {
        match request {
            RequestSpec::Sizeof { id, type_name } => fetcher.append_sizeof_request(id, type_name),
            RequestSpec::Offsetof { id, type_name, field } => {
                fetcher.append_offsetof_request(id, type_name, field);
            }
        }
    }

    let constants = fetcher.finish_and_get_results()?;
    info!("resolved {}/{} constants", constants.len(), requests.len());

    // BTreeMap for deterministic output ordering
    let sorted: BTreeMap<&String, &u64> = constants.iter().collect();
    let json = serde_json::to_string_pretty(&sorted)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !args.quiet {
                println!("Wrote {} constants to {}", constants.len(), path.display());
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}
