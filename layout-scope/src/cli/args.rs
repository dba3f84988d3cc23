//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "layout-scope",
    about = "Resolve kernel struct layout constants from BTF type information",
    after_help = "\
EXAMPLES:
    layout-scope requests.json                   Resolve against the running kernel
    layout-scope requests.json --btf vmlinux.btf Resolve against a BTF dump
    layout-scope requests.json -o constants.json Write the resolved map to a file"
)]
pub struct Args {
    /// JSON manifest listing the constants to resolve
    #[arg(value_name = "REQUESTS")]
    pub requests: PathBuf,

    /// Read the type catalog from a raw BTF file instead of the running kernel
    #[arg(short, long, value_name = "FILE")]
    pub btf: Option<PathBuf>,

    /// Write the resolved constants to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
