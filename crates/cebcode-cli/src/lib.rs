// cebcode-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use cebcode_core::DonorRecord;
use cebcode_engine::CodeEngine;

/// Default registry file name looked up in the working directory.
const REGISTRY_FILE: &str = "donors.json";

/// Load the donor registry and create a `CodeEngine`.
///
/// Search order:
/// 1. `registry_path` argument (if provided)
/// 2. `CEBCODE_REGISTRY` environment variable
/// 3. `donors.json` in the current working directory
///
/// An explicitly named registry that does not exist is an error. When the
/// implicit search finds nothing, the engine starts with an empty
/// snapshot, so every code validates as available.
pub fn load_engine(registry_path: Option<&str>) -> Result<CodeEngine, String> {
    if let Some(p) = registry_path {
        let path = PathBuf::from(p);
        if !path.is_file() {
            return Err(format!("registry not found: {}", path.display()));
        }
        return load_registry(&path);
    }
    for path in implicit_search_paths() {
        if path.is_file() {
            return load_registry(&path);
        }
    }
    Ok(CodeEngine::new(Vec::new()))
}

fn load_registry(path: &Path) -> Result<CodeEngine, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let donors: Vec<DonorRecord> = serde_json::from_str(&data)
        .map_err(|e| format!("invalid registry {}: {e}", path.display()))?;
    Ok(CodeEngine::new(donors))
}

/// Registry files tried when no path was given on the command line.
fn implicit_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(env_path) = std::env::var("CEBCODE_REGISTRY") {
        paths.push(PathBuf::from(env_path));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(REGISTRY_FILE));
    }
    paths
}

/// Parse a `--registry=PATH` or `-r PATH` argument from command line args.
///
/// Returns `(registry_path, remaining_args)`.
pub fn parse_registry_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut registry_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--registry=") {
            registry_path = Some(val.to_string());
        } else if arg == "--registry" || arg == "-r" {
            if i + 1 < args.len() {
                registry_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (registry_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--json` is in the args.
pub fn wants_json(args: &[String]) -> bool {
    args.iter().any(|a| a == "--json")
}
