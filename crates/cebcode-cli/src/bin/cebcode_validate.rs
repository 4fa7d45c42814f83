// cebcode-validate: Check donor codes against the registry.
//
// Reads codes from the command line or stdin (one per line) and prints
// availability, issues, and alternative suggestions for each.
//
// Usage:
//   cebcode-validate [-r REGISTRY] [OPTIONS] [CODE...]
//
// Options:
//   -r, --registry PATH  Registry JSON file (array of donor records)
//       --json           Print each result as JSON
//   -h, --help           Print help

use std::io::{self, BufRead};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (registry_path, args) = cebcode_cli::parse_registry_path(&args);

    if cebcode_cli::wants_help(&args) {
        println!("cebcode-validate: Check donor codes against the registry.");
        println!();
        println!("Usage: cebcode-validate [-r REGISTRY] [OPTIONS] [CODE...]");
        println!();
        println!("If CODE arguments are given, validates each code.");
        println!("Otherwise reads codes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -r, --registry PATH  Registry JSON file with existing donors");
        println!("      --json           Print each result as JSON");
        println!("  -h, --help           Print this help");
        return;
    }

    let json = cebcode_cli::wants_json(&args);
    let codes: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect();

    let engine = cebcode_cli::load_engine(registry_path.as_deref())
        .unwrap_or_else(|e| cebcode_cli::fatal(&e));

    if codes.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.unwrap_or_else(|e| cebcode_cli::fatal(&format!("stdin: {e}")));
            let code = line.trim();
            if !code.is_empty() {
                validate(&engine, code, json);
            }
        }
    } else {
        for code in &codes {
            validate(&engine, code, json);
        }
    }
}

fn validate(engine: &cebcode_engine::CodeEngine, code: &str, json: bool) {
    let check = engine.validate_custom_code(code);
    if json {
        match serde_json::to_string(&check) {
            Ok(out) => println!("{out}"),
            Err(e) => cebcode_cli::fatal(&format!("serialization: {e}")),
        }
        return;
    }
    let verdict = match (check.is_valid, check.is_available) {
        (true, true) => "available",
        (true, false) => "taken",
        (false, _) => "invalid",
    };
    println!("{code}: {verdict}");
    for issue in &check.issues {
        println!("  ! {issue}");
    }
    if !check.suggestions.is_empty() {
        println!("  try: {}", check.suggestions.join(", "));
    }
}
