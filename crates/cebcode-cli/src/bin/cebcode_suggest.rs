// cebcode-suggest: Generate donor code suggestions for entity names.
//
// Reads names from the command line or stdin (one per line) and prints
// the ranked suggestions for each.
//
// Usage:
//   cebcode-suggest [-r REGISTRY] [OPTIONS] [NAME...]
//
// Options:
//   -r, --registry PATH      Registry JSON file (array of donor records)
//   -n, --max-suggestions N  Maximum number of alternatives (default: 5)
//       --json               Print the full result as JSON
//   -h, --help               Print help

use std::io::{self, BufRead};

use cebcode_engine::GenerateOptions;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (registry_path, args) = cebcode_cli::parse_registry_path(&args);

    if cebcode_cli::wants_help(&args) {
        println!("cebcode-suggest: Generate donor code suggestions.");
        println!();
        println!("Usage: cebcode-suggest [-r REGISTRY] [OPTIONS] [NAME...]");
        println!();
        println!("If NAME arguments are given, suggests for each name.");
        println!("Otherwise reads names from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -r, --registry PATH      Registry JSON file with existing donors");
        println!("  -n, --max-suggestions N  Maximum number of alternatives (default: 5)");
        println!("      --json               Print the full result as JSON");
        println!("  -h, --help               Print this help");
        return;
    }

    let json = cebcode_cli::wants_json(&args);
    let mut max_suggestions: usize = 5;
    let mut names: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| cebcode_cli::fatal("invalid number for --max-suggestions"));
                skip_next = true;
            } else {
                cebcode_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            names.push(arg.clone());
        }
    }

    let engine = cebcode_cli::load_engine(registry_path.as_deref())
        .unwrap_or_else(|e| cebcode_cli::fatal(&e));

    if names.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.unwrap_or_else(|e| cebcode_cli::fatal(&format!("stdin: {e}")));
            let name = line.trim();
            if !name.is_empty() {
                suggest(&engine, name, max_suggestions, json);
            }
        }
    } else {
        for name in &names {
            suggest(&engine, name, max_suggestions, json);
        }
    }
}

fn suggest(engine: &cebcode_engine::CodeEngine, name: &str, max_suggestions: usize, json: bool) {
    let mut options = GenerateOptions::new(name);
    options.max_suggestions = max_suggestions;
    match engine.generate_code(&options) {
        Ok(result) => {
            if json {
                match serde_json::to_string(&result) {
                    Ok(out) => println!("{out}"),
                    Err(e) => cebcode_cli::fatal(&format!("serialization: {e}")),
                }
                return;
            }
            println!(
                "{name}: {} ({}%, {})",
                result.primary.code,
                result.primary.confidence,
                if result.primary.is_unique { "available" } else { "taken" }
            );
            for alt in &result.alternatives {
                println!(
                    "  {} ({}%, {})",
                    alt.code,
                    alt.confidence,
                    if alt.is_unique { "available" } else { "taken" }
                );
            }
        }
        Err(e) => {
            eprintln!("{name}: {e}");
        }
    }
}
