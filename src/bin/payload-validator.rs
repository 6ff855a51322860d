//! # Payload Validator
//!
//! A command-line utility for checking a JSON payload or query against one of
//! the registered schema extensions, printing either the normalized value or
//! every violation.
//!
//! ## Usage
//!
//! ### Validate a File
//!
//! ```bash
//! cargo run --bin payload-validator orderFilter query.json
//! ```
//!
//! ### Validate Standard Input
//!
//! ```bash
//! echo '{"status":"pending"}' | cargo run --bin payload-validator orderFilter -
//! ```
//!
//! ### Describe a Schema
//!
//! ```bash
//! cargo run --bin payload-validator --describe address
//! ```
//!
//! ## Options
//!
//! - `--allow-unknown` - keep keys the schema does not declare
//! - `--strip-unknown` - drop keys the schema does not declare
//! - `--no-convert` - disable type coercion
//! - `--options <file>` - load options from a camelCase JSON file
//! - `--describe` - print the schema instead of validating
//!
//! ## Output Examples
//!
//! ```text
//! Validating against 'orderFilter': query.json
//! ✓ Payload is valid!
//!
//! Normalized value:
//! {
//!   "status": [
//!     "pending"
//!   ]
//! }
//! ```
//!
//! ```text
//! Validating against 'orderFilter': query.json
//! ❌ 1 violation(s):
//!   - status[0]: Field 'status[0]' has invalid value 'unknown', allowed values: [...] [any.only]
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Payload is valid
//! - `1`: Violations were found, or the arguments/input were unusable
//!
//! Set `RUST_LOG=debug` to see registry and validation logging.

use commerce_schema::schema::{ExtensionRegistry, ValidationOptions};
use commerce_schema::SchemaError;
use serde_json::Value;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

struct Args {
    extension: String,
    input: Option<String>,
    options: ValidationOptions,
    describe: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let program = env::args().next().unwrap_or_else(|| "payload-validator".to_string());
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(&program);
            process::exit(1);
        }
    };

    let registry = ExtensionRegistry::global();

    if args.describe {
        describe(registry, &args.extension);
        return;
    }

    let Some(input) = args.input.as_deref() else {
        print_usage(&program);
        process::exit(1);
    };

    println!("Validating against '{}': {}", args.extension, input);

    let payload = match read_payload(input) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("❌ Could not read payload: {}", e);
            process::exit(1);
        }
    };

    match registry.validate(&args.extension, &payload, &args.options) {
        Ok(normalized) => {
            println!("✓ Payload is valid!");
            println!();
            println!("Normalized value:");
            println!(
                "{}",
                serde_json::to_string_pretty(&normalized).unwrap_or_else(|_| normalized.to_string())
            );
        }
        Err(SchemaError::Validation(errors)) => {
            eprintln!("❌ {} violation(s):", errors.len());
            for error in &errors {
                eprintln!("  - {}: {} [{}]", error.path(), error, error.rule());
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("  Registered extensions: {}", registry.names().join(", "));
            process::exit(1);
        }
    }
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut options = ValidationOptions::default();
    let mut describe = false;
    let mut positional = Vec::new();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--allow-unknown" => options.allow_unknown = true,
            "--strip-unknown" => options.strip_unknown = true,
            "--no-convert" => options.convert = false,
            "--describe" => describe = true,
            "--options" => {
                let path = raw.next().ok_or("--options requires a file path")?;
                let content = fs::read_to_string(&path)
                    .map_err(|e| format!("cannot read options file '{}': {}", path, e))?;
                options = serde_json::from_str(&content)
                    .map_err(|e| format!("invalid options file '{}': {}", path, e))?;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag '{}'", flag)),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let extension = positional.next().ok_or("missing extension name")?;
    let input = positional.next();
    if let Some(extra) = positional.next() {
        return Err(format!("unexpected argument '{}'", extra));
    }

    Ok(Args {
        extension,
        input,
        options,
        describe,
    })
}

fn read_payload(input: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let content = if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&content)?)
}

fn describe(registry: &ExtensionRegistry, name: &str) {
    match registry.build(name) {
        Ok(schema) => {
            println!("Schema '{}':", name);
            println!("  Kind: {}", schema.kind.describe());
            let keys = schema.key_names();
            if !keys.is_empty() {
                println!("  Keys: {}", keys.join(", "));
                let required: Vec<&str> = keys
                    .iter()
                    .copied()
                    .filter(|k| schema.key(k).is_some_and(|s| s.is_required()))
                    .collect();
                if !required.is_empty() {
                    println!("  Required keys: {}", required.join(", "));
                }
            }
            match serde_json::to_string_pretty(&schema) {
                Ok(json) => println!("\n{}", json),
                Err(e) => eprintln!("❌ Could not serialize schema: {}", e),
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("  Registered extensions: {}", registry.names().join(", "));
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [--allow-unknown] [--strip-unknown] [--no-convert] [--options <file>] <extension> <file.json|->",
        program
    );
    eprintln!("       {} --describe <extension>", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} orderFilter query.json", program);
    eprintln!("  {} --describe address", program);
}
