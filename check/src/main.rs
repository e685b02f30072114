/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    File contains main entrypoint for the FIPS startup validation utility.
    Validates FIPS configuration at container startup: compile-time flag
    verification, Known Answer Tests (CAST), and one SHA-256 operation
    against a fixed test vector. Exit code 0 authorizes startup; 1 rejects.

--*/

use clap::{Arg, ArgAction, Command};
use fips_gate_module::SoftwareModule;
use fips_gate_validator::{Validator, VersionPolicy};
use std::io;
use std::process::exit;

fn main() {
    let matches = Command::new("fips-startup-check")
        .about("FIPS startup validation for containerized services")
        .arg(
            Arg::new("strict-version")
                .long("strict-version")
                .action(ArgAction::SetTrue)
                .help("Reject module builds that do not expose a FIPS version identifier"),
        )
        .get_matches();

    let policy = if matches
        .get_one::<bool>("strict-version")
        .copied()
        .unwrap_or(false)
    {
        VersionPolicy::Strict
    } else {
        VersionPolicy::Tolerant
    };

    println!("========================================");
    println!("FIPS Startup Validation");
    println!("========================================");

    let mut module = SoftwareModule::new();
    let mut validator = Validator::new().with_version_policy(policy);
    let mut stdout = io::stdout();

    match validator.execute(&mut module, &mut stdout) {
        Ok(_) => {
            println!();
            println!("========================================");
            println!("\u{2713} FIPS VALIDATION PASSED");
            println!("========================================");
            println!("FIPS 140-3 compliant cryptography verified");
            println!("Container startup authorized");
        }
        Err(err) => {
            println!();
            println!("========================================");
            println!("\u{2717} FIPS VALIDATION FAILED");
            println!("========================================");
            println!("{err}");
            if let Some(code) = err.raw_code() {
                println!("Module status code: 0x{code:08x}");
            }
            println!("Container startup rejected");
            exit(1);
        }
    }
}
