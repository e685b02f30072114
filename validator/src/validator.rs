/*++

Licensed under the Apache-2.0 license.

File Name:

    validator.rs

Abstract:

    File contains the startup validator that runs the three checks in
    strict order and stops at the first failure.

--*/

use std::io::Write;

use fips_gate_module::{default_seed_source, CryptoModule, SeedSource, SHA256_DIGEST_SIZE};

use crate::report::ReportWriter;
use crate::{
    approval, cast, digest, ApprovalVerdict, Check, CheckResult, ValidationError, ValidationReport,
    VersionPolicy,
};

/// Startup validator. One instance runs the three checks against a module,
/// emitting a report line per check as it completes:
/// compile-time configuration, then the aggregate self-tests, then one
/// SHA-256 digest against a fixed vector. The first failure ends the run.
pub struct Validator {
    policy: VersionPolicy,
    seed: Option<SeedSource>,
    report: ValidationReport,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            policy: VersionPolicy::default(),
            seed: None,
            report: ValidationReport::default(),
        }
    }

    pub fn with_version_policy(mut self, policy: VersionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seed source to register with the module before self-tests. Used for
    /// the next `execute` call only; later runs fall back to the OS seed
    /// source.
    pub fn with_seed_source(mut self, seed: SeedSource) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Report of the most recent `execute` call.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Run all checks. Returns the computed digest when the module is
    /// authorized, or the first check's error. Report lines are written to
    /// `sink` as each check completes.
    pub fn execute<M: CryptoModule>(
        &mut self,
        module: &mut M,
        sink: &mut dyn Write,
    ) -> Result<[u8; SHA256_DIGEST_SIZE], ValidationError> {
        self.report = ValidationReport::default();
        let mut writer = ReportWriter::new(sink);

        writer.begin(Check::CompileTimeConfig);
        match approval::execute(self.policy, module.fips_approval()) {
            Ok(ApprovalVerdict::Approved { version }) => {
                writer.pass_line("FIPS mode: ENABLED");
                writer.pass_line(&format!("FIPS version: {version}"));
                self.report.push(CheckResult::passed(
                    Check::CompileTimeConfig,
                    format!("FIPS version {version}"),
                ));
            }
            Ok(ApprovalVerdict::ApprovedLegacy) => {
                writer.pass_line("FIPS mode: ENABLED");
                writer.warn_line("FIPS version identifier not available");
                self.report.push(CheckResult::warning(
                    Check::CompileTimeConfig,
                    "FIPS version identifier not available",
                ));
            }
            Err(err) => return Err(self.fail(&mut writer, err)),
        }

        writer.begin(Check::SelfTests);
        let seed = self.seed.take().unwrap_or_else(default_seed_source);
        match cast::execute(module, seed) {
            Ok(()) => {
                writer.pass_line("FIPS CAST: PASSED");
                self.report
                    .push(CheckResult::passed(Check::SelfTests, "FIPS CAST passed"));
            }
            Err(err) => return Err(self.fail(&mut writer, err)),
        }

        writer.begin(Check::DigestOperation);
        match digest::execute(module) {
            Ok(computed) => {
                writer.pass_line("SHA-256 test vector: PASSED");
                self.report.push(CheckResult::passed(
                    Check::DigestOperation,
                    "SHA-256 test vector passed",
                ));
                Ok(computed)
            }
            Err(err) => Err(self.fail(&mut writer, err)),
        }
    }

    fn fail(&mut self, writer: &mut ReportWriter<'_>, err: ValidationError) -> ValidationError {
        writer.fail_line(&err.to_string());
        self.report
            .push(CheckResult::failed(err.check(), err.raw_code(), err.to_string()));
        err
    }
}
