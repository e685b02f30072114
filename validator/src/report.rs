/*++

Licensed under the Apache-2.0 license.

File Name:

    report.rs

Abstract:

    File contains the validation report and the console writer that emits
    each check result as soon as it is known.

--*/

use std::io::Write;

/// The three startup checks, in execution order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Check {
    CompileTimeConfig,
    SelfTests,
    DigestOperation,
}

impl Check {
    pub const COUNT: usize = 3;

    pub fn number(&self) -> usize {
        match self {
            Check::CompileTimeConfig => 1,
            Check::SelfTests => 2,
            Check::DigestOperation => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Check::CompileTimeConfig => "Checking FIPS compile-time configuration",
            Check::SelfTests => "Running FIPS Known Answer Tests (CAST)",
            Check::DigestOperation => "Validating SHA-256 cryptographic operation",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckOutcome {
    Passed,
    /// Passed with a policy allowance (legacy build without a version
    /// identifier under the tolerant policy).
    Warning,
    Failed,
}

/// One check's result: name, outcome, optional raw status code, optional
/// detail message. Drives console output only; never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckResult {
    pub check: Check,
    pub outcome: CheckOutcome,
    pub code: Option<u32>,
    pub detail: Option<String>,
}

impl CheckResult {
    pub(crate) fn passed(check: Check, detail: impl Into<String>) -> Self {
        Self {
            check,
            outcome: CheckOutcome::Passed,
            code: None,
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn warning(check: Check, detail: impl Into<String>) -> Self {
        Self {
            check,
            outcome: CheckOutcome::Warning,
            code: None,
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn failed(check: Check, code: Option<u32>, detail: impl Into<String>) -> Self {
        Self {
            check,
            outcome: CheckOutcome::Failed,
            code,
            detail: Some(detail.into()),
        }
    }
}

/// Ordered results of one validation run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    results: Vec<CheckResult>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// True only when every check ran and none failed.
    pub fn authorized(&self) -> bool {
        self.results.len() == Check::COUNT
            && self
                .results
                .iter()
                .all(|result| result.outcome != CheckOutcome::Failed)
    }
}

/// Writes report lines to the sink as checks complete, so a hang in a later
/// check still leaves earlier results visible in logs. Write errors are
/// ignored; the report itself is the source of truth.
pub(crate) struct ReportWriter<'a> {
    sink: &'a mut dyn Write,
}

impl<'a> ReportWriter<'a> {
    pub fn new(sink: &'a mut dyn Write) -> Self {
        Self { sink }
    }

    pub fn begin(&mut self, check: Check) {
        let _ = writeln!(self.sink);
        let _ = writeln!(
            self.sink,
            "[{}/{}] {}...",
            check.number(),
            Check::COUNT,
            check.title()
        );
    }

    pub fn pass_line(&mut self, text: &str) {
        let _ = writeln!(self.sink, "      \u{2713} {text}");
    }

    pub fn warn_line(&mut self, text: &str) {
        let _ = writeln!(self.sink, "      \u{26a0} {text}");
    }

    pub fn fail_line(&mut self, text: &str) {
        let _ = writeln!(self.sink, "      \u{2717} {text}");
    }
}
