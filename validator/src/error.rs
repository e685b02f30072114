/*++

Licensed under the Apache-2.0 license.

File Name:

    error.rs

Abstract:

    File contains the error taxonomy raised by the validation checks.

--*/

use core::fmt;

use fips_gate_module::ModuleError;

use crate::Check;

/// A failed validation check. Every variant is terminal; the validator
/// stops at the first one raised.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// Module was not built with FIPS support.
    FipsDisabled,

    /// Reported FIPS version is below the policy minimum.
    FipsVersionTooLow { version: u32, minimum: u32 },

    /// Module exposes no FIPS version identifier and the policy is strict.
    FipsVersionUnknown,

    /// Aggregate self-test entry point reported a failure.
    CastFailure(ModuleError),

    /// Digest initialization call failed.
    DigestInitFailure(ModuleError),

    /// Digest update call failed.
    DigestUpdateFailure(ModuleError),

    /// Digest finalize call failed.
    DigestFinalizeFailure(ModuleError),

    /// Every digest call succeeded but the output differs from the known
    /// test vector.
    DigestMismatch,
}

impl ValidationError {
    /// The check that raised this error.
    pub fn check(&self) -> Check {
        match self {
            ValidationError::FipsDisabled
            | ValidationError::FipsVersionTooLow { .. }
            | ValidationError::FipsVersionUnknown => Check::CompileTimeConfig,
            ValidationError::CastFailure(_) => Check::SelfTests,
            ValidationError::DigestInitFailure(_)
            | ValidationError::DigestUpdateFailure(_)
            | ValidationError::DigestFinalizeFailure(_)
            | ValidationError::DigestMismatch => Check::DigestOperation,
        }
    }

    /// The module's raw status code, where one exists.
    pub fn raw_code(&self) -> Option<u32> {
        match self {
            ValidationError::CastFailure(err)
            | ValidationError::DigestInitFailure(err)
            | ValidationError::DigestUpdateFailure(err)
            | ValidationError::DigestFinalizeFailure(err) => Some(u32::from(*err)),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FipsDisabled => {
                write!(f, "FIPS mode is DISABLED; module was not built with FIPS support")
            }
            ValidationError::FipsVersionTooLow { version, minimum } => {
                write!(f, "FIPS version {version} is below the required minimum {minimum}")
            }
            ValidationError::FipsVersionUnknown => {
                write!(f, "module does not expose a FIPS version identifier")
            }
            ValidationError::CastFailure(err) => {
                write!(f, "FIPS CAST FAILED (status code: 0x{:08x})", u32::from(*err))
            }
            ValidationError::DigestInitFailure(err) => {
                write!(
                    f,
                    "SHA-256 initialization failed (status code: 0x{:08x})",
                    u32::from(*err)
                )
            }
            ValidationError::DigestUpdateFailure(err) => {
                write!(
                    f,
                    "SHA-256 update failed (status code: 0x{:08x})",
                    u32::from(*err)
                )
            }
            ValidationError::DigestFinalizeFailure(err) => {
                write!(
                    f,
                    "SHA-256 finalization failed (status code: 0x{:08x})",
                    u32::from(*err)
                )
            }
            ValidationError::DigestMismatch => {
                write!(f, "SHA-256 test vector mismatch; digest operation produced an incorrect result")
            }
        }
    }
}
