/*++

Licensed under the Apache-2.0 license.

File Name:

    approval.rs

Abstract:

    File contains the compile-time FIPS configuration check.

--*/

use fips_gate_module::FipsApproval;

use crate::ValidationError;

/// Minimum accepted FIPS version identifier.
pub const MIN_FIPS_VERSION: u32 = 5;

/// How to treat a FIPS-enabled module build that exposes no version
/// identifier. Tolerant accepts it with a warning; older provider builds
/// predate the identifier. Strict rejects it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VersionPolicy {
    #[default]
    Tolerant,
    Strict,
}

/// Outcome of a passing compile-time configuration check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApprovalVerdict {
    /// FIPS enabled with an acceptable version identifier.
    Approved { version: u32 },

    /// FIPS enabled, no version identifier, accepted under the tolerant
    /// policy.
    ApprovedLegacy,
}

pub(crate) fn execute(
    policy: VersionPolicy,
    approval: FipsApproval,
) -> Result<ApprovalVerdict, ValidationError> {
    if !approval.enabled {
        return Err(ValidationError::FipsDisabled);
    }
    match approval.version {
        Some(version) if version < MIN_FIPS_VERSION => Err(ValidationError::FipsVersionTooLow {
            version,
            minimum: MIN_FIPS_VERSION,
        }),
        Some(version) => Ok(ApprovalVerdict::Approved { version }),
        None => match policy {
            VersionPolicy::Tolerant => Ok(ApprovalVerdict::ApprovedLegacy),
            VersionPolicy::Strict => Err(ValidationError::FipsVersionUnknown),
        },
    }
}
