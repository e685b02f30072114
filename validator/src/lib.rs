/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the FIPS startup validation pipeline.

--*/

mod approval;
mod cast;
mod digest;
mod error;
mod report;
mod validator;

pub use approval::{ApprovalVerdict, VersionPolicy, MIN_FIPS_VERSION};
pub use digest::{SHA256_ABC_DIGEST, SHA256_ABC_INPUT};
pub use error::ValidationError;
pub use report::{Check, CheckOutcome, CheckResult, ValidationReport};
pub use validator::Validator;
