/*++

Licensed under the Apache-2.0 license.

File Name:

    sha256.rs

Abstract:

    File contains the streaming SHA-256 digest operation trait exposed by
    crypto modules.

--*/

use crate::ModuleResult;

/// SHA-256 digest size in bytes.
pub const SHA256_DIGEST_SIZE: usize = 32;

/// Upper bound on the total data fed to one digest operation.
pub const SHA256_MAX_DATA_SIZE: usize = 1024 * 1024;

/// A streaming SHA-256 digest operation. `finalize` consumes the operation;
/// a dropped operation releases its state without producing a digest.
pub trait Sha256DigestOp {
    fn update(&mut self, data: &[u8]) -> ModuleResult<()>;

    /// # Arguments
    ///
    /// * `digest` - result of the sha256 digest operation
    fn finalize(self, digest: &mut [u8; SHA256_DIGEST_SIZE]) -> ModuleResult<()>;
}
