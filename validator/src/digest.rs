/*++

Licensed under the Apache-2.0 license.

File Name:

    digest.rs

Abstract:

    File contains the SHA-256 operational check against a fixed test vector.

--*/

use fips_gate_module::{CryptoModule, Sha256DigestOp, SHA256_DIGEST_SIZE};

use crate::ValidationError;

/// Input of the operational check.
pub const SHA256_ABC_INPUT: &[u8] = b"abc";

/// SHA-256 digest of "abc".
///
/// Test vector source:
/// https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Algorithm-Validation-Program/documents/shs/shabytetestvectors.zip
#[cfg_attr(rustfmt, rustfmt_skip)]
pub const SHA256_ABC_DIGEST: [u8; SHA256_DIGEST_SIZE] = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
    0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
];

/// Stream the fixed input through the module's digest API and compare the
/// full 32-byte output against the known answer. Each API failure keeps its
/// own identity; the comparison only runs when every call succeeded.
pub(crate) fn execute<M: CryptoModule>(
    module: &mut M,
) -> Result<[u8; SHA256_DIGEST_SIZE], ValidationError> {
    let mut op = module
        .sha256_init()
        .map_err(ValidationError::DigestInitFailure)?;
    op.update(SHA256_ABC_INPUT)
        .map_err(ValidationError::DigestUpdateFailure)?;

    let mut digest = [0u8; SHA256_DIGEST_SIZE];
    op.finalize(&mut digest)
        .map_err(ValidationError::DigestFinalizeFailure)?;

    if digest != SHA256_ABC_DIGEST {
        return Err(ValidationError::DigestMismatch);
    }
    Ok(digest)
}
