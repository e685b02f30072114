/*++

Licensed under the Apache-2.0 license.

File Name:

    fault_hook.rs

Abstract:

    File contains fault injection commands for the software crypto module.

--*/

/// Fault injection command for `SoftwareModule`, used by tests to force the
/// module down a specific failure path. At most one hook is armed at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModuleFaultHook {
    /// Force the aggregate self-test entry point to fail.
    SelfTestError,

    /// Force `sha256_init` to fail.
    Sha256InitError,

    /// Force `update` on the digest operation to fail.
    Sha256UpdateError,

    /// Force `finalize` on the digest operation to fail.
    Sha256FinalizeError,

    /// Let the digest operation succeed but invert the first byte of the
    /// produced digest.
    Sha256CorruptDigest,
}
