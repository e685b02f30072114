/*++

Licensed under the Apache-2.0 license.

File Name:

    error.rs

Abstract:

    File contains the raw status code type returned by crypto module calls.

--*/

use core::num::{NonZeroU32, TryFromIntError};

/// Crypto module status code. The wrapped value is the module's raw
/// non-success status; success is the absence of an error, so zero is
/// unrepresentable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ModuleError(pub NonZeroU32);

/// Macro to define status code constants ensuring uniqueness
///
/// Takes a list of (name, value, doc) tuples and generates a constant for
/// each. Under test it also generates `all_constants()` so uniqueness can
/// be asserted.
macro_rules! define_status_codes {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: ModuleError = ModuleError::new_const($value);
        )*

        #[cfg(test)]
        pub fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl ModuleError {
    /// Create a status code; intended for const contexts only, as we don't
    /// want runtime panics if val is zero. The preferred way to get a
    /// ModuleError from a u32 at runtime is `ModuleError::try_from()`.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("ModuleError cannot be 0"),
        }
    }

    // Status code layout: high 16 bits = component, low 16 bits = condition.
    // Component 0x0001 = self-tests, 0x0002 = SHA-256 engine,
    // 0x0003 = seed source.
    define_status_codes![
        (
            SELF_TEST_SEED_SOURCE_MISSING,
            0x0001_0001,
            "Self-tests invoked with no registered seed source"
        ),
        (
            SELF_TEST_SHA256_KAT_FAILURE,
            0x0001_0002,
            "SHA-256 known-answer self-test produced a wrong digest"
        ),
        (
            SELF_TEST_FORCED_FAILURE,
            0x0001_0003,
            "Self-test failure injected by fault hook"
        ),
        (
            SHA256_INVALID_STATE,
            0x0002_0001,
            "SHA-256 operation used after a prior failure"
        ),
        (SHA256_MAX_DATA, 0x0002_0002, "SHA-256 max data size exceeded"),
        (
            SHA256_INIT_FORCED_FAILURE,
            0x0002_0003,
            "SHA-256 init failure injected by fault hook"
        ),
        (
            SHA256_UPDATE_FORCED_FAILURE,
            0x0002_0004,
            "SHA-256 update failure injected by fault hook"
        ),
        (
            SHA256_FINALIZE_FORCED_FAILURE,
            0x0002_0005,
            "SHA-256 finalize failure injected by fault hook"
        ),
        (
            SEED_SOURCE_IO,
            0x0003_0001,
            "Seed source could not produce seed bytes"
        ),
        (
            SEED_SOURCE_DEGENERATE_OUTPUT,
            0x0003_0002,
            "Seed source output failed the repetition health check"
        ),
    ];
}

impl From<NonZeroU32> for ModuleError {
    fn from(val: NonZeroU32) -> Self {
        ModuleError(val)
    }
}

impl From<ModuleError> for NonZeroU32 {
    fn from(val: ModuleError) -> Self {
        val.0
    }
}

impl From<ModuleError> for u32 {
    fn from(val: ModuleError) -> Self {
        val.0.get()
    }
}

impl TryFrom<u32> for ModuleError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, TryFromIntError> {
        match NonZeroU32::try_from(val) {
            Ok(val) => Ok(ModuleError(val)),
            Err(err) => Err(err),
        }
    }
}

pub type ModuleResult<T> = Result<T, ModuleError>;
