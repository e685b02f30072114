/*++

Licensed under the Apache-2.0 license.

File Name:

    seed.rs

Abstract:

    File contains the seed source callback type registered with a crypto
    module before its self-tests run.

--*/

use crate::{ModuleError, ModuleResult};

/// Source of seed material for the module's internal self-tests. Registered
/// per module instance; there is no process-global registration.
pub type SeedSource = Box<dyn FnMut(&mut [u8]) -> ModuleResult<()>>;

/// Seed source backed by the operating system RNG.
pub fn default_seed_source() -> SeedSource {
    Box::new(|buf| getrandom::getrandom(buf).map_err(|_| ModuleError::SEED_SOURCE_IO))
}
