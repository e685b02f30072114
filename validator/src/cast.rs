/*++

Licensed under the Apache-2.0 license.

File Name:

    cast.rs

Abstract:

    File contains the Known-Answer Self-Test (CAST) check.

--*/

use fips_gate_module::{CryptoModule, SeedSource};

use crate::ValidationError;

/// Register the seed source the module's internal self-tests draw from,
/// then invoke the aggregate self-test entry point.
pub(crate) fn execute<M: CryptoModule>(
    module: &mut M,
    seed: SeedSource,
) -> Result<(), ValidationError> {
    module.set_seed_source(seed);
    module.run_self_tests().map_err(ValidationError::CastFailure)
}
