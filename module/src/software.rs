/*++

Licensed under the Apache-2.0 license.

File Name:

    software.rs

Abstract:

    File contains the software crypto module, an emulated stand-in for a
    certified FIPS provider used by the validator binaries and tests.

--*/

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::{
    CryptoModule, FipsApproval, ModuleError, ModuleFaultHook, ModuleResult, SeedSource,
    Sha256DigestOp, SHA256_DIGEST_SIZE, SHA256_MAX_DATA_SIZE,
};

/// Seed bytes drawn through the registered seed source during self-tests.
const SEED_HEALTH_WINDOW_BYTES: usize = 32;

/// SHA-256 digest of the zero-length message.
///
/// Test vector source:
/// https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Algorithm-Validation-Program/documents/shs/shabytetestvectors.zip
#[cfg_attr(rustfmt, rustfmt_skip)]
const SHA256_NO_DATA_DIGEST: [u8; SHA256_DIGEST_SIZE] = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
];

/// Software crypto module. The FIPS posture it reports is driven by the
/// `fips` and `fips-version` cargo features, mirroring a provider whose
/// capability flags are fixed at build time.
#[derive(Default)]
pub struct SoftwareModule {
    seed_source: Option<SeedSource>,
    fault_hook: Option<ModuleFaultHook>,
}

impl SoftwareModule {
    /// FIPS version identifier reported by `fips-version` builds.
    pub const FIPS_VERSION: u32 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or clear) a fault injection hook. At most one hook is armed at
    /// a time.
    pub fn set_fault_hook(&mut self, hook: Option<ModuleFaultHook>) {
        self.fault_hook = hook;
    }

    /// Draw one window of seed material and run a repetition health check
    /// on it. A window of identical bytes means the source is stuck.
    fn seed_health_check(&mut self) -> ModuleResult<()> {
        let seed = self
            .seed_source
            .as_mut()
            .ok_or(ModuleError::SELF_TEST_SEED_SOURCE_MISSING)?;

        let mut buf = [0u8; SEED_HEALTH_WINDOW_BYTES];
        let result = seed(&mut buf).and_then(|()| {
            if buf.windows(2).all(|pair| pair[0] == pair[1]) {
                Err(ModuleError::SEED_SOURCE_DEGENERATE_OUTPUT)
            } else {
                Ok(())
            }
        });
        buf.zeroize();
        result
    }

    fn sha256_kat(&self) -> ModuleResult<()> {
        let digest = Sha256::digest(b"");
        if digest[..] != SHA256_NO_DATA_DIGEST[..] {
            return Err(ModuleError::SELF_TEST_SHA256_KAT_FAILURE);
        }
        Ok(())
    }
}

impl CryptoModule for SoftwareModule {
    type DigestOp<'a> = SoftwareDigestOp<'a>;

    fn fips_approval(&self) -> FipsApproval {
        FipsApproval {
            enabled: cfg!(feature = "fips"),
            version: if cfg!(feature = "fips-version") {
                Some(Self::FIPS_VERSION)
            } else {
                None
            },
        }
    }

    fn set_seed_source(&mut self, seed: SeedSource) {
        self.seed_source = Some(seed);
    }

    fn run_self_tests(&mut self) -> ModuleResult<()> {
        if self.fault_hook == Some(ModuleFaultHook::SelfTestError) {
            return Err(ModuleError::SELF_TEST_FORCED_FAILURE);
        }
        self.seed_health_check()?;
        self.sha256_kat()?;
        Ok(())
    }

    fn sha256_init(&mut self) -> ModuleResult<SoftwareDigestOp<'_>> {
        if self.fault_hook == Some(ModuleFaultHook::Sha256InitError) {
            return Err(ModuleError::SHA256_INIT_FORCED_FAILURE);
        }
        Ok(SoftwareDigestOp {
            module: self,
            engine: Sha256::new(),
            state: DigestState::Pending,
            data_size: 0,
        })
    }
}

#[derive(Eq, PartialEq)]
enum DigestState {
    Pending,
    Failed,
}

/// In-flight streaming digest operation on a `SoftwareModule`.
pub struct SoftwareDigestOp<'a> {
    module: &'a SoftwareModule,
    engine: Sha256,
    state: DigestState,
    data_size: usize,
}

impl Sha256DigestOp for SoftwareDigestOp<'_> {
    fn update(&mut self, data: &[u8]) -> ModuleResult<()> {
        if self.state != DigestState::Pending {
            return Err(ModuleError::SHA256_INVALID_STATE);
        }
        if self.module.fault_hook == Some(ModuleFaultHook::Sha256UpdateError) {
            self.state = DigestState::Failed;
            return Err(ModuleError::SHA256_UPDATE_FORCED_FAILURE);
        }
        if data.len() > SHA256_MAX_DATA_SIZE - self.data_size {
            self.state = DigestState::Failed;
            return Err(ModuleError::SHA256_MAX_DATA);
        }
        self.data_size += data.len();
        self.engine.update(data);
        Ok(())
    }

    fn finalize(self, digest: &mut [u8; SHA256_DIGEST_SIZE]) -> ModuleResult<()> {
        if self.state != DigestState::Pending {
            return Err(ModuleError::SHA256_INVALID_STATE);
        }
        if self.module.fault_hook == Some(ModuleFaultHook::Sha256FinalizeError) {
            return Err(ModuleError::SHA256_FINALIZE_FORCED_FAILURE);
        }
        digest.copy_from_slice(&self.engine.finalize());
        if self.module.fault_hook == Some(ModuleFaultHook::Sha256CorruptDigest) {
            digest[0] = !digest[0];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_seed_source;

    #[cfg_attr(rustfmt, rustfmt_skip)]
    const SHA256_ABC_DIGEST: [u8; SHA256_DIGEST_SIZE] = [
        0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
        0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
    ];

    fn digest_of(module: &mut SoftwareModule, data: &[u8]) -> ModuleResult<[u8; SHA256_DIGEST_SIZE]> {
        let mut op = module.sha256_init()?;
        op.update(data)?;
        let mut digest = [0u8; SHA256_DIGEST_SIZE];
        op.finalize(&mut digest)?;
        Ok(digest)
    }

    #[test]
    fn test_sha256_abc() {
        let mut module = SoftwareModule::new();
        assert_eq!(digest_of(&mut module, b"abc").unwrap(), SHA256_ABC_DIGEST);
    }

    #[test]
    fn test_sha256_no_data() {
        let mut module = SoftwareModule::new();
        assert_eq!(digest_of(&mut module, b"").unwrap(), SHA256_NO_DATA_DIGEST);
    }

    #[test]
    fn test_sha256_is_deterministic() {
        let mut module = SoftwareModule::new();
        let first = digest_of(&mut module, b"abc").unwrap();
        let second = digest_of(&mut module, b"abc").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_tests_pass_with_default_seed_source() {
        let mut module = SoftwareModule::new();
        module.set_seed_source(default_seed_source());
        assert_eq!(module.run_self_tests(), Ok(()));
    }

    #[test]
    fn test_self_tests_require_seed_source() {
        let mut module = SoftwareModule::new();
        assert_eq!(
            module.run_self_tests(),
            Err(ModuleError::SELF_TEST_SEED_SOURCE_MISSING)
        );
    }

    #[test]
    fn test_self_tests_reject_stuck_seed_source() {
        let mut module = SoftwareModule::new();
        module.set_seed_source(Box::new(|buf| {
            buf.fill(0xa5);
            Ok(())
        }));
        assert_eq!(
            module.run_self_tests(),
            Err(ModuleError::SEED_SOURCE_DEGENERATE_OUTPUT)
        );
    }

    #[test]
    fn test_seed_source_error_propagates() {
        let mut module = SoftwareModule::new();
        module.set_seed_source(Box::new(|_| Err(ModuleError::SEED_SOURCE_IO)));
        assert_eq!(module.run_self_tests(), Err(ModuleError::SEED_SOURCE_IO));
    }

    #[test]
    fn test_self_test_fault_hook() {
        let mut module = SoftwareModule::new();
        module.set_seed_source(default_seed_source());
        module.set_fault_hook(Some(ModuleFaultHook::SelfTestError));
        assert_eq!(
            module.run_self_tests(),
            Err(ModuleError::SELF_TEST_FORCED_FAILURE)
        );
    }

    #[test]
    fn test_sha256_init_fault_hook() {
        let mut module = SoftwareModule::new();
        module.set_fault_hook(Some(ModuleFaultHook::Sha256InitError));
        assert_eq!(
            module.sha256_init().err(),
            Some(ModuleError::SHA256_INIT_FORCED_FAILURE)
        );
    }

    #[test]
    fn test_sha256_update_fault_hook() {
        let mut module = SoftwareModule::new();
        module.set_fault_hook(Some(ModuleFaultHook::Sha256UpdateError));
        let mut op = module.sha256_init().unwrap();
        assert_eq!(
            op.update(b"abc"),
            Err(ModuleError::SHA256_UPDATE_FORCED_FAILURE)
        );
        // The op is now poisoned; further use is a state error, not a
        // repeat of the injected fault.
        assert_eq!(op.update(b"abc"), Err(ModuleError::SHA256_INVALID_STATE));
    }

    #[test]
    fn test_sha256_finalize_fault_hook() {
        let mut module = SoftwareModule::new();
        module.set_fault_hook(Some(ModuleFaultHook::Sha256FinalizeError));
        let mut op = module.sha256_init().unwrap();
        op.update(b"abc").unwrap();
        let mut digest = [0u8; SHA256_DIGEST_SIZE];
        assert_eq!(
            op.finalize(&mut digest),
            Err(ModuleError::SHA256_FINALIZE_FORCED_FAILURE)
        );
    }

    #[test]
    fn test_sha256_corrupt_digest_fault_hook() {
        let mut module = SoftwareModule::new();
        module.set_fault_hook(Some(ModuleFaultHook::Sha256CorruptDigest));
        let digest = digest_of(&mut module, b"abc").unwrap();
        assert_eq!(digest[0], !SHA256_ABC_DIGEST[0]);
        assert_eq!(digest[1..], SHA256_ABC_DIGEST[1..]);
    }

    #[test]
    fn test_sha256_max_data_bound() {
        let mut module = SoftwareModule::new();
        let mut op = module.sha256_init().unwrap();
        op.update(&vec![0u8; SHA256_MAX_DATA_SIZE]).unwrap();
        assert_eq!(op.update(b"x"), Err(ModuleError::SHA256_MAX_DATA));
    }

    #[test]
    fn test_dropped_op_leaves_module_usable() {
        let mut module = SoftwareModule::new();
        let op = module.sha256_init().unwrap();
        drop(op);
        assert_eq!(digest_of(&mut module, b"abc").unwrap(), SHA256_ABC_DIGEST);
    }

    #[test]
    fn test_fips_approval_tracks_build_features() {
        let approval = SoftwareModule::new().fips_approval();
        assert_eq!(approval.enabled, cfg!(feature = "fips"));
        assert_eq!(
            approval.version,
            cfg!(feature = "fips-version").then_some(SoftwareModule::FIPS_VERSION)
        );
    }
}
