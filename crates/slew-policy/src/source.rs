//! The [`UniformSource`] random interface.
//!
//! Stochastic policies consume one uniform draw per call. The source is
//! always passed in by the caller; there is no hidden process-wide
//! generator, so a fixed seed reproduces an epoch bit for bit.
//!
//! [`target_stream`] derives an independent seeded stream per target and
//! epoch for callers that score candidates in any order or on several
//! threads.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slew_core::TargetId;

/// A stream of uniform draws in `[0, 1)`.
///
/// Implemented for every [`rand::RngCore`], so seeded generators such as
/// `rand_chacha::ChaCha8Rng` plug in directly. Test code can implement it
/// on a scripted type to force particular draws.
pub trait UniformSource {
    /// Next draw, uniform in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// ChaCha8 stream for one target in one epoch.
///
/// `seed` and `epoch` fill separate words of the ChaCha key, so no two
/// `(seed, epoch)` pairs share a key. The target id selects the ChaCha
/// stream under that key. The result depends only on the three inputs,
/// never on which other targets are scored or in what order.
pub fn target_stream(seed: u64, epoch: u64, target: TargetId) -> ChaCha8Rng {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&seed.to_le_bytes());
    key[8..16].copy_from_slice(&epoch.to_le_bytes());
    let mut rng = ChaCha8Rng::from_seed(key);
    rng.set_stream(target.0);
    rng
}
