//! Tweakable hash functions F, H, T_l and the PRF used for WOTS+ chain starts.
//!
//! Every function is keyed by the public seed, which is absorbed once when the hasher is
//! built, and tweaked by an [`Adrs`]. The simple construction hashes
//! `PK.seed || ADRS || M`; the robust construction first XORs `M` with a bitmask derived
//! from `PK.seed || ADRS`. The mask is streamed block by block next to the message, so no
//! buffer of the message length is ever materialized.

mod sha2;
mod shake;

pub use crate::hash::sha2::{Sha2Hasher, Sha2Robust, Sha2Simple};
pub use crate::hash::shake::{ShakeHasher, ShakeRobust, ShakeSimple};

use crate::params::MAX_N;
use crate::wots_plus::adrs::Adrs;
use ::sha2::digest::Update;
use core::fmt::Debug;

/// A tweakable hash family keyed by a public seed.
///
/// Implementations hold only state derived from the public seed.
pub trait TweakableHash: Clone + Debug + Send + Sync {
    /// Whether inputs are bitmasked before hashing.
    const ROBUST: bool;

    /// Keys the family with `pub_seed`. The hash output length `n` is `pub_seed.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `pub_seed` is empty or longer than [`MAX_N`].
    fn new(pub_seed: &[u8]) -> Self;

    /// The hash output length in bytes.
    fn n(&self) -> usize;

    /// F(PK.seed, ADRS, M1), with M1 of n bytes.
    fn spx_f(&self, output: &mut [u8], input: &[u8], adrs: &Adrs);

    /// H(PK.seed, ADRS, M1 || M2), with M1 and M2 of n bytes each.
    fn spx_h(&self, output: &mut [u8], left: &[u8], right: &[u8], adrs: &Adrs);

    /// T_l(PK.seed, ADRS, M), with M of l*n bytes.
    fn spx_t_l(&self, output: &mut [u8], input: &[u8], adrs: &Adrs);

    /// PRF(PK.seed, SK.seed, ADRS).
    fn spx_prf(&self, output: &mut [u8], sk_seed: &[u8], adrs: &Adrs);

    /// Applies [`spx_f`](Self::spx_f), but modifies the given input in place.
    fn spx_f_inplace(&self, inout: &mut [u8], adrs: &Adrs) {
        let n = self.n();
        let mut input = [0u8; MAX_N];
        input[..n].copy_from_slice(&inout[..n]);
        self.spx_f(inout, &input[..n], adrs);
    }
}

pub(crate) fn assert_seed_len(pub_seed: &[u8]) {
    assert!(
        !pub_seed.is_empty() && pub_seed.len() <= MAX_N,
        "public seed must be 1..={} bytes, got {}",
        MAX_N,
        pub_seed.len()
    );
}

/// An endless stream of bitmask bytes.
pub(crate) trait MaskStream {
    fn next_byte(&mut self) -> u8;
}

/// Absorbs `parts` into `hasher`, each byte XORed with the next byte of `mask`.
pub(crate) fn update_masked<D: Update, M: MaskStream>(
    hasher: &mut D,
    parts: &[&[u8]],
    mask: &mut M,
) {
    let mut scratch = [0u8; 64];
    let mut fill = 0;
    for part in parts {
        for &byte in part.iter() {
            scratch[fill] = byte ^ mask.next_byte();
            fill += 1;
            if fill == scratch.len() {
                hasher.update(&scratch);
                fill = 0;
            }
        }
    }
    hasher.update(&scratch[..fill]);
}
