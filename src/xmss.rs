//! # XMSS subtree
//!
//! A fixed-input-length XMSS tree of height h′ over 2^h′ W-OTS+ leaves, as used for one layer
//! of the SPHINCS+ hypertree. The subtree is named by the layer and tree fields of an [`Adrs`];
//! everything else in the address is ignored on input.
//!
//! Three operations are exposed, both on the keyed [`Xmss`] struct and as free functions that
//! key a hasher per call:
//!
//! * [`xmss_node`]: root of any aligned subtree, computed with a stack of at most z+1 nodes,
//! * [`xmss_sign`]: W-OTS+ signature of a leaf followed by its authentication path,
//! * [`xmss_pk_from_sig`]: root reconstructed from a signature, to be compared by the caller.
//!
//! ## Signature layout
//!
//! `len * n` bytes of W-OTS+ signature followed by `h′ * n` bytes of authentication path,
//! lowest level first. There is no framing.
//!
//! ## Parallelism
//!
//! With the `parallel` feature the authentication path nodes are computed on the rayon thread
//! pool. They only share read-only inputs, so the output is identical either way.

mod treehash;

use crate::hash::TweakableHash;
use crate::params::{ParameterSet, MAX_N};
use crate::wots_plus::adrs::Adrs;
use crate::wots_plus::adrs::AdrsType::{Tree, WotsHash};
use crate::wots_plus::WotsPlus;
use crate::xmss::treehash::treehash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// XMSS subtree operations of a parameter set, keyed by the public seed.
#[derive(Clone, Debug)]
pub struct Xmss<P: ParameterSet> {
    wots: WotsPlus<P>,
}

impl<P: ParameterSet> Xmss<P> {
    /// Creates a new `Xmss` instance keyed with the given public seed.
    ///
    /// # Panics
    ///
    /// Panics if `pub_seed` is not `P::N` bytes.
    pub fn new(pub_seed: &[u8]) -> Self {
        Self {
            wots: WotsPlus::new(pub_seed),
        }
    }

    /// The W-OTS+ instance producing the leaves.
    pub fn wots(&self) -> &WotsPlus<P> {
        &self.wots
    }

    /// Computes the root of the subtree of height `height` whose leftmost leaf is `start`.
    ///
    /// `xmss.node(out, sk_seed, 0, P::TREE_HEIGHT, adrs)` is the root of the whole subtree.
    ///
    /// # Arguments
    ///
    /// * `output` - Receives the n-byte root.
    /// * `sk_seed` - The `P::N`-byte secret seed.
    /// * `start` - Index of the leftmost leaf, a multiple of `2^height`.
    /// * `height` - Height of the subtree, 0 for a single leaf.
    /// * `adrs` - Names the XMSS tree by its layer and tree fields.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a multiple of `2^height`.
    pub fn node(&self, output: &mut [u8], sk_seed: &[u8], start: u32, height: usize, adrs: &Adrs) {
        treehash(&self.wots, output, sk_seed, start, height, adrs);
    }

    /// Signs the n-byte `msg` with leaf `idx` and writes the XMSS signature to `output`.
    ///
    /// # Arguments
    ///
    /// * `output` - Receives the `P::XMSS_BYTES`-byte signature: the W-OTS+ signature
    ///   followed by the authentication path.
    /// * `msg` - The `P::N`-byte message.
    /// * `sk_seed` - The `P::N`-byte secret seed.
    /// * `idx` - The signing leaf. Every leaf must sign at most one message.
    /// * `adrs` - Names the XMSS tree by its layer and tree fields.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a leaf of the subtree or `output` is shorter than
    /// `P::XMSS_BYTES`.
    pub fn sign(&self, output: &mut [u8], msg: &[u8], sk_seed: &[u8], idx: u32, adrs: &Adrs) {
        Self::assert_leaf(idx);
        assert!(
            output.len() >= P::XMSS_BYTES,
            "XMSS signature buffer must be {} bytes, got {}",
            P::XMSS_BYTES,
            output.len()
        );

        let (wots_sig, auth_path) = output[..P::XMSS_BYTES].split_at_mut(P::WOTS_BYTES);

        let mut leaf_adrs = adrs.subtree();
        leaf_adrs.set_type(WotsHash);
        leaf_adrs.set_keypair_addr(idx);
        self.wots.sign(wots_sig, msg, sk_seed, &leaf_adrs);

        let auth_node = |(level, node): (usize, &mut [u8])| {
            let sibling = ((idx >> level) ^ 1) << level;
            treehash(&self.wots, node, sk_seed, sibling, level, adrs);
        };

        #[cfg(feature = "parallel")]
        auth_path
            .par_chunks_mut(P::N)
            .enumerate()
            .for_each(auth_node);

        #[cfg(not(feature = "parallel"))]
        auth_path.chunks_mut(P::N).enumerate().for_each(auth_node);
    }

    /// Reconstructs the subtree root from the XMSS signature of the n-byte `msg` under leaf
    /// `idx`. The signature is valid if the result equals the authenticated root.
    ///
    /// # Arguments
    ///
    /// * `output` - Receives the n-byte root candidate.
    /// * `idx` - The leaf the signature claims to be made with.
    /// * `sig` - The `P::XMSS_BYTES`-byte signature.
    /// * `msg` - The `P::N`-byte message.
    /// * `adrs` - Names the XMSS tree by its layer and tree fields.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a leaf of the subtree or `sig` is not `P::XMSS_BYTES` long.
    pub fn root_from_sig(&self, output: &mut [u8], idx: u32, sig: &[u8], msg: &[u8], adrs: &Adrs) {
        Self::assert_leaf(idx);
        assert_eq!(
            sig.len(),
            P::XMSS_BYTES,
            "XMSS signature must be {} bytes, got {}",
            P::XMSS_BYTES,
            sig.len()
        );

        let (wots_sig, auth_path) = sig.split_at(P::WOTS_BYTES);

        let mut leaf_adrs = adrs.subtree();
        leaf_adrs.set_type(WotsHash);
        leaf_adrs.set_keypair_addr(idx);
        let mut node = [0u8; MAX_N];
        self.wots.pk_from_sig(&mut node, wots_sig, msg, &leaf_adrs);

        let mut tree_adrs = adrs.subtree();
        tree_adrs.set_type(Tree);
        let mut parent = [0u8; MAX_N];
        for (level, auth) in auth_path.chunks_exact(P::N).enumerate() {
            tree_adrs.set_tree_height(level as u32 + 1);
            tree_adrs.set_tree_index(idx >> (level + 1));

            let hasher = self.wots.hasher();
            if (idx >> level) & 1 == 0 {
                hasher.spx_h(&mut parent, &node, auth, &tree_adrs);
            } else {
                hasher.spx_h(&mut parent, auth, &node, &tree_adrs);
            }
            node = parent;
        }

        output[..P::N].copy_from_slice(&node[..P::N]);
    }

    fn assert_leaf(idx: u32) {
        assert!(
            (idx as u64) < (1u64 << P::TREE_HEIGHT),
            "leaf index {} out of range for a subtree of height {}",
            idx,
            P::TREE_HEIGHT
        );
    }
}

/// Computes the root of the subtree of height `z` starting at leaf `s` of the XMSS tree named
/// by `adrs`. `output` receives n bytes.
pub fn xmss_node<P: ParameterSet>(
    output: &mut [u8],
    sk_seed: &[u8],
    s: u32,
    z: usize,
    pk_seed: &[u8],
    adrs: &Adrs,
) {
    Xmss::<P>::new(pk_seed).node(output, sk_seed, s, z, adrs);
}

/// Signs the n-byte `msg` with leaf `idx` of the XMSS tree named by `adrs`. `output` receives
/// `P::XMSS_BYTES` bytes.
pub fn xmss_sign<P: ParameterSet>(
    output: &mut [u8],
    msg: &[u8],
    sk_seed: &[u8],
    idx: u32,
    pk_seed: &[u8],
    adrs: &Adrs,
) {
    Xmss::<P>::new(pk_seed).sign(output, msg, sk_seed, idx, adrs);
}

/// Reconstructs the root of the XMSS tree named by `adrs` from a signature of `msg` under
/// leaf `idx`. `output` receives n bytes.
pub fn xmss_pk_from_sig<P: ParameterSet>(
    output: &mut [u8],
    idx: u32,
    sig: &[u8],
    msg: &[u8],
    pk_seed: &[u8],
    adrs: &Adrs,
) {
    Xmss::<P>::new(pk_seed).root_from_sig(output, idx, sig, msg, adrs);
}
