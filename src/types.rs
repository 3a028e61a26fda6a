//! Owned keys and signatures on top of the buffer-based XMSS core.
//!
//! [`XmssKeyPair`] holds the secret seed and derives the public root once;
//! [`XmssPublicKey`] and [`XmssSignature`] are length-checked byte containers that can be
//! parsed from untrusted input. Unlike the core functions, which treat malformed arguments as
//! caller bugs and panic, everything here reports them as [`Error`].

use crate::error::{Error, Result};
use crate::params::ParameterSet;
use crate::sphincs_plus::adrs_offsets::SPX_ADDR_BYTES;
use crate::utils::params_bytes_struct;
use crate::wots_plus::adrs::Adrs;
use crate::xmss::Xmss;
use core::fmt;
use core::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A secret seed. The bytes are wiped from memory when dropped.
///
/// Cloning is supported but should be done cautiously, as it duplicates sensitive
/// information in memory.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretSeed(Vec<u8>);

impl SecretSeed {
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SecretSeed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretSeed([REDACTED; {}])", self.0.len())
    }
}

params_bytes_struct!(
    /// An XMSS signature: the W-OTS+ signature followed by the authentication path.
    XmssSignature,
    XMSS_BYTES
);

impl<P: ParameterSet> XmssSignature<P> {
    /// The W-OTS+ part, `len * n` bytes.
    pub fn wots_sig(&self) -> &[u8] {
        &self.bytes[..P::WOTS_BYTES]
    }

    /// The authentication path, `h′ * n` bytes, lowest level first.
    pub fn auth_path(&self) -> &[u8] {
        &self.bytes[P::WOTS_BYTES..]
    }

    /// The authentication path node at `level`, if the tree has that level.
    pub fn auth_node(&self, level: usize) -> Option<&[u8]> {
        self.auth_path().chunks_exact(P::N).nth(level)
    }
}

params_bytes_struct!(
    /// An XMSS subtree public key: the root, the public seed and the address naming the
    /// subtree (layer and tree fields only).
    XmssPublicKey,
    XMSS_PK_BYTES
);

impl<P: ParameterSet> XmssPublicKey<P> {
    /// Assembles a public key from its parts.
    pub fn new(root: &[u8], pub_seed: &[u8], adrs: &Adrs) -> Result<Self> {
        check_len(root, P::N)?;
        check_len(pub_seed, P::N)?;

        let mut bytes = Vec::with_capacity(P::XMSS_PK_BYTES);
        bytes.extend_from_slice(root);
        bytes.extend_from_slice(pub_seed);
        bytes.extend_from_slice(adrs.subtree().as_bytes());
        Self::try_from(bytes)
    }

    pub fn root(&self) -> &[u8] {
        &self.bytes[..P::N]
    }

    pub fn pub_seed(&self) -> &[u8] {
        &self.bytes[P::N..2 * P::N]
    }

    /// The subtree address. Only the layer and tree fields are set.
    pub fn adrs(&self) -> Adrs {
        let mut adrs = [0u8; SPX_ADDR_BYTES];
        adrs.copy_from_slice(&self.bytes[2 * P::N..]);
        Adrs::from_bytes(adrs).subtree()
    }

    /// Verifies an XMSS signature of the n-byte `msg` under leaf `idx`.
    pub fn verify(&self, idx: u32, msg: &[u8], sig: &XmssSignature<P>) -> Result<()> {
        check_leaf::<P>(idx)?;
        check_len(msg, P::N)?;

        let mut root = vec![0u8; P::N];
        Xmss::<P>::new(self.pub_seed()).root_from_sig(
            &mut root,
            idx,
            sig.as_bytes(),
            msg,
            &self.adrs(),
        );

        if root == self.root() {
            Ok(())
        } else {
            Err(Error::VerificationFailed)
        }
    }
}

/// An XMSS subtree key pair, with the hasher keyed once for all signatures.
#[derive(Clone, Debug)]
pub struct XmssKeyPair<P: ParameterSet> {
    sk_seed: SecretSeed,
    public_key: XmssPublicKey<P>,
    xmss: Xmss<P>,
}

impl<P: ParameterSet> XmssKeyPair<P> {
    /// Derives the key pair of the subtree named by `adrs` and computes its root.
    pub fn from_seeds(sk_seed: &[u8], pub_seed: &[u8], adrs: &Adrs) -> Result<Self> {
        check_len(sk_seed, P::N)?;
        check_len(pub_seed, P::N)?;

        let xmss = Xmss::<P>::new(pub_seed);
        let mut root = vec![0u8; P::N];
        xmss.node(&mut root, sk_seed, 0, P::TREE_HEIGHT, adrs);

        Ok(Self {
            sk_seed: SecretSeed::new(sk_seed),
            public_key: XmssPublicKey::new(&root, pub_seed, adrs)?,
            xmss,
        })
    }

    pub fn public_key(&self) -> &XmssPublicKey<P> {
        &self.public_key
    }

    /// Signs the n-byte `msg` with leaf `idx`.
    ///
    /// Every leaf is a one-time key: signing two different messages with the same `idx` breaks
    /// the security of that leaf.
    pub fn sign(&self, msg: &[u8], idx: u32) -> Result<XmssSignature<P>> {
        check_leaf::<P>(idx)?;
        check_len(msg, P::N)?;

        let mut sig = vec![0u8; P::XMSS_BYTES];
        self.xmss.sign(
            &mut sig,
            msg,
            self.sk_seed.as_ref(),
            idx,
            &self.public_key.adrs(),
        );
        XmssSignature::try_from(sig)
    }
}

fn check_len(data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        Err(Error::BadLength(expected, data.len()))
    } else {
        Ok(())
    }
}

fn check_leaf<P: ParameterSet>(idx: u32) -> Result<()> {
    if (idx as u64) < (1u64 << P::TREE_HEIGHT) {
        Ok(())
    } else {
        Err(Error::LeafIndexOutOfRange(idx, P::TREE_HEIGHT))
    }
}
