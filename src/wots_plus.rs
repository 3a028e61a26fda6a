//! # Winternitz One-Time Signature Scheme Plus (W-OTS+)
//!
//! This module implements W-OTS+ as it is used inside the SPHINCS+ hypertree: every key pair is
//! derived on the fly from the secret seed and an [`Adrs`], never stored. The compressed public
//! key of a key pair is a single n-byte value and is what the XMSS subtree uses as its leaf.
//!
//! All operations are generic over a [`ParameterSet`], which fixes n, w and the hash family.
//! Working buffers live on the stack and are sized by the crate-wide maxima in
//! [`params`](crate::params).
//!
//! ## Addressing
//!
//! The caller passes an address whose layer, tree and key pair fields name the one-time key
//! pair. Every hash call then works on its own copy of the address:
//!
//! * chain starts come from the PRF under a `WOTS_PRF` address with the chain index set and
//!   hash index zero,
//! * chain steps run under a `WOTS_HASH` address with the chain and hash indices set,
//! * the chain ends are compressed with T_len under a `WOTS_PK` address.
//!
//! ## Important Note
//!
//! A W-OTS+ key pair must sign a single message only. This module does not track key usage;
//! the surrounding tree structure is responsible for it.

use crate::hash::TweakableHash;
use crate::params::{ParameterSet, MAX_N, MAX_WOTS_BYTES, MAX_WOTS_LEN};
use crate::wots_plus::adrs::Adrs;
use crate::wots_plus::adrs::AdrsType::{WotsHash, WotsPk, WotsPrf};
use core::marker::PhantomData;
use zeroize::Zeroize;

pub mod adrs;

/// Encapsulates the W-OTS+ operations of a parameter set, keyed by the public seed.
#[derive(Clone, Debug)]
pub struct WotsPlus<P: ParameterSet> {
    hasher: P::Hasher,
    _params: PhantomData<P>,
}

impl<P: ParameterSet> WotsPlus<P> {
    /// Creates a new `WotsPlus` instance keyed with the given public seed.
    ///
    /// # Arguments
    ///
    /// * `pub_seed` - A `P::N`-byte public seed used for every hash call of this instance.
    ///
    /// # Returns
    ///
    /// A new instance of `WotsPlus` with the hasher of `P` keyed by `pub_seed`.
    ///
    /// # Panics
    ///
    /// Panics if `pub_seed` is not `P::N` bytes.
    pub fn new(pub_seed: &[u8]) -> Self {
        assert_eq!(
            pub_seed.len(),
            P::N,
            "public seed must be {} bytes for {}",
            P::N,
            P::NAME
        );
        Self::from_hasher(P::Hasher::new(pub_seed))
    }

    /// Wraps an already keyed hasher.
    pub fn from_hasher(hasher: P::Hasher) -> Self {
        Self {
            hasher,
            _params: PhantomData,
        }
    }

    /// The keyed tweakable hash family.
    pub fn hasher(&self) -> &P::Hasher {
        &self.hasher
    }

    /// Computes the chaining function.
    ///
    /// Interprets `input` as the `start`-th value of the chain and applies F `steps` times,
    /// setting the hash address to `start`, ..., `start + steps - 1`.
    ///
    /// # Arguments
    ///
    /// * `output` - Receives the n-byte chain value at position `start + steps`.
    /// * `input` - The n-byte chain value at position `start`.
    /// * `start` - The position of `input` within the chain.
    /// * `steps` - The number of F applications.
    /// * `adrs` - A `WotsHash` address whose key pair and chain fields are already set. It is
    ///   copied, so the caller's address is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `start + steps > w - 1`.
    pub fn chain(&self, output: &mut [u8], input: &[u8], start: usize, steps: usize, adrs: &Adrs) {
        assert!(
            start + steps < P::WOTS_W,
            "WOTS+ chain overrun: start {} + steps {} exceeds w - 1 = {}",
            start,
            steps,
            P::WOTS_W - 1
        );

        let mut adrs = *adrs;
        output[..P::N].copy_from_slice(&input[..P::N]);
        for i in start..(start + steps) {
            adrs.set_hash_addr(i as u32);
            self.hasher.spx_f_inplace(&mut output[..P::N], &adrs);
        }
    }

    /// Generates the compressed W-OTS+ public key of the key pair named by `adrs`.
    ///
    /// Every chain secret is derived with the PRF, walked to the end of its chain, and the
    /// `len` chain ends are compressed with T_len.
    ///
    /// # Arguments
    ///
    /// * `output` - Receives the n-byte public key.
    /// * `sk_seed` - The `P::N`-byte secret seed.
    /// * `adrs` - Names the key pair by its layer, tree and key pair fields. The other fields
    ///   are ignored.
    pub fn pkgen(&self, output: &mut [u8], sk_seed: &[u8], adrs: &Adrs) {
        let (mut prf_adrs, mut hash_adrs) = self.chain_adrs(adrs);
        let mut sk = [0u8; MAX_N];
        let mut chain_ends = [0u8; MAX_WOTS_BYTES];

        for (j, end) in chain_ends[..P::WOTS_BYTES]
            .chunks_exact_mut(P::N)
            .enumerate()
        {
            self.chain_secret(&mut sk, sk_seed, &mut prf_adrs, j);
            hash_adrs.set_chain_addr(j as u32);
            self.chain(end, &sk, 0, P::WOTS_W - 1, &hash_adrs);
        }
        sk.zeroize();

        self.compress(output, &chain_ends[..P::WOTS_BYTES], adrs);
    }

    /// Signs an n-byte message with the key pair named by `adrs`.
    ///
    /// # Arguments
    ///
    /// * `output` - Receives the `P::WOTS_BYTES`-byte signature, one chain value per digit.
    /// * `msg` - The `P::N`-byte message, usually an XMSS or FORS root.
    /// * `sk_seed` - The `P::N`-byte secret seed.
    /// * `adrs` - Names the key pair by its layer, tree and key pair fields.
    ///
    /// # Panics
    ///
    /// Panics if `msg` is not `P::N` bytes.
    pub fn sign(&self, output: &mut [u8], msg: &[u8], sk_seed: &[u8], adrs: &Adrs) {
        let mut lengths = [0u32; MAX_WOTS_LEN];
        Self::chain_lengths(&mut lengths[..P::WOTS_LEN], msg);

        let (mut prf_adrs, mut hash_adrs) = self.chain_adrs(adrs);
        let mut sk = [0u8; MAX_N];

        for (j, sig) in output[..P::WOTS_BYTES]
            .chunks_exact_mut(P::N)
            .enumerate()
        {
            self.chain_secret(&mut sk, sk_seed, &mut prf_adrs, j);
            hash_adrs.set_chain_addr(j as u32);
            self.chain(sig, &sk, 0, lengths[j] as usize, &hash_adrs);
        }
        sk.zeroize();
    }

    /// Computes the compressed W-OTS+ public key from a signature and the n-byte message.
    ///
    /// The result equals [`pkgen`](Self::pkgen) of the signing key pair if and only if the
    /// signature is valid; comparing it is up to the caller.
    ///
    /// # Arguments
    ///
    /// * `output` - Receives the n-byte public key candidate.
    /// * `sig` - The W-OTS+ signature; only its first `P::WOTS_BYTES` bytes are read.
    /// * `msg` - The `P::N`-byte message the signature claims to sign.
    /// * `adrs` - Names the key pair by its layer, tree and key pair fields.
    ///
    /// # Panics
    ///
    /// Panics if `sig` is shorter than `P::WOTS_BYTES` or `msg` is not `P::N` bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spx_xmss::sphincs_plus::Shake_128fSimple;
    /// use spx_xmss::{Adrs, AdrsType, ParameterSet, WotsPlus};
    ///
    /// type P = Shake_128fSimple;
    ///
    /// let wots = WotsPlus::<P>::new(&[1u8; 16]);
    /// let sk_seed = [2u8; 16];
    /// let msg = [3u8; 16];
    /// let mut adrs = Adrs::from(AdrsType::WotsHash);
    /// adrs.set_keypair_addr(5);
    ///
    /// let mut pk = [0u8; 16];
    /// wots.pkgen(&mut pk, &sk_seed, &adrs);
    ///
    /// let mut sig = vec![0u8; P::WOTS_BYTES];
    /// wots.sign(&mut sig, &msg, &sk_seed, &adrs);
    ///
    /// let mut recovered = [0u8; 16];
    /// wots.pk_from_sig(&mut recovered, &sig, &msg, &adrs);
    /// assert_eq!(recovered, pk);
    /// ```
    pub fn pk_from_sig(&self, output: &mut [u8], sig: &[u8], msg: &[u8], adrs: &Adrs) {
        assert!(
            sig.len() >= P::WOTS_BYTES,
            "W-OTS+ signature must be {} bytes, got {}",
            P::WOTS_BYTES,
            sig.len()
        );

        let mut lengths = [0u32; MAX_WOTS_LEN];
        Self::chain_lengths(&mut lengths[..P::WOTS_LEN], msg);

        let (_, mut hash_adrs) = self.chain_adrs(adrs);
        let mut chain_ends = [0u8; MAX_WOTS_BYTES];

        for (j, (end, sig)) in chain_ends[..P::WOTS_BYTES]
            .chunks_exact_mut(P::N)
            .zip(sig.chunks_exact(P::N))
            .enumerate()
        {
            let start = lengths[j] as usize;
            hash_adrs.set_chain_addr(j as u32);
            self.chain(end, sig, start, P::WOTS_W - 1 - start, &hash_adrs);
        }

        self.compress(output, &chain_ends[..P::WOTS_BYTES], adrs);
    }

    /// Takes an n-byte message and derives the matching chain lengths: `len_1` base-w digits
    /// of the message followed by `len_2` digits of its checksum.
    pub fn chain_lengths(lengths: &mut [u32], msg: &[u8]) {
        assert_eq!(
            msg.len(),
            P::N,
            "W-OTS+ message must be {} bytes, got {}",
            P::N,
            msg.len()
        );
        let (msg_digits, csum_digits) = lengths[..P::WOTS_LEN].split_at_mut(P::WOTS_LEN1);
        base_w(msg_digits, msg, P::WOTS_LOGW);
        Self::checksum(csum_digits, msg_digits);
    }

    /// Computes the W-OTS+ checksum over a message (in base_w) and writes its `len_2` digits.
    fn checksum(csum_digits: &mut [u32], msg_digits: &[u32]) {
        let w_max = (P::WOTS_W - 1) as u32;
        let mut csum: u32 = msg_digits.iter().map(|&d| w_max - d).sum();

        // Make sure expected empty zero bits are the least significant bits.
        let csum_bits = P::WOTS_LEN2 * P::WOTS_LOGW;
        csum <<= (8 - csum_bits % 8) % 8;

        let csum_bytes = csum.to_be_bytes();
        let used = (csum_bits + 7) / 8;
        base_w(csum_digits, &csum_bytes[csum_bytes.len() - used..], P::WOTS_LOGW);
    }

    /// Copies of `adrs` for the PRF and for the chain steps, both carrying its key pair.
    fn chain_adrs(&self, adrs: &Adrs) -> (Adrs, Adrs) {
        let keypair = adrs.keypair_addr();

        let mut prf_adrs = adrs.subtree();
        prf_adrs.set_type(WotsPrf);
        prf_adrs.set_keypair_addr(keypair);

        let mut hash_adrs = adrs.subtree();
        hash_adrs.set_type(WotsHash);
        hash_adrs.set_keypair_addr(keypair);

        (prf_adrs, hash_adrs)
    }

    /// Derives the secret start of chain `j`.
    fn chain_secret(&self, sk: &mut [u8], sk_seed: &[u8], prf_adrs: &mut Adrs, j: usize) {
        prf_adrs.set_chain_addr(j as u32);
        prf_adrs.set_hash_addr(0);
        self.hasher.spx_prf(sk, sk_seed, prf_adrs);
    }

    /// Compresses the chain ends into the n-byte public key with T_len.
    fn compress(&self, output: &mut [u8], chain_ends: &[u8], adrs: &Adrs) {
        let mut pk_adrs = adrs.subtree();
        pk_adrs.set_type(WotsPk);
        pk_adrs.set_keypair_addr(adrs.keypair_addr());
        self.hasher.spx_t_l(output, chain_ends, &pk_adrs);
    }
}

/// Converts a big-endian byte string into base-w digits of `logw` bits, most significant
/// first. Exactly `output.len()` digits are written.
pub fn base_w(output: &mut [u32], input: &[u8], logw: usize) {
    let mask = (1u32 << logw) - 1;
    let mut bits = 0;
    let mut total = 0u32;
    let mut input_index = 0;

    for out in output.iter_mut() {
        if bits == 0 {
            total = input[input_index] as u32;
            input_index += 1;
            bits += 8;
        }
        bits -= logw;
        *out = (total >> bits) & mask;
    }
}

/// Packs base-w digits of `logw` bits back into bytes, the inverse of [`base_w`] over whole
/// bytes. Exactly `output.len()` bytes are written.
pub fn base_w_decode(output: &mut [u8], digits: &[u32], logw: usize) {
    let per_byte = 8 / logw;
    for (byte, chunk) in output.iter_mut().zip(digits.chunks(per_byte)) {
        *byte = chunk.iter().fold(0u32, |acc, &d| (acc << logw) | d) as u8;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::hash::ShakeSimple;
    use crate::sphincs_plus::{Sha2_128fSimple, Sha2_192sRobust, Shake_256fRobust};
    use rand::prelude::*;
    use rand::rngs::OsRng;

    /// Small parameter set with w = 4.
    #[derive(Copy, Clone, Debug, Default)]
    pub(crate) struct TestW4;

    impl ParameterSet for TestW4 {
        type Hasher = ShakeSimple;
        const NAME: &'static str = "test-w4";
        const N: usize = 32;
        const FULL_HEIGHT: usize = 4;
        const D: usize = 2;
        const FORS_HEIGHT: usize = 4;
        const FORS_TREES: usize = 4;
        const WOTS_W: usize = 4;
    }

    /// Small parameter set with w = 256.
    #[derive(Copy, Clone, Debug, Default)]
    pub(crate) struct TestW256;

    impl ParameterSet for TestW256 {
        type Hasher = ShakeSimple;
        const NAME: &'static str = "test-w256";
        const N: usize = 16;
        const FULL_HEIGHT: usize = 4;
        const D: usize = 2;
        const FORS_HEIGHT: usize = 4;
        const FORS_TREES: usize = 4;
        const WOTS_W: usize = 256;
    }

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        bytes
    }

    fn keypair_adrs(keypair: u32) -> Adrs {
        let mut adrs = Adrs::from(WotsHash);
        adrs.set_layer_addr(2);
        adrs.set_tree_addr(0x1234_5678);
        adrs.set_keypair_addr(keypair);
        adrs
    }

    fn round_trip<P: ParameterSet>() {
        let pub_seed = random_bytes(P::N);
        let sk_seed = random_bytes(P::N);
        let msg = random_bytes(P::N);
        let adrs = keypair_adrs(thread_rng().gen_range(0..512));
        let wp = WotsPlus::<P>::new(&pub_seed);

        let mut pk = vec![0u8; P::N];
        wp.pkgen(&mut pk, &sk_seed, &adrs);

        let mut sig = vec![0u8; P::WOTS_BYTES];
        wp.sign(&mut sig, &msg, &sk_seed, &adrs);

        let mut recovered = vec![0u8; P::N];
        wp.pk_from_sig(&mut recovered, &sig, &msg, &adrs);
        assert_eq!(recovered, pk, "{}", P::NAME);

        let mut fake_sig = sig.clone();
        fake_sig[0] ^= 1;
        wp.pk_from_sig(&mut recovered, &fake_sig, &msg, &adrs);
        assert_ne!(recovered, pk, "{}", P::NAME);

        let mut other_msg = msg.clone();
        other_msg[P::N - 1] ^= 0x80;
        wp.pk_from_sig(&mut recovered, &sig, &other_msg, &adrs);
        assert_ne!(recovered, pk, "{}", P::NAME);
    }

    #[test]
    fn test_wots_plus() {
        round_trip::<Sha2_128fSimple>();
        round_trip::<Sha2_192sRobust>();
        round_trip::<Shake_256fRobust>();
        round_trip::<TestW4>();
        round_trip::<TestW256>();

        println!("WOTS+ keygen, signing, and pk_from_sig tests passed.");
    }

    #[test]
    fn test_wots_plus_deterministic_and_keypair_bound() {
        let pub_seed = random_bytes(16);
        let sk_seed = random_bytes(16);
        let wp = WotsPlus::<Sha2_128fSimple>::new(&pub_seed);
        let wp_same = WotsPlus::<Sha2_128fSimple>::new(&pub_seed);

        let mut pk = [0u8; 16];
        let mut pk_same = [0u8; 16];
        let mut pk_other = [0u8; 16];
        wp.pkgen(&mut pk, &sk_seed, &keypair_adrs(3));
        wp_same.pkgen(&mut pk_same, &sk_seed, &keypair_adrs(3));
        wp.pkgen(&mut pk_other, &sk_seed, &keypair_adrs(4));

        assert_eq!(pk, pk_same);
        assert_ne!(pk, pk_other);
    }

    #[test]
    fn test_sig_of_zero_digit_is_chain_secret() {
        let pub_seed = [1u8; 16];
        let sk_seed = [0u8; 16];
        let adrs = keypair_adrs(5);
        let wp = WotsPlus::<Sha2_128fSimple>::new(&pub_seed);

        let mut sig = [0u8; Sha2_128fSimple::WOTS_BYTES];
        wp.sign(&mut sig, &[0u8; 16], &sk_seed, &adrs);

        let mut prf_adrs = adrs.subtree();
        prf_adrs.set_type(WotsPrf);
        prf_adrs.set_keypair_addr(5);
        let mut sk_0 = [0u8; 16];
        wp.hasher().spx_prf(&mut sk_0, &sk_seed, &prf_adrs);
        assert_eq!(sig[..16], sk_0);
    }

    #[test]
    fn test_chain_composes() {
        let wp = WotsPlus::<Shake_256fRobust>::new(&random_bytes(32));
        let mut adrs = keypair_adrs(1);
        adrs.set_chain_addr(9);
        let x = random_bytes(32);

        let mut full = [0u8; 32];
        wp.chain(&mut full, &x, 0, 15, &adrs);

        let mut half = [0u8; 32];
        let mut rest = [0u8; 32];
        wp.chain(&mut half, &x, 0, 6, &adrs);
        wp.chain(&mut rest, &half, 6, 9, &adrs);
        assert_eq!(full, rest);

        let mut none = [0u8; 32];
        wp.chain(&mut none, &x, 15, 0, &adrs);
        assert_eq!(none[..], x[..]);
    }

    #[test]
    #[should_panic(expected = "chain overrun")]
    fn test_chain_overrun_panics() {
        let wp = WotsPlus::<Sha2_128fSimple>::new(&[0u8; 16]);
        let mut out = [0u8; 16];
        wp.chain(&mut out, &[0u8; 16], 3, 13, &keypair_adrs(0));
    }

    #[test]
    fn test_chain_lengths_checksum() {
        let mut lengths = [0u32; 35];

        WotsPlus::<Sha2_128fSimple>::chain_lengths(&mut lengths, &[0u8; 16]);
        assert!(lengths[..32].iter().all(|&d| d == 0));
        // 32 * 15 = 0x1e0, shifted left by 4 bits
        assert_eq!(lengths[32..], [1, 14, 0]);

        WotsPlus::<Sha2_128fSimple>::chain_lengths(&mut lengths, &[0xffu8; 16]);
        assert!(lengths[..32].iter().all(|&d| d == 15));
        assert_eq!(lengths[32..], [0, 0, 0]);

        let mut msg = [0u8; 16];
        msg[0] = 0xa5;
        WotsPlus::<Sha2_128fSimple>::chain_lengths(&mut lengths, &msg);
        assert_eq!(lengths[..2], [0xa, 0x5]);
    }

    #[test]
    fn test_base_w_round_trip() {
        for logw in [2usize, 4, 8] {
            let bytes = random_bytes(32);
            let mut digits = vec![0u32; 32 * 8 / logw];
            base_w(&mut digits, &bytes, logw);
            assert!(digits.iter().all(|&d| d < (1 << logw)));

            let mut decoded = vec![0u8; 32];
            base_w_decode(&mut decoded, &digits, logw);
            assert_eq!(decoded, bytes);
        }
    }
}
