use crate::hash::{assert_seed_len, update_masked, MaskStream, TweakableHash};
use crate::params::MAX_N;
use crate::sphincs_plus::adrs_offsets::{SPX_SHA256_BLOCK_BYTES, SPX_SHA512_BLOCK_BYTES};
use crate::wots_plus::adrs::Adrs;
use sha2::digest::{Output, Update};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

/// SHA2 instantiation with the simple construction.
pub type Sha2Simple = Sha2Hasher<false>;

/// SHA2 instantiation with the robust (bitmasked) construction.
pub type Sha2Robust = Sha2Hasher<true>;

/// SHA2 tweakable hashes over the 22-byte compressed address.
///
/// F and PRF always use SHA-256. H and T_l use SHA-256 for n = 16 and SHA-512 above it.
/// The public seed is block-padded and absorbed once per hasher; each call clones the seeded
/// state.
#[derive(Clone, Debug)]
pub struct Sha2Hasher<const ROBUST: bool> {
    n: usize,
    pub_seed: [u8; MAX_N],
    sha256: Sha256,
    sha512: Sha512,
}

/// MGF1 over a digest whose state already holds the seed.
struct Mgf1<M: Digest + Clone> {
    seeded: M,
    counter: u32,
    block: Output<M>,
    pos: usize,
}

impl<M: Digest + Clone> Mgf1<M> {
    fn new(seeded: M) -> Self {
        let block = Output::<M>::default();
        let pos = block.len();
        Self {
            seeded,
            counter: 0,
            block,
            pos,
        }
    }
}

impl<M: Digest + Clone> MaskStream for Mgf1<M> {
    fn next_byte(&mut self) -> u8 {
        if self.pos == self.block.len() {
            let mut hasher = self.seeded.clone();
            Digest::update(&mut hasher, self.counter.to_be_bytes());
            self.block = hasher.finalize();
            self.counter += 1;
            self.pos = 0;
        }
        let byte = self.block[self.pos];
        self.pos += 1;
        byte
    }
}

impl<const ROBUST: bool> Sha2Hasher<ROBUST> {
    /// Whether H and T_l use SHA-512.
    fn uses_sha512(&self) -> bool {
        self.n > 16
    }

    /// SHA-X(BlockPad(PK.seed) || ADRSc || M), truncated to n bytes, where `seeded` is the
    /// block-padded state of SHA-X and `mask_seed` a fresh state of the same function.
    fn thash<D: Digest + Update + Clone>(
        &self,
        output: &mut [u8],
        parts: &[&[u8]],
        adrs: &Adrs,
        seeded: &D,
        mask_seed: D,
    ) {
        let adrs_c = adrs.compressed();
        let mut hasher = seeded.clone();
        Digest::update(&mut hasher, adrs_c);

        if ROBUST {
            let mut mask_seed = mask_seed;
            Digest::update(&mut mask_seed, &self.pub_seed[..self.n]);
            Digest::update(&mut mask_seed, adrs_c);
            update_masked(&mut hasher, parts, &mut Mgf1::new(mask_seed));
        } else {
            for part in parts {
                Digest::update(&mut hasher, part);
            }
        }
        output[..self.n].copy_from_slice(&hasher.finalize()[..self.n]);
    }

    fn thash_256(&self, output: &mut [u8], parts: &[&[u8]], adrs: &Adrs) {
        self.thash(output, parts, adrs, &self.sha256, Sha256::new());
    }

    fn thash_512(&self, output: &mut [u8], parts: &[&[u8]], adrs: &Adrs) {
        self.thash(output, parts, adrs, &self.sha512, Sha512::new());
    }
}

impl<const ROBUST: bool> TweakableHash for Sha2Hasher<ROBUST> {
    const ROBUST: bool = ROBUST;

    fn new(pub_seed: &[u8]) -> Self {
        assert_seed_len(pub_seed);
        let n = pub_seed.len();

        // block-pad and initialize sha256 and sha512 with pub_seed
        let mut block256 = [0_u8; SPX_SHA256_BLOCK_BYTES];
        block256[..n].copy_from_slice(pub_seed);
        let mut sha256 = Sha256::new();
        Digest::update(&mut sha256, block256);

        let mut block512 = [0_u8; SPX_SHA512_BLOCK_BYTES];
        block512[..n].copy_from_slice(pub_seed);
        let mut sha512 = Sha512::new();
        Digest::update(&mut sha512, block512);

        let mut seed = [0u8; MAX_N];
        seed[..n].copy_from_slice(pub_seed);

        Self {
            n,
            pub_seed: seed,
            sha256,
            sha512,
        }
    }

    fn n(&self) -> usize {
        self.n
    }

    /// F(PK.seed, ADRS, M1) = SHA-256(BlockPad(PK.seed) || ADRSc || M1)
    fn spx_f(&self, output: &mut [u8], input: &[u8], adrs: &Adrs) {
        self.thash_256(output, &[&input[..self.n]], adrs);
    }

    /// H(PK.seed, ADRS, M1 || M2) = SHA-X(BlockPad(PK.seed) || ADRSc || M1 || M2)
    fn spx_h(&self, output: &mut [u8], left: &[u8], right: &[u8], adrs: &Adrs) {
        let parts: [&[u8]; 2] = [&left[..self.n], &right[..self.n]];
        if self.uses_sha512() {
            self.thash_512(output, &parts, adrs);
        } else {
            self.thash_256(output, &parts, adrs);
        }
    }

    /// T_l(PK.seed, ADRS, M) = SHA-X(BlockPad(PK.seed) || ADRSc || M)
    fn spx_t_l(&self, output: &mut [u8], input: &[u8], adrs: &Adrs) {
        if self.uses_sha512() {
            self.thash_512(output, &[input], adrs);
        } else {
            self.thash_256(output, &[input], adrs);
        }
    }

    /// PRF(PK.seed, SK.seed, ADRS) = SHA-256(BlockPad(PK.seed) || ADRSc || SK.seed)
    fn spx_prf(&self, output: &mut [u8], sk_seed: &[u8], adrs: &Adrs) {
        let mut hasher = self.sha256.clone();
        Digest::update(&mut hasher, adrs.compressed());
        Digest::update(&mut hasher, &sk_seed[..self.n]);
        let mut digest = hasher.finalize();
        output[..self.n].copy_from_slice(&digest[..self.n]);
        digest.as_mut_slice().zeroize();
    }
}
