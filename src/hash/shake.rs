use crate::hash::{assert_seed_len, update_masked, MaskStream, TweakableHash};
use crate::wots_plus::adrs::Adrs;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// SHAKE256 rate in bytes.
const SHAKE256_RATE: usize = 136;

/// SHAKE instantiation with the simple construction.
pub type ShakeSimple = ShakeHasher<false>;

/// SHAKE instantiation with the robust (bitmasked) construction.
pub type ShakeRobust = ShakeHasher<true>;

/// SHAKE256 tweakable hashes over the full 32-byte address.
///
/// Every function is `SHAKE256(PK.seed || ADRS || M)` squeezed to n bytes.
#[derive(Clone, Debug)]
pub struct ShakeHasher<const ROBUST: bool> {
    n: usize,
    seeded: Shake256,
}

/// Squeezes the bitmask SHAKE256(PK.seed || ADRS) one rate-sized block at a time.
struct XofMask {
    reader: <Shake256 as ExtendableOutput>::Reader,
    block: [u8; SHAKE256_RATE],
    pos: usize,
}

impl XofMask {
    fn new(reader: <Shake256 as ExtendableOutput>::Reader) -> Self {
        Self {
            reader,
            block: [0u8; SHAKE256_RATE],
            pos: SHAKE256_RATE,
        }
    }
}

impl MaskStream for XofMask {
    fn next_byte(&mut self) -> u8 {
        if self.pos == SHAKE256_RATE {
            self.reader.read(&mut self.block);
            self.pos = 0;
        }
        let byte = self.block[self.pos];
        self.pos += 1;
        byte
    }
}

impl<const ROBUST: bool> ShakeHasher<ROBUST> {
    fn thash(&self, output: &mut [u8], parts: &[&[u8]], adrs: &Adrs) {
        let mut hasher = self.seeded.clone();
        hasher.update(adrs.as_ref());

        if ROBUST {
            let mut mask = self.seeded.clone();
            mask.update(adrs.as_ref());
            update_masked(&mut hasher, parts, &mut XofMask::new(mask.finalize_xof()));
        } else {
            for part in parts {
                hasher.update(part);
            }
        }

        let mut reader = hasher.finalize_xof();
        reader.read(output[..self.n].as_mut());
    }
}

impl<const ROBUST: bool> TweakableHash for ShakeHasher<ROBUST> {
    const ROBUST: bool = ROBUST;

    fn new(pub_seed: &[u8]) -> Self {
        assert_seed_len(pub_seed);
        let mut seeded = Shake256::default();
        seeded.update(pub_seed);
        Self {
            n: pub_seed.len(),
            seeded,
        }
    }

    fn n(&self) -> usize {
        self.n
    }

    /// F(PK.seed, ADRS, M1) = SHAKE256(PK.seed || ADRS || M1, 8n)
    fn spx_f(&self, output: &mut [u8], input: &[u8], adrs: &Adrs) {
        self.thash(output, &[&input[..self.n]], adrs);
    }

    /// H(PK.seed, ADRS, M1 || M2) = SHAKE256(PK.seed || ADRS || M1 || M2, 8n)
    fn spx_h(&self, output: &mut [u8], left: &[u8], right: &[u8], adrs: &Adrs) {
        self.thash(output, &[&left[..self.n], &right[..self.n]], adrs);
    }

    /// T_l(PK.seed, ADRS, M) = SHAKE256(PK.seed || ADRS || M, 8n)
    fn spx_t_l(&self, output: &mut [u8], input: &[u8], adrs: &Adrs) {
        self.thash(output, &[input], adrs);
    }

    /// PRF(PK.seed, SK.seed, ADRS) = SHAKE256(PK.seed || ADRS || SK.seed, 8n)
    fn spx_prf(&self, output: &mut [u8], sk_seed: &[u8], adrs: &Adrs) {
        let mut hasher = self.seeded.clone();
        hasher.update(adrs.as_ref());
        hasher.update(&sk_seed[..self.n]);
        let mut reader = hasher.finalize_xof();
        reader.read(output[..self.n].as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wots_plus::adrs::AdrsType;

    fn shake256(output: &mut [u8], parts: &[&[u8]]) {
        let mut hasher = Shake256::default();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize_xof().read(output);
    }

    fn adrs() -> Adrs {
        let mut adrs = Adrs::from(AdrsType::WotsHash);
        adrs.set_layer_addr(3);
        adrs.set_tree_addr(0x0102_0304_0506);
        adrs.set_keypair_addr(7);
        adrs.set_chain_addr(8);
        adrs.set_hash_addr(9);
        adrs
    }

    #[test]
    fn test_h_matches_plain_shake256() {
        let pub_seed = [0xa1u8; 32];
        let left = [0x01u8; 32];
        let right = [0x02u8; 32];

        let mut out = [0u8; 32];
        ShakeSimple::new(&pub_seed).spx_h(&mut out, &left, &right, &adrs());

        let mut expected = [0u8; 32];
        shake256(
            &mut expected,
            &[&pub_seed, adrs().as_ref(), &left, &right],
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_robust_t_l_masks_input_across_blocks() {
        // 3 * 67 * 16 bytes of input spans several SHAKE256 output blocks of mask
        let pub_seed = [0x3cu8; 16];
        let input: Vec<u8> = (0..3 * 67 * 16).map(|i| i as u8).collect();

        let mut out = [0u8; 16];
        ShakeRobust::new(&pub_seed).spx_t_l(&mut out, &input, &adrs());

        let mut mask = vec![0u8; input.len()];
        shake256(&mut mask, &[&pub_seed, adrs().as_ref()]);
        let masked: Vec<u8> = input.iter().zip(mask.iter()).map(|(m, k)| m ^ k).collect();

        let mut expected = [0u8; 16];
        ShakeSimple::new(&pub_seed).spx_t_l(&mut expected, &masked, &adrs());
        assert_eq!(out, expected);
    }

    #[test]
    fn test_f_inplace_matches_f() {
        let pub_seed = [0x77u8; 24];
        let input = [0x10u8; 24];
        let hasher = ShakeRobust::new(&pub_seed);

        let mut out = [0u8; 24];
        hasher.spx_f(&mut out, &input, &adrs());

        let mut inout = input;
        hasher.spx_f_inplace(&mut inout, &adrs());
        assert_eq!(out, inout);
    }

    #[test]
    fn test_prf_matches_plain_shake256() {
        let pub_seed = [0x42u8; 16];
        let sk_seed = [0x24u8; 16];

        let mut out = [0u8; 16];
        ShakeRobust::new(&pub_seed).spx_prf(&mut out, &sk_seed, &adrs());

        let mut expected = [0u8; 16];
        shake256(&mut expected, &[&pub_seed, adrs().as_ref(), &sk_seed]);
        assert_eq!(out, expected);
    }

    #[test]
    #[should_panic]
    fn test_oversized_seed_panics() {
        let _ = ShakeSimple::new(&[0u8; 33]);
    }
}
