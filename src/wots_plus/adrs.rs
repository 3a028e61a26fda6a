use crate::error::Error;
use crate::sphincs_plus::adrs_offsets::{
    SPX_ADDR_BYTES, SPX_OFFSET_CHAIN_ADDR, SPX_OFFSET_HASH_ADDR, SPX_OFFSET_KP_ADDR,
    SPX_OFFSET_LAYER, SPX_OFFSET_TAIL, SPX_OFFSET_TREE, SPX_OFFSET_TREE_HGT,
    SPX_OFFSET_TREE_INDEX, SPX_OFFSET_TREE_LOW, SPX_OFFSET_TYPE, SPX_SHA256_ADDR_BYTES,
};
use crate::utils::{get_u32_at, get_u64_at, set_u32_at, set_u64_at};

/// All 7 types of ADRS defined for SPHINCS+.
/// The 4-byte corresponding value is set as the `type` in an ADRS.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum AdrsType {
    /// 0, used for hashing through a WOTS+ chain.
    WotsHash = 0,
    /// 1, used for compression of the WOTS+ public key.
    WotsPk = 1,
    /// 2, used for the inner nodes of the XMSS Merkle tree.
    Tree = 2,
    /// 3, used for the inner nodes of a FORS tree.
    ForsTree = 3,
    /// 4, used for compression of the FORS roots.
    ForsRoots = 4,
    /// 5, used for WOTS+ secret key generation (start of each chain).
    WotsPrf = 5,
    /// 6, used for FORS secret key generation.
    ForsPrf = 6,
}

impl TryFrom<u32> for AdrsType {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            0 => Ok(AdrsType::WotsHash),
            1 => Ok(AdrsType::WotsPk),
            2 => Ok(AdrsType::Tree),
            3 => Ok(AdrsType::ForsTree),
            4 => Ok(AdrsType::ForsRoots),
            5 => Ok(AdrsType::WotsPrf),
            6 => Ok(AdrsType::ForsPrf),
            other => Err(Error::UnknownAdrsType(other)),
        }
    }
}

/// The address `Adrs` is a 32-byte value following the structure described in the
/// [SPHINCS+ v.3.1 submission](https://sphincs.org/data/sphincs+-r3.1-specification.pdf).
///
/// All views share the same prefix:
/// * `layer address`: 4 bytes, the hypertree layer of the subtree.
/// * `tree address`:  12 bytes, the index of the subtree within its layer.
/// * `type`:          4 bytes, set by [`AdrsType`].
///
/// The remaining 12 bytes depend on the type:
/// * [`AdrsType::WotsHash`], [`AdrsType::WotsPrf`]: key pair, chain and hash address.
/// * [`AdrsType::WotsPk`], [`AdrsType::ForsRoots`]: key pair address, then zeros.
/// * [`AdrsType::Tree`]: zero, tree height, tree index.
/// * [`AdrsType::ForsTree`], [`AdrsType::ForsPrf`]: key pair, tree height, tree index.
///
/// `Adrs` is `Copy`: every hash call works on its own copy, so a setter never reaches an
/// address owned by a caller.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Adrs([u8; SPX_ADDR_BYTES]);

impl AsRef<[u8]> for Adrs {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<AdrsType> for Adrs {
    /// Returns a zero address with the given type.
    fn from(adrs_type: AdrsType) -> Self {
        let mut adrs = Self::new();
        adrs.set_type(adrs_type);
        adrs
    }
}

impl From<[u8; SPX_ADDR_BYTES]> for Adrs {
    fn from(bytes: [u8; SPX_ADDR_BYTES]) -> Self {
        Self(bytes)
    }
}

impl Adrs {
    /// The all-zero address.
    pub const fn new() -> Self {
        Self([0u8; SPX_ADDR_BYTES])
    }

    pub const fn from_bytes(bytes: [u8; SPX_ADDR_BYTES]) -> Self {
        Self(bytes)
    }

    /// The stable 32-byte big-endian serialization.
    pub const fn as_bytes(&self) -> &[u8; SPX_ADDR_BYTES] {
        &self.0
    }

    /// The 22-byte compressed address hashed by the SHA2 variant.
    pub fn compressed(&self) -> [u8; SPX_SHA256_ADDR_BYTES] {
        let mut out = [0u8; SPX_SHA256_ADDR_BYTES];
        out[0] = self.0[SPX_OFFSET_LAYER + 3];
        out[1..9].copy_from_slice(&self.0[SPX_OFFSET_TREE_LOW..SPX_OFFSET_TYPE]);
        out[9] = self.0[SPX_OFFSET_TYPE + 3];
        out[10..].copy_from_slice(&self.0[SPX_OFFSET_TAIL..]);
        out
    }

    /// Returns a fresh address carrying only the layer and tree fields of `self`. This is used
    /// when we're doing multiple types of hashes within the same Merkle tree.
    pub fn subtree(&self) -> Self {
        let mut adrs = Self::new();
        adrs.0[..SPX_OFFSET_TYPE].copy_from_slice(&self.0[..SPX_OFFSET_TYPE]);
        adrs
    }

    /// Specify which level of the hypertree (the "layer") we're working on.
    pub fn set_layer_addr(&mut self, layer: u32) {
        set_u32_at(self.0.as_mut(), layer, SPX_OFFSET_LAYER);
    }

    pub fn layer_addr(&self) -> u32 {
        get_u32_at(&self.0, SPX_OFFSET_LAYER)
    }

    /// Specify which Merkle tree within the layer (the "tree address") we're working on.
    /// The upper 4 bytes of the 12-byte field stay zero.
    pub fn set_tree_addr(&mut self, tree: u64) {
        set_u32_at(self.0.as_mut(), 0, SPX_OFFSET_TREE);
        set_u64_at(self.0.as_mut(), tree, SPX_OFFSET_TREE_LOW);
    }

    pub fn tree_addr(&self) -> u64 {
        get_u64_at(&self.0, SPX_OFFSET_TREE_LOW)
    }

    /// Specify what hash will be computed with this address, and clear the type-specific
    /// tail.
    pub fn set_type(&mut self, adrs_type: AdrsType) {
        set_u32_at(self.0.as_mut(), adrs_type as u32, SPX_OFFSET_TYPE);
        self.0[SPX_OFFSET_TAIL..].fill(0);
    }

    /// The raw type word. Use `AdrsType::try_from` to interpret it.
    pub fn type_word(&self) -> u32 {
        get_u32_at(&self.0, SPX_OFFSET_TYPE)
    }

    pub fn adrs_type(&self) -> Result<AdrsType, Error> {
        AdrsType::try_from(self.type_word())
    }

    /// Specify which Merkle leaf we're working on; that is, which OTS keypair
    /// we're talking about.
    pub fn set_keypair_addr(&mut self, keypair: u32) {
        set_u32_at(self.0.as_mut(), keypair, SPX_OFFSET_KP_ADDR);
    }

    pub fn keypair_addr(&self) -> u32 {
        get_u32_at(&self.0, SPX_OFFSET_KP_ADDR)
    }

    /// Specify which chain within the OTS we're working with (the chain address).
    pub fn set_chain_addr(&mut self, chain: u32) {
        set_u32_at(self.0.as_mut(), chain, SPX_OFFSET_CHAIN_ADDR);
    }

    pub fn chain_addr(&self) -> u32 {
        get_u32_at(&self.0, SPX_OFFSET_CHAIN_ADDR)
    }

    /// Specify where in the chain we are (the hash address).
    pub fn set_hash_addr(&mut self, hash: u32) {
        set_u32_at(self.0.as_mut(), hash, SPX_OFFSET_HASH_ADDR);
    }

    pub fn hash_addr(&self) -> u32 {
        get_u32_at(&self.0, SPX_OFFSET_HASH_ADDR)
    }

    /// Specify the height of the node in the Merkle/FORS tree we are in
    /// (the tree height).
    pub fn set_tree_height(&mut self, tree_height: u32) {
        set_u32_at(self.0.as_mut(), tree_height, SPX_OFFSET_TREE_HGT);
    }

    pub fn tree_height(&self) -> u32 {
        get_u32_at(&self.0, SPX_OFFSET_TREE_HGT)
    }

    /// Specify the distance from the left edge of the node in the Merkle/FORS tree
    /// (the tree index).
    pub fn set_tree_index(&mut self, tree_index: u32) {
        set_u32_at(self.0.as_mut(), tree_index, SPX_OFFSET_TREE_INDEX);
    }

    pub fn tree_index(&self) -> u32 {
        get_u32_at(&self.0, SPX_OFFSET_TREE_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_big_endian() {
        let mut adrs = Adrs::new();
        adrs.set_layer_addr(0x0102_0304);
        adrs.set_tree_addr(0x1112_1314_1516_1718);
        adrs.set_type(AdrsType::WotsHash);
        adrs.set_keypair_addr(0x2122_2324);
        adrs.set_chain_addr(0x3132_3334);
        adrs.set_hash_addr(0x4142_4344);

        let expected: [u8; 32] = [
            0x01, 0x02, 0x03, 0x04, // layer
            0x00, 0x00, 0x00, 0x00, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, // tree
            0x00, 0x00, 0x00, 0x00, // type
            0x21, 0x22, 0x23, 0x24, // keypair
            0x31, 0x32, 0x33, 0x34, // chain
            0x41, 0x42, 0x43, 0x44, // hash
        ];
        assert_eq!(adrs.as_bytes(), &expected);
        assert_eq!(adrs.layer_addr(), 0x0102_0304);
        assert_eq!(adrs.tree_addr(), 0x1112_1314_1516_1718);
        assert_eq!(adrs.keypair_addr(), 0x2122_2324);
        assert_eq!(adrs.chain_addr(), 0x3132_3334);
        assert_eq!(adrs.hash_addr(), 0x4142_4344);
    }

    #[test]
    fn test_set_type_clears_tail() {
        let mut adrs = Adrs::new();
        adrs.set_layer_addr(3);
        adrs.set_tree_addr(7);
        adrs.set_type(AdrsType::WotsHash);
        adrs.set_keypair_addr(5);
        adrs.set_chain_addr(9);
        adrs.set_hash_addr(11);

        adrs.set_type(AdrsType::Tree);
        assert_eq!(&adrs.as_bytes()[20..], &[0u8; 12]);
        assert_eq!(adrs.layer_addr(), 3);
        assert_eq!(adrs.tree_addr(), 7);
        assert_eq!(adrs.adrs_type(), Ok(AdrsType::Tree));

        adrs.set_tree_height(2);
        adrs.set_tree_index(6);
        assert_eq!(adrs.tree_height(), 2);
        assert_eq!(adrs.tree_index(), 6);
        assert_eq!(adrs.keypair_addr(), 0);
    }

    #[test]
    fn test_copies_do_not_alias() {
        let mut original = Adrs::from(AdrsType::WotsHash);
        original.set_keypair_addr(4);

        let mut copy = original;
        copy.set_type(AdrsType::WotsPrf);
        copy.set_chain_addr(1);
        copy.set_hash_addr(2);

        assert_eq!(original.adrs_type(), Ok(AdrsType::WotsHash));
        assert_eq!(original.keypair_addr(), 4);
        assert_eq!(original.chain_addr(), 0);
        assert_eq!(original.hash_addr(), 0);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_compressed_layout() {
        let mut adrs = Adrs::new();
        adrs.set_layer_addr(0x21);
        adrs.set_tree_addr(0x0102_0304_0506_0708);
        adrs.set_type(AdrsType::Tree);
        adrs.set_tree_height(0x0a);
        adrs.set_tree_index(0x0b0c);

        let c = adrs.compressed();
        assert_eq!(c[0], 0x21);
        assert_eq!(&c[1..9], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(c[9], AdrsType::Tree as u8);
        assert_eq!(&c[10..14], &[0, 0, 0, 0]);
        assert_eq!(&c[14..18], &[0, 0, 0, 0x0a]);
        assert_eq!(&c[18..22], &[0, 0, 0x0b, 0x0c]);
    }

    #[test]
    fn test_subtree_keeps_prefix_only() {
        let mut adrs = Adrs::from(AdrsType::WotsPk);
        adrs.set_layer_addr(2);
        adrs.set_tree_addr(99);
        adrs.set_keypair_addr(17);

        let sub = adrs.subtree();
        assert_eq!(sub.layer_addr(), 2);
        assert_eq!(sub.tree_addr(), 99);
        assert_eq!(sub.type_word(), 0);
        assert_eq!(sub.keypair_addr(), 0);
    }

    #[test]
    fn test_unknown_type_word() {
        let mut bytes = [0u8; 32];
        bytes[19] = 9;
        let adrs = Adrs::from_bytes(bytes);
        assert_eq!(adrs.adrs_type(), Err(Error::UnknownAdrsType(9)));
    }
}
