//! Here are the offsets of the fields in the 32-byte address structure.
//!
//! Every field is a big-endian word. The layer, tree and type words form the common prefix;
//! the three words after the type are interpreted according to the address type.
//!
//! The SHA2 variant hashes a 22-byte compressed address (ADRSc) instead, built from the low
//! byte of the layer, the low 8 bytes of the tree, the low byte of the type and the full
//! 12-byte tail.

/// Full address byte size.
pub const SPX_ADDR_BYTES: usize = 32;

/// Compressed (SHA2) address byte size.
pub const SPX_SHA256_ADDR_BYTES: usize = 22;

/// SHA-256 block byte size.
pub const SPX_SHA256_BLOCK_BYTES: usize = 64;

/// SHA-512 block byte size.
pub const SPX_SHA512_BLOCK_BYTES: usize = 128;

/// The 4-byte layer address.
pub const SPX_OFFSET_LAYER: usize = 0;

/// The start of the 12-byte tree address. Only the low 8 bytes are ever non-zero.
pub const SPX_OFFSET_TREE: usize = 4;

/// The low 8 bytes of the tree address.
pub const SPX_OFFSET_TREE_LOW: usize = 8;

/// The 4-byte type word.
pub const SPX_OFFSET_TYPE: usize = 16;

/// Start of the type-specific tail.
pub const SPX_OFFSET_TAIL: usize = 20;

/// Key pair address (which one-time key pair).
pub const SPX_OFFSET_KP_ADDR: usize = 20;

/// Chain address (which Winternitz chain).
pub const SPX_OFFSET_CHAIN_ADDR: usize = 24;

/// Hash address (where in the Winternitz chain).
pub const SPX_OFFSET_HASH_ADDR: usize = 28;

/// Height of the node in the FORS or Merkle tree. Shares its word with the chain address.
pub const SPX_OFFSET_TREE_HGT: usize = 24;

/// Index of the node in the FORS or Merkle tree. Shares its word with the hash address.
pub const SPX_OFFSET_TREE_INDEX: usize = 28;
