use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid length: expected {0} bytes, found {1} bytes")]
    BadLength(usize, usize),
    #[error("Unknown address type tag: {0}")]
    UnknownAdrsType(u32),
    #[error("Leaf index {0} out of range for a subtree of height {1}")]
    LeafIndexOutOfRange(u32, usize),
    #[error("XMSS verification failed: reconstructed root does not match the public root")]
    VerificationFailed,
}

pub type Result<T> = core::result::Result<T, Error>;
