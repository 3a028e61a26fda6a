pub(crate) fn u32_to_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

pub(crate) fn u64_to_bytes(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

pub(crate) fn bytes_to_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    u32::from_be_bytes(buf)
}

pub(crate) fn bytes_to_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(buf)
}

pub(crate) fn set_u32_at(array: &mut [u8], value: u32, start_index: usize) {
    array[start_index..start_index + 4].copy_from_slice(&u32_to_bytes(value));
}

pub(crate) fn set_u64_at(array: &mut [u8], value: u64, start_index: usize) {
    array[start_index..start_index + 8].copy_from_slice(&u64_to_bytes(value));
}

pub(crate) fn get_u32_at(array: &[u8], start_index: usize) -> u32 {
    bytes_to_u32(&array[start_index..start_index + 4])
}

pub(crate) fn get_u64_at(array: &[u8], start_index: usize) -> u64 {
    bytes_to_u64(&array[start_index..start_index + 8])
}

macro_rules! params_bytes_struct {
    ($(#[$meta: meta])* $type: ident, $size: ident) => {
        $(#[$meta])*
        ///
        /// Conversions from bytes check the length against the parameter set. It also provides
        /// serialization via the `serialization` feature.
        #[derive(Clone, Debug)]
        pub struct $type<P: ParameterSet> {
            bytes: Vec<u8>,
            _params: PhantomData<P>,
        }

        impl<P: ParameterSet> $type<P> {
            /// Byte size of the encoding.
            pub const BYTES: usize = P::$size;

            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl<P: ParameterSet> AsRef<[u8]> for $type<P> {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl<P: ParameterSet> TryFrom<Vec<u8>> for $type<P> {
            type Error = Error;
            fn try_from(bytes: Vec<u8>) -> Result<Self> {
                if bytes.len() != P::$size {
                    Err(Error::BadLength(P::$size, bytes.len()))
                } else {
                    Ok(Self {
                        bytes,
                        _params: PhantomData,
                    })
                }
            }
        }

        impl<P: ParameterSet> TryFrom<&[u8]> for $type<P> {
            type Error = Error;
            fn try_from(data: &[u8]) -> Result<Self> {
                Self::try_from(data.to_vec())
            }
        }

        impl<P: ParameterSet> From<$type<P>> for Vec<u8> {
            fn from(value: $type<P>) -> Self {
                value.bytes
            }
        }

        impl<P: ParameterSet> PartialEq for $type<P> {
            /// By no means constant time comparison
            fn eq(&self, other: &Self) -> bool {
                self.bytes == other.bytes
            }
        }

        impl<P: ParameterSet> Eq for $type<P> {}

        #[cfg(feature = "serialization")]
        impl<P: ParameterSet> Serialize for $type<P> {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> core::result::Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&self.bytes)
            }
        }

        #[cfg(feature = "serialization")]
        impl<'de, P: ParameterSet> Deserialize<'de> for $type<P> {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> core::result::Result<Self, D::Error> {
                let bytes = Vec::<u8>::deserialize(deserializer)?;
                Self::try_from(bytes).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use params_bytes_struct;
