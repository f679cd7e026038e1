//! Little-endian encoding of words and lengths.
use std::io::{Read, Write};
use std::mem::size_of;

use anyhow::Result;

use super::Serializable;

macro_rules! le_word {
    ($($int:ident),*) => {
        $(
            impl Serializable for $int {
                fn serialize_into<W: Write>(&self, mut writer: W) -> Result<usize> {
                    writer.write_all(&self.to_le_bytes())?;
                    Ok(size_of::<$int>())
                }

                fn deserialize_from<R: Read>(mut reader: R) -> Result<Self> {
                    let mut buf = [0; size_of::<$int>()];
                    reader.read_exact(&mut buf)?;
                    Ok($int::from_le_bytes(buf))
                }

                fn size_in_bytes(&self) -> usize {
                    size_of::<$int>()
                }

                fn size_of() -> Option<usize> {
                    Some(size_of::<$int>())
                }
            }
        )*
    };
}

le_word!(u8, u16, u32, u64, u128, usize);
