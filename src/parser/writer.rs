use crate::parser::errors::OpResult;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Cursor;

pub trait BlockchainWrite: std::io::Write {
    ///
    /// Write a wire compact-size integer, always choosing the minimal
    /// width encoding for `n`.
    ///
    fn write_compact_size(&mut self, n: u64) -> OpResult<()> {
        if n < 0xfd {
            WriteBytesExt::write_u8(self, n as u8)?;
        } else if n <= 0xffff {
            WriteBytesExt::write_u8(self, 0xfd)?;
            WriteBytesExt::write_u16::<LittleEndian>(self, n as u16)?;
        } else if n <= 0xffff_ffff {
            WriteBytesExt::write_u8(self, 0xfe)?;
            WriteBytesExt::write_u32::<LittleEndian>(self, n as u32)?;
        } else {
            WriteBytesExt::write_u8(self, 0xff)?;
            WriteBytesExt::write_u64::<LittleEndian>(self, n)?;
        }
        Ok(())
    }

    #[inline]
    fn write_u32(&mut self, n: u32) -> OpResult<()> {
        WriteBytesExt::write_u32::<LittleEndian>(self, n)?;
        Ok(())
    }

    #[inline]
    fn write_i32(&mut self, n: i32) -> OpResult<()> {
        WriteBytesExt::write_i32::<LittleEndian>(self, n)?;
        Ok(())
    }

    #[inline]
    fn write_i64(&mut self, n: i64) -> OpResult<()> {
        WriteBytesExt::write_i64::<LittleEndian>(self, n)?;
        Ok(())
    }

    #[inline]
    fn write_u256(&mut self, hash: &[u8; 32]) -> OpResult<()> {
        self.write_all(hash)?;
        Ok(())
    }

    #[inline]
    fn write_u8_vec(&mut self, bytes: &[u8]) -> OpResult<()> {
        self.write_all(bytes)?;
        Ok(())
    }

    ///
    /// Write a length-prefixed byte string, the inverse of
    /// `BlockchainRead::read_string`.
    ///
    #[inline]
    fn write_string(&mut self, bytes: &[u8]) -> OpResult<()> {
        self.write_compact_size(bytes.len() as u64)?;
        self.write_all(bytes)?;
        Ok(())
    }
}

impl BlockchainWrite for Vec<u8> {}
impl BlockchainWrite for Cursor<Vec<u8>> {}
