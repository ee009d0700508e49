use crate::parser::errors::{OpError, OpErrorKind, OpResult};
use crate::parser::proto::block_proto::HEADER_SIZE;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

pub trait BlockchainRead: std::io::Read {
    ///
    /// Read a wire compact-size integer.
    ///
    /// One tag byte; values below 0xfd are stored inline, otherwise the
    /// tag selects a 2, 4 or 8 byte little-endian payload.
    ///
    fn read_compact_size(&mut self) -> OpResult<u64> {
        let tag = self.read_u8()?;
        Ok(match tag {
            0xfd => ReadBytesExt::read_u16::<LittleEndian>(self)? as u64,
            0xfe => ReadBytesExt::read_u32::<LittleEndian>(self)? as u64,
            0xff => ReadBytesExt::read_u64::<LittleEndian>(self)?,
            n => n as u64,
        })
    }

    #[inline]
    fn read_u8(&mut self) -> OpResult<u8> {
        let mut slice = [0u8; 1];
        self.read_exact(&mut slice)?;
        Ok(slice[0])
    }

    #[inline]
    fn read_u256(&mut self) -> OpResult<[u8; 32]> {
        let mut arr = [0u8; 32];
        self.read_exact(&mut arr)?;
        Ok(arr)
    }

    #[inline]
    fn read_u16(&mut self) -> OpResult<u16> {
        let u = ReadBytesExt::read_u16::<LittleEndian>(self)?;
        Ok(u)
    }

    #[inline]
    fn read_u32(&mut self) -> OpResult<u32> {
        let u = ReadBytesExt::read_u32::<LittleEndian>(self)?;
        Ok(u)
    }

    #[inline]
    fn read_i32(&mut self) -> OpResult<i32> {
        let u = ReadBytesExt::read_i32::<LittleEndian>(self)?;
        Ok(u)
    }

    #[inline]
    fn read_u64(&mut self) -> OpResult<u64> {
        let u = ReadBytesExt::read_u64::<LittleEndian>(self)?;
        Ok(u)
    }

    #[inline]
    fn read_i64(&mut self) -> OpResult<i64> {
        let u = ReadBytesExt::read_i64::<LittleEndian>(self)?;
        Ok(u)
    }

    #[inline]
    fn read_u8_vec(&mut self, count: usize) -> OpResult<Vec<u8>> {
        let mut arr = vec![0u8; count];
        self.read_exact(&mut arr)?;
        Ok(arr)
    }

    ///
    /// Read a length-prefixed byte string (compact-size length followed
    /// by that many raw bytes). Used for scripts.
    ///
    #[inline]
    fn read_string(&mut self) -> OpResult<Vec<u8>> {
        let len = self.read_compact_size()?;
        self.read_u8_vec(len as usize)
    }
}

impl BlockchainRead for Cursor<&[u8]> {}
impl BlockchainRead for Cursor<Vec<u8>> {}

///
/// Read-only view of the 80-byte block header region at the current
/// cursor position, without copying.
///
/// Only byte-addressable buffers can produce this view; streaming
/// readers must first materialize bytes into a `Cursor`.
///
pub trait HeaderView {
    fn header_region(&self) -> OpResult<&[u8]>;
}

impl HeaderView for Cursor<&[u8]> {
    fn header_region(&self) -> OpResult<&[u8]> {
        header_region_of(self.get_ref(), self.position())
    }
}

impl HeaderView for Cursor<Vec<u8>> {
    fn header_region(&self) -> OpResult<&[u8]> {
        header_region_of(self.get_ref(), self.position())
    }
}

fn header_region_of(buf: &[u8], position: u64) -> OpResult<&[u8]> {
    let start = position as usize;
    if buf.len() < start + HEADER_SIZE {
        Err(OpError::new(OpErrorKind::TruncatedInput)
            .join_msg("less than 80 bytes left for block header"))
    } else {
        Ok(&buf[start..start + HEADER_SIZE])
    }
}
