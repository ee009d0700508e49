use crate::parser::errors::{OpError, OpErrorKind, OpResult};
use crate::parser::reader::BlockchainRead;
use crate::parser::writer::BlockchainWrite;
use bitcoin_hashes::{sha256d, Hash};
use serde::{Deserialize, Serialize};

/// Serialized size of a block header. The header hash is always
/// computed over exactly this many bytes.
pub const HEADER_SIZE: usize = 80;

///
/// A block header as serialized on the wire: 80 bytes, all fields
/// little-endian.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_blockhash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

///
/// A block: header followed by a compact-size transaction count and
/// the transactions themselves.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Block {
    pub header: BlockHeader,
    pub txdata: Vec<Transaction>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Transaction {
    pub version: i32,
    /// List of inputs
    pub input: Vec<TxIn>,
    /// List of outputs
    pub output: Vec<TxOut>,
    pub lock_time: u32,
}

///
/// Reference to the output being spent by an input.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct OutPoint {
    pub txid: [u8; 32],
    pub vout: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct TxOut {
    /// in the smallest currency unit
    pub value: i64,
    pub script_pubkey: Vec<u8>,
}

impl BlockHeader {
    pub fn parse(ds: &mut dyn BlockchainRead) -> OpResult<BlockHeader> {
        Ok(BlockHeader {
            version: ds.read_i32()?,
            prev_blockhash: ds.read_u256()?,
            merkle_root: ds.read_u256()?,
            time: ds.read_u32()?,
            bits: ds.read_u32()?,
            nonce: ds.read_u32()?,
        })
    }

    pub fn serialize(&self, ds: &mut dyn BlockchainWrite) -> OpResult<()> {
        ds.write_i32(self.version)?;
        ds.write_u256(&self.prev_blockhash)?;
        ds.write_u256(&self.merkle_root)?;
        ds.write_u32(self.time)?;
        ds.write_u32(self.bits)?;
        ds.write_u32(self.nonce)
    }

    ///
    /// Hash of this header, computed over its 80-byte serialization.
    ///
    pub fn block_hash(&self) -> OpResult<[u8; 32]> {
        let mut bytes: Vec<u8> = Vec::with_capacity(HEADER_SIZE);
        self.serialize(&mut bytes)?;
        block_header_hash(&bytes)
    }
}

impl Transaction {
    pub fn parse(ds: &mut dyn BlockchainRead) -> OpResult<Transaction> {
        let version = ds.read_i32()?;
        let n_input = ds.read_compact_size()?;
        let mut input = Vec::new();
        for _ in 0..n_input {
            input.push(TxIn::parse(ds)?);
        }
        let n_output = ds.read_compact_size()?;
        let mut output = Vec::new();
        for _ in 0..n_output {
            output.push(TxOut::parse(ds)?);
        }
        Ok(Transaction {
            version,
            input,
            output,
            lock_time: ds.read_u32()?,
        })
    }

    pub fn serialize(&self, ds: &mut dyn BlockchainWrite) -> OpResult<()> {
        ds.write_i32(self.version)?;
        ds.write_compact_size(self.input.len() as u64)?;
        for txin in &self.input {
            txin.serialize(ds)?;
        }
        ds.write_compact_size(self.output.len() as u64)?;
        for txout in &self.output {
            txout.serialize(ds)?;
        }
        ds.write_u32(self.lock_time)
    }
}

impl TxIn {
    pub fn parse(ds: &mut dyn BlockchainRead) -> OpResult<TxIn> {
        Ok(TxIn {
            previous_output: OutPoint {
                txid: ds.read_u256()?,
                vout: ds.read_u32()?,
            },
            script_sig: ds.read_string()?,
            sequence: ds.read_u32()?,
        })
    }

    pub fn serialize(&self, ds: &mut dyn BlockchainWrite) -> OpResult<()> {
        ds.write_u256(&self.previous_output.txid)?;
        ds.write_u32(self.previous_output.vout)?;
        ds.write_string(&self.script_sig)?;
        ds.write_u32(self.sequence)
    }
}

impl TxOut {
    pub fn parse(ds: &mut dyn BlockchainRead) -> OpResult<TxOut> {
        Ok(TxOut {
            value: ds.read_i64()?,
            script_pubkey: ds.read_string()?,
        })
    }

    pub fn serialize(&self, ds: &mut dyn BlockchainWrite) -> OpResult<()> {
        ds.write_i64(self.value)?;
        ds.write_string(&self.script_pubkey)
    }
}

///
/// The domain hash of a serialized block header: double-SHA256 over
/// exactly the first 80 bytes of `header`.
///
pub fn block_header_hash(header: &[u8]) -> OpResult<[u8; 32]> {
    if header.len() < HEADER_SIZE {
        return Err(OpError::new(OpErrorKind::TruncatedInput)
            .join_msg("block header shorter than 80 bytes"));
    }
    Ok(sha256d::Hash::hash(&header[..HEADER_SIZE]).into_inner())
}
