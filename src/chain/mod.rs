//!
//! ## Chain Variants
//!
//! Every supported coin shares the wire codec and script grammar in
//! `crate::parser` but differs in a small set of network parameters
//! (magic bytes, address versions, decimals) and, occasionally, in
//! behavior toggles. A `Chain` bundles those parameters with the
//! codec pipeline; concrete variants override only what differs.
//!
//! Use `create_chain` to resolve a variant by name:
//!
//! ```rust
//! use coin_codec::{create_chain, ChainConfig};
//!
//! let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
//! let header = chain.parse_block_header("...hex...").unwrap();
//! ```
//!

/// the reference network and base parameter defaults
pub mod bitcoin;

/// merged-mined namespace coin with name-operation scripts
pub mod namecoin;

/// scrypt-family litecoin parameters
pub mod litecoin;

/// dogecoin parameters
pub mod dogecoin;

/// bitcoin test network, inherits from the Bitcoin policy
pub mod testnet;

use crate::parser::errors::{OpError, OpErrorKind, OpResult};
use crate::parser::proto::block_proto::{block_header_hash, Block, BlockHeader, Transaction};
use crate::parser::reader::{BlockchainRead, HeaderView};
use crate::parser::script;
use crate::parser::script::{ScriptToken, ScriptType};
use crate::parser::writer::BlockchainWrite;
use bitcoin_hashes::hex::FromHex;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// The all-zero 32-byte hash: coinbase previous-output marker and the
/// previous-header field of a genesis block.
pub const NULL_HASH: [u8; 32] = [0u8; 32];

///
/// Partial chain parameter set used both for variant defaults and for
/// caller overrides. Unset fields fall through the precedence chain
/// applied by `ChainParams::resolve`.
///
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq, Debug)]
pub struct ChainConfig {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code3: Option<String>,
    pub magic: Option<[u8; 4]>,
    pub address_version: Option<u8>,
    pub script_addr_vers: Option<u8>,
    pub decimals: Option<u32>,
}

///
/// Resolved chain parameters. Constructed once per variant and
/// immutable afterwards.
///
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ChainParams {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code3: Option<String>,
    pub magic: Option<[u8; 4]>,
    pub address_version: Option<u8>,
    pub script_addr_vers: Option<u8>,
    pub decimals: Option<u32>,
}

impl ChainParams {
    ///
    /// Merge parameters with precedence: explicit override, then the
    /// variant's own default, then the value inherited from `src`,
    /// else unset.
    ///
    pub fn resolve(
        overrides: ChainConfig,
        defaults: ChainConfig,
        src: Option<&ChainParams>,
    ) -> ChainParams {
        ChainParams {
            id: overrides
                .id
                .or(defaults.id)
                .or_else(|| src.and_then(|s| s.id)),
            name: overrides
                .name
                .or(defaults.name)
                .or_else(|| src.and_then(|s| s.name.clone())),
            code3: overrides
                .code3
                .or(defaults.code3)
                .or_else(|| src.and_then(|s| s.code3.clone())),
            magic: overrides
                .magic
                .or(defaults.magic)
                .or_else(|| src.and_then(|s| s.magic)),
            address_version: overrides
                .address_version
                .or(defaults.address_version)
                .or_else(|| src.and_then(|s| s.address_version)),
            script_addr_vers: overrides
                .script_addr_vers
                .or(defaults.script_addr_vers)
                .or_else(|| src.and_then(|s| s.script_addr_vers)),
            decimals: overrides
                .decimals
                .or(defaults.decimals)
                .or_else(|| src.and_then(|s| s.decimals)),
        }
    }
}

///
/// The basic coin policy: network parameters plus the codec pipeline.
///
/// All parsing, serialization and classification entry points are
/// default methods so a variant can override exactly the stage whose
/// wire behavior differs (header layout, script recognition) while
/// keeping the rest of the pipeline.
///
pub trait Chain: std::fmt::Debug {
    fn params(&self) -> &ChainParams;

    /// Capability query for variant-specific behavior toggles.
    fn has_feature(&self, _feature: &str) -> bool {
        false
    }

    fn coinbase_prevout_hash(&self) -> [u8; 32] {
        NULL_HASH
    }

    fn coinbase_prevout_n(&self) -> u32 {
        0xffff_ffff
    }

    fn genesis_hash_prev(&self) -> [u8; 32] {
        NULL_HASH
    }

    /// Default configuration file of the coin's reference daemon.
    fn datadir_conf_file_name(&self) -> &'static str {
        "bitcoin.conf"
    }

    /// Default RPC port of the coin's reference daemon.
    fn datadir_rpcport(&self) -> u16 {
        8332
    }

    fn ds_parse_block_header(&self, ds: &mut dyn BlockchainRead) -> OpResult<BlockHeader> {
        BlockHeader::parse(ds)
    }

    fn ds_parse_transaction(&self, ds: &mut dyn BlockchainRead) -> OpResult<Transaction> {
        Transaction::parse(ds)
    }

    fn ds_parse_block(&self, ds: &mut dyn BlockchainRead) -> OpResult<Block> {
        let header = self.ds_parse_block_header(ds)?;
        let n_transactions = ds.read_compact_size()?;
        let mut txdata = Vec::new();
        for _ in 0..n_transactions {
            txdata.push(self.ds_parse_transaction(ds)?);
        }
        Ok(Block { header, txdata })
    }

    fn ds_serialize_block_header(
        &self,
        ds: &mut dyn BlockchainWrite,
        header: &BlockHeader,
    ) -> OpResult<()> {
        header.serialize(ds)
    }

    fn ds_serialize_transaction(
        &self,
        ds: &mut dyn BlockchainWrite,
        tx: &Transaction,
    ) -> OpResult<()> {
        tx.serialize(ds)
    }

    fn ds_serialize_block(&self, ds: &mut dyn BlockchainWrite, block: &Block) -> OpResult<()> {
        self.ds_serialize_block_header(ds, &block.header)?;
        ds.write_compact_size(block.txdata.len() as u64)?;
        for tx in &block.txdata {
            self.ds_serialize_transaction(ds, tx)?;
        }
        Ok(())
    }

    fn serialize_block_header(&self, header: &BlockHeader) -> OpResult<Vec<u8>> {
        let mut bytes: Vec<u8> = Vec::new();
        self.ds_serialize_block_header(&mut bytes, header)?;
        Ok(bytes)
    }

    fn serialize_transaction(&self, tx: &Transaction) -> OpResult<Vec<u8>> {
        let mut bytes: Vec<u8> = Vec::new();
        self.ds_serialize_transaction(&mut bytes, tx)?;
        Ok(bytes)
    }

    fn serialize_block(&self, block: &Block) -> OpResult<Vec<u8>> {
        let mut bytes: Vec<u8> = Vec::new();
        self.ds_serialize_block(&mut bytes, block)?;
        Ok(bytes)
    }

    ///
    /// Hash of the block header starting at the current cursor
    /// position, computed over the underlying bytes without copying.
    /// The cursor is not advanced.
    ///
    fn ds_block_header_hash(&self, ds: &dyn HeaderView) -> OpResult<[u8; 32]> {
        block_header_hash(ds.header_region()?)
    }

    /// Parse a block header from its hex encoding.
    fn parse_block_header(&self, header: &str) -> OpResult<BlockHeader> {
        let bytes = Vec::from_hex(header)?;
        let mut ds = Cursor::new(bytes);
        self.ds_parse_block_header(&mut ds)
    }

    /// Parse a transaction from its hex encoding.
    fn parse_transaction(&self, binary_tx: &str) -> OpResult<Transaction> {
        let bytes = Vec::from_hex(binary_tx)?;
        let mut ds = Cursor::new(bytes);
        self.ds_parse_transaction(&mut ds)
    }

    ///
    /// A coinbase transaction has exactly one input, spending the
    /// chain's null previous output at the coinbase output index.
    ///
    fn is_coinbase_tx(&self, tx: &Transaction) -> bool {
        tx.input.len() == 1
            && tx.input[0].previous_output.txid == self.coinbase_prevout_hash()
            && tx.input[0].previous_output.vout == self.coinbase_prevout_n()
    }

    ///
    /// Classify a raw output script. Malformed scripts are reported
    /// in-band as `ScriptType::Invalid`, never as an error.
    ///
    fn parse_txout_script(&self, script_pub_key: &[u8]) -> ScriptType {
        match script::tokenize_script(script_pub_key) {
            Ok(decoded) => self.classify_decoded_script(decoded),
            Err(_) => ScriptType::Invalid {
                raw: script_pub_key.to_vec(),
            },
        }
    }

    ///
    /// Classification seam for variants with coin-specific script
    /// forms; the base behavior is the shared template table.
    ///
    fn classify_decoded_script(&self, decoded: Vec<ScriptToken>) -> ScriptType {
        script::classify_decoded_script(decoded)
    }
}

///
/// Resolve a registered chain variant by name and construct its
/// policy with `overrides` applied.
///
pub fn create_chain(policy: &str, overrides: ChainConfig) -> OpResult<Box<dyn Chain>> {
    let chain: Box<dyn Chain> = match policy {
        "Bitcoin" => Box::new(bitcoin::Bitcoin::new(overrides)),
        "Testnet" => Box::new(testnet::Testnet::new(overrides)),
        "Litecoin" => Box::new(litecoin::Litecoin::new(overrides)),
        "Dogecoin" => Box::new(dogecoin::Dogecoin::new(overrides)),
        "Namecoin" => Box::new(namecoin::Namecoin::new(overrides)),
        _ => {
            return Err(OpError::new(OpErrorKind::UnknownVariant).join_msg(policy));
        }
    };
    info!("resolved chain variant {}", policy);
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::proto::block_proto::{OutPoint, TxIn, TxOut};

    fn one_input_tx(txid: [u8; 32], vout: u32) -> Transaction {
        Transaction {
            version: 1,
            input: vec![TxIn {
                previous_output: OutPoint { txid, vout },
                script_sig: Vec::new(),
                sequence: 0xffff_ffff,
            }],
            output: vec![TxOut {
                value: 1,
                script_pubkey: Vec::new(),
            }],
            lock_time: 0,
        }
    }

    #[test]
    fn test_resolve_precedence() {
        let src = ChainParams {
            id: Some(1),
            name: Some(String::from("Source")),
            code3: Some(String::from("SRC")),
            magic: Some([1, 2, 3, 4]),
            address_version: Some(0x00),
            script_addr_vers: Some(0x05),
            decimals: Some(8),
        };
        let defaults = ChainConfig {
            name: Some(String::from("Default")),
            address_version: Some(0x6f),
            ..Default::default()
        };
        let overrides = ChainConfig {
            name: Some(String::from("Override")),
            ..Default::default()
        };
        let params = ChainParams::resolve(overrides, defaults, Some(&src));
        // explicit override beats the variant default
        assert_eq!(params.name.as_deref(), Some("Override"));
        // variant default beats the source value
        assert_eq!(params.address_version, Some(0x6f));
        // unset fields inherit from the source
        assert_eq!(params.decimals, Some(8));
        assert_eq!(params.magic, Some([1, 2, 3, 4]));
        // no override, no default, no source leaves the field unset
        let params = ChainParams::resolve(ChainConfig::default(), ChainConfig::default(), None);
        assert_eq!(params.code3, None);
    }

    #[test]
    fn test_is_coinbase_tx() {
        let chain = bitcoin::Bitcoin::new(ChainConfig::default());
        assert!(chain.is_coinbase_tx(&one_input_tx(NULL_HASH, 0xffff_ffff)));
        // wrong index
        assert!(!chain.is_coinbase_tx(&one_input_tx(NULL_HASH, 0)));
        // wrong hash
        assert!(!chain.is_coinbase_tx(&one_input_tx([1u8; 32], 0xffff_ffff)));
        // two inputs
        let mut tx = one_input_tx(NULL_HASH, 0xffff_ffff);
        tx.input.push(tx.input[0].clone());
        assert!(!chain.is_coinbase_tx(&tx));
    }

    #[test]
    fn test_create_chain_unknown_variant() {
        let err = create_chain("Betacoin", ChainConfig::default()).unwrap_err();
        assert!(matches!(err.kind, OpErrorKind::UnknownVariant));
    }

    #[test]
    fn test_create_chain_with_overrides() {
        let overrides = ChainConfig {
            decimals: Some(6),
            ..Default::default()
        };
        let chain = create_chain("Bitcoin", overrides).unwrap();
        assert_eq!(chain.params().decimals, Some(6));
        assert_eq!(chain.params().code3.as_deref(), Some("BTC"));
    }

    #[test]
    fn test_parse_block_header_rejects_bad_hex() {
        let chain = bitcoin::Bitcoin::new(ChainConfig::default());
        let err = chain.parse_block_header("not hex").unwrap_err();
        assert!(matches!(err.kind, OpErrorKind::HexError(_)));
    }
}
