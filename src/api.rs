//!
//! Crate APIs, essential structs, functions, methods are all here!
//!
//! To quickly understand how to use this crate, have a look at the
//! documentation for `coin_codec::create_chain`!!.
//!
//! # Example
//!
//! ```rust
//! use coin_codec::{create_chain, ChainConfig};
//!
//! let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
//!
//! let tx = chain.parse_transaction("...hex...").unwrap();
//! for txout in &tx.output {
//!     println!("{}", chain.parse_txout_script(&txout.script_pubkey));
//! }
//! ```
//!

use crate::parser::errors::OpResult;
// re-exports
pub use crate::chain::bitcoin::Bitcoin;
pub use crate::chain::dogecoin::Dogecoin;
pub use crate::chain::litecoin::Litecoin;
pub use crate::chain::namecoin::Namecoin;
pub use crate::chain::testnet::Testnet;
pub use crate::chain::{create_chain, Chain, ChainConfig, ChainParams, NULL_HASH};
pub use crate::parser::errors::{OpError, OpErrorKind};
pub use crate::parser::proto::block_proto::{
    block_header_hash, Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut, HEADER_SIZE,
};
pub use crate::parser::reader::{BlockchainRead, HeaderView};
pub use crate::parser::script::{classify_script, tokenize_script, ScriptToken, ScriptType};
pub use crate::parser::writer::BlockchainWrite;
pub use bitcoin_hashes::hex::{FromHex, ToHex};

///
/// Extract the script type from a hex script public key
/// (base chain rules).
///
#[inline]
pub fn parse_script(script_pub_key: &str) -> OpResult<ScriptType> {
    let script = Vec::from_hex(script_pub_key)?;
    Ok(Bitcoin::new(ChainConfig::default()).parse_txout_script(&script))
}
