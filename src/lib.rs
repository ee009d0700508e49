//!
//! # Introduction
//!
//! This library is the wire codec and script classification layer of
//! a blockchain indexer.
//!
//! It parses and re-serializes block headers, blocks and transactions
//! of the Bitcoin-family binary protocol, byte for byte, and
//! classifies output scripts into semantic payment types.
//!
//! Coins sharing the base wire format are described by chain
//! variants: small parameter bundles (network magic, address
//! versions, decimals, feature flags) that configure the shared
//! codec, resolved by name through `create_chain`.
//!
//! ## Caveat
//!
//! Currently the classifier supports all standard pre-segwit script
//! types.
//!
//! # Example
//!
//! ```rust
//! use coin_codec::{create_chain, ChainConfig};
//!
//! let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
//!
//! // parse a transaction from hex and classify its outputs
//! let tx = chain.parse_transaction("...hex...").unwrap();
//! for txout in &tx.output {
//!     println!("{}", chain.parse_txout_script(&txout.script_pubkey));
//! }
//! ```
//!

pub(crate) mod api;
pub mod chain;
pub mod parser;

#[doc(inline)]
pub use crate::api::*;
