//!
//! ## Wire Block Types
//!
//! The structures in this module mirror the binary wire format
//! byte for byte: parse order and serialization order are identical,
//! so `serialize(parse(bytes)) == bytes` for any valid input.
//!
//! Chain variants parameterize *how* these structures are read
//! (see `crate::chain`); the structures themselves are shared.
//!

/// block headers, blocks, transactions, inputs and outputs
pub mod block_proto;
