//!
//! This module defines how to parse binary wire data to Block structs defined in proto,
//! and how to classify output scripts.
//!

/// define binary buffer readers
pub mod reader;

/// define binary buffer writers, the mirrors of the readers
pub mod writer;

/// script tokenizing, template matching and classification
pub mod script;

/// the fixed opcode constant table
pub mod opcodes;

/// wire formats of blockchain data representation
pub mod proto;

/// error handling
pub mod errors;
