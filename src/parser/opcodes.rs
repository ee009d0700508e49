//!
//! The fixed script opcode constant table.
//!
//! Only the opcodes consumed by the tokenizer and the output-script
//! templates are listed; the full table is shared by every supported
//! chain variant and never differs between them.
//!

/// OP_0 - Push an empty byte string
pub const OP_0: u8 = 0x00;

/// OP_PUSHDATA1 - Push next byte as data length
pub const OP_PUSHDATA1: u8 = 0x4c;

/// OP_PUSHDATA2 - Push next 2 bytes (little-endian) as data length
pub const OP_PUSHDATA2: u8 = 0x4d;

/// OP_PUSHDATA4 - Push next 4 bytes (little-endian) as data length
pub const OP_PUSHDATA4: u8 = 0x4e;

/// OP_1 / OP_TRUE - Push the number 1
pub const OP_1: u8 = 0x51;

/// OP_16 - Push the number 16
pub const OP_16: u8 = 0x60;

/// OP_NOP - Does nothing
pub const OP_NOP: u8 = 0x61;

/// OP_RETURN - Marks the output as unspendable
pub const OP_RETURN: u8 = 0x6a;

/// OP_2DROP - Removes the top two stack items
pub const OP_2DROP: u8 = 0x6d;

/// OP_DROP - Removes the top stack item
pub const OP_DROP: u8 = 0x75;

/// OP_DUP - Duplicates the top stack item
pub const OP_DUP: u8 = 0x76;

/// OP_EQUAL - Returns 1 if the inputs are exactly equal, 0 otherwise
pub const OP_EQUAL: u8 = 0x87;

/// OP_EQUALVERIFY - Same as OP_EQUAL, but runs OP_VERIFY afterward
pub const OP_EQUALVERIFY: u8 = 0x88;

/// OP_HASH160 - The input is hashed with SHA-256 and then RIPEMD-160
pub const OP_HASH160: u8 = 0xa9;

/// OP_CHECKSIG - Verifies a signature against a public key
pub const OP_CHECKSIG: u8 = 0xac;

/// OP_CHECKMULTISIG - Verifies m-of-n signatures against n public keys
pub const OP_CHECKMULTISIG: u8 = 0xae;
