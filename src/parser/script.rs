use crate::parser::opcodes::*;
use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a public key hash or script hash extracted from a script.
pub const PUBKEY_HASH_LENGTH: usize = 20;

/// Upper bound on multisig keys recognised by the classifier; scripts
/// encoding more keys fall through to `NotRecognised`.
pub const MAX_MULTISIG_KEYS: usize = 3;

// Template to match a pubkey hash ("address transaction") output script.
// AnyPush matches any data push.
const ADDRESS_TEMPLATE: [Expect; 5] = [
    Expect::Op(OP_DUP),
    Expect::Op(OP_HASH160),
    Expect::AnyPush,
    Expect::Op(OP_EQUALVERIFY),
    Expect::Op(OP_CHECKSIG),
];

// Template to match a pubkey ("IP address transaction") output script.
const PUBKEY_TEMPLATE: [Expect; 2] = [Expect::AnyPush, Expect::Op(OP_CHECKSIG)];

// Template to match a BIP16 pay-to-script-hash output script.
const P2SH_TEMPLATE: [Expect; 3] = [
    Expect::Op(OP_HASH160),
    Expect::PushBytes(PUBKEY_HASH_LENGTH as u8),
    Expect::Op(OP_EQUAL),
];

// Template to match a script that can never be redeemed.
const BURN_TEMPLATE: [Expect; 1] = [Expect::Op(OP_RETURN)];

///
/// Different types of output scripts.
///
/// Unrecognised scripts keep their decoded tokens so a chain variant
/// can recognise coin-specific forms without re-tokenizing.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptType {
    Invalid { raw: Vec<u8> },
    Pay2PublicKey { pubkey: Vec<u8> },
    Pay2PublicKeyHash { pubkey_hash: [u8; PUBKEY_HASH_LENGTH] },
    Pay2ScriptHash { script_hash: [u8; PUBKEY_HASH_LENGTH] },
    Pay2MultiSig { m: u8, pubkeys: Vec<Vec<u8>> },
    OpReturn,
    NotRecognised { decoded: Vec<ScriptToken> },
}

///
/// One decoded script token: the opcode, plus the pushed data for
/// push opcodes. The push length is implicit in the opcode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptToken {
    pub opcode: u8,
    pub data: Option<Vec<u8>>,
}

impl ScriptToken {
    #[inline]
    pub fn is_push(&self) -> bool {
        self.opcode <= OP_PUSHDATA4
    }
}

///
/// Tokenizer failure: the push-length grammar ran past the end of the
/// script. Never propagated out of classification; the classifier
/// converts it to `ScriptType::Invalid`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedScript;

impl fmt::Display for MalformedScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "script push length exceeds script end")
    }
}

///
/// Decode a raw script into its token sequence.
///
/// Opcodes up to OP_PUSHDATA4 push data: 1-75 encode the length
/// inline, the three extended push opcodes carry a 1, 2 or 4 byte
/// little-endian length field. No semantic validation beyond the
/// push-length grammar is performed.
///
pub fn tokenize_script(script: &[u8]) -> Result<Vec<ScriptToken>, MalformedScript> {
    let mut decoded = Vec::new();
    let mut i = 0;
    while i < script.len() {
        let opcode = script[i];
        i += 1;
        let data = if opcode <= OP_PUSHDATA4 {
            let n_size = match opcode {
                OP_PUSHDATA1 => {
                    let b = *script.get(i).ok_or(MalformedScript)?;
                    i += 1;
                    b as usize
                }
                OP_PUSHDATA2 => {
                    if i + 2 > script.len() {
                        return Err(MalformedScript);
                    }
                    let n = LittleEndian::read_u16(&script[i..i + 2]) as usize;
                    i += 2;
                    n
                }
                OP_PUSHDATA4 => {
                    if i + 4 > script.len() {
                        return Err(MalformedScript);
                    }
                    let n = LittleEndian::read_u32(&script[i..i + 4]) as usize;
                    i += 4;
                    n
                }
                n => n as usize,
            };
            if i + n_size > script.len() {
                return Err(MalformedScript);
            }
            let d = script[i..i + n_size].to_vec();
            i += n_size;
            Some(d)
        } else {
            None
        };
        decoded.push(ScriptToken { opcode, data });
    }
    Ok(decoded)
}

///
/// Classify a raw output script.
///
/// Tokenizer failures are reported in-band as `ScriptType::Invalid`
/// carrying the raw script.
///
pub fn classify_script(script: &[u8]) -> ScriptType {
    match tokenize_script(script) {
        Ok(decoded) => classify_decoded_script(decoded),
        Err(MalformedScript) => ScriptType::Invalid {
            raw: script.to_vec(),
        },
    }
}

///
/// Classify an already-tokenized output script against the known
/// templates, cheapest first; multisig last since it needs a scan.
///
pub fn classify_decoded_script(decoded: Vec<ScriptToken>) -> ScriptType {
    if match_decoded(&decoded, &ADDRESS_TEMPLATE) {
        let pubkey_hash = decoded[2].data.as_ref().unwrap();
        if pubkey_hash.len() == PUBKEY_HASH_LENGTH {
            let mut hash = [0u8; PUBKEY_HASH_LENGTH];
            hash.copy_from_slice(pubkey_hash);
            return ScriptType::Pay2PublicKeyHash { pubkey_hash: hash };
        }
    } else if match_decoded(&decoded, &PUBKEY_TEMPLATE) {
        let pubkey = decoded[0].data.as_ref().unwrap().clone();
        return ScriptType::Pay2PublicKey { pubkey };
    } else if match_decoded(&decoded, &P2SH_TEMPLATE) {
        let script_hash = decoded[1].data.as_ref().unwrap();
        // a direct push of 20 bytes carries exactly 20 bytes
        assert_eq!(script_hash.len(), PUBKEY_HASH_LENGTH);
        let mut hash = [0u8; PUBKEY_HASH_LENGTH];
        hash.copy_from_slice(script_hash);
        return ScriptType::Pay2ScriptHash { script_hash: hash };
    } else if match_decoded(&decoded, &BURN_TEMPLATE) {
        return ScriptType::OpReturn;
    } else if decoded.len() >= 4 && decoded.last().unwrap().opcode == OP_CHECKMULTISIG {
        // cf. bitcoin/src/script.cpp:Solver
        let m_sig = decode_op_n(decoded[0].opcode);
        let n_sig = decode_op_n(decoded[decoded.len() - 2].opcode);
        if let (Some(m), Some(n)) = (m_sig, n_sig) {
            if m <= n
                && n <= MAX_MULTISIG_KEYS
                && decoded.len() == 3 + n
                && decoded[1..=n].iter().all(ScriptToken::is_push)
            {
                let pubkeys = decoded[1..=n]
                    .iter()
                    .map(|token| token.data.as_ref().unwrap().clone())
                    .collect();
                return ScriptType::Pay2MultiSig { m: m as u8, pubkeys };
            }
        }
    }

    // Namecoin overrides this to accept name operations.
    ScriptType::NotRecognised { decoded }
}

/// template slot
enum Expect {
    /// this exact opcode
    Op(u8),
    /// any data push
    AnyPush,
    /// a direct push of exactly this many bytes
    PushBytes(u8),
}

fn match_decoded(decoded: &[ScriptToken], template: &[Expect]) -> bool {
    if decoded.len() != template.len() {
        return false;
    }
    template.iter().zip(decoded).all(|(expect, token)| match *expect {
        Expect::Op(op) => token.opcode == op,
        Expect::AnyPush => token.is_push(),
        Expect::PushBytes(n) => token.opcode == n,
    })
}

///
/// Decode OP_1 through OP_16 to their numeric value.
///
#[inline]
fn decode_op_n(opcode: u8) -> Option<usize> {
    if (OP_1..=OP_16).contains(&opcode) {
        Some((opcode - OP_1 + 1) as usize)
    } else {
        None
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScriptType::Invalid { .. } => write!(f, "Invalid"),
            ScriptType::Pay2PublicKey { .. } => write!(f, "Pay2PublicKey"),
            ScriptType::Pay2PublicKeyHash { .. } => write!(f, "Pay2PublicKeyHash"),
            ScriptType::Pay2ScriptHash { .. } => write!(f, "Pay2ScriptHash"),
            ScriptType::Pay2MultiSig { .. } => write!(f, "Pay2MultiSig"),
            ScriptType::OpReturn => write!(f, "OpReturn"),
            ScriptType::NotRecognised { .. } => write!(f, "NotRecognised"),
        }
    }
}
