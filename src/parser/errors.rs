use bitcoin_hashes::hex;
use std::error;
use std::fmt;
use std::io;

pub type OpResult<T> = Result<T, OpError>;

///
/// Error of parsing operations.
///
/// Structural parse failures always propagate as `OpError`;
/// unrecognized or malformed scripts never do (they are ordinary
/// chain data, represented in-band by `ScriptType`).
///
#[derive(Debug)]
pub struct OpError {
    pub kind: OpErrorKind,
    pub message: String,
}

impl OpError {
    pub fn new(kind: OpErrorKind) -> OpError {
        OpError {
            kind,
            message: String::new(),
        }
    }

    pub fn join_msg(mut self, msg: &str) -> OpError {
        self.message.push_str(msg);
        self
    }
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            OpErrorKind::TruncatedInput => write!(f, "TruncatedInput: {}", self.message),
            OpErrorKind::UnknownVariant => write!(f, "UnknownVariant: {}", self.message),
            OpErrorKind::HexError(ref e) => write!(f, "HexError: {} {}", e, self.message),
            OpErrorKind::IoError(ref e) => write!(f, "IoError: {} {}", e, self.message),
            OpErrorKind::RuntimeError => write!(f, "RuntimeError: {}", self.message),
        }
    }
}

impl error::Error for OpError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            OpErrorKind::IoError(ref e) => Some(e),
            OpErrorKind::HexError(ref e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum OpErrorKind {
    /// Buffer exhausted before a field could be fully read.
    /// Always fatal for the in-progress structure.
    TruncatedInput,
    /// Chain variant name not found in the factory registry.
    UnknownVariant,
    /// Hex convenience entry points received a non-hex string.
    HexError(hex::Error),
    /// Any other failure of an underlying reader or writer.
    IoError(io::Error),
    RuntimeError,
}

impl From<io::Error> for OpError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => OpError::new(OpErrorKind::TruncatedInput),
            _ => OpError::new(OpErrorKind::IoError(err)),
        }
    }
}

impl From<hex::Error> for OpError {
    fn from(err: hex::Error) -> Self {
        OpError::new(OpErrorKind::HexError(err))
    }
}

impl From<&str> for OpError {
    fn from(msg: &str) -> Self {
        OpError::new(OpErrorKind::RuntimeError).join_msg(msg)
    }
}
