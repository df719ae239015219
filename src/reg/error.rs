//! Error type for context register access and parsing

use std::num::ParseIntError;
use std::result;
use thiserror::Error;

/// Error type for context registers.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A context register was read before anything set it.
    ///
    /// An unset register is distinct from one set to zero, so reads of absent
    /// registers are always reported rather than defaulted.
    #[error("context register {0} has no value in this context")]
    MissingRegister(String),

    /// A context register holds a value the architecture does not define.
    #[error("context register {register} holds invalid mode {value:#x}")]
    InvalidMode { register: String, value: u64 },

    /// A textual context contained an empty `!`-separated entry.
    #[error("empty context entry")]
    EmptyEntry,

    /// A textual context entry named a register without giving it a value.
    #[error("context register {0} is missing a value")]
    MissingValue(String),

    /// A textual context entry's value is not a valid 64-bit integer.
    #[error("context register {register} has an invalid value")]
    InvalidValue {
        register: String,
        #[source]
        source: ParseIntError,
    },

    /// A textual context entry's value carried a sign.
    ///
    /// Values are unsigned, so they are never written with a sign.
    #[error("context register {0} has a signed value")]
    SignedValue(String),

    /// A textual context register name contained a backslash that does not
    /// escape a backslash or a bang.
    #[error("context register name {0} contains an invalid escape")]
    InvalidEscape(String),

    /// A textual context named the same register twice.
    #[error("context register {0} was specified more than once")]
    DuplicateRegister(String),
}

pub type Result<T> = result::Result<T, Error>;
