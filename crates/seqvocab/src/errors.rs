//! # Error Types

/// The broad class of a [`VocabError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid reserved-id setup at construction; fatal.
    Configuration,

    /// The encoder (or the underlying model) rejected the input.
    Encoding,
}

/// Errors from seqvocab operations.
///
/// There is no decoding variant; decoding is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A reserved id lies outside of the base vocabulary.
    #[error("{role} id ({id}) is outside the base vocabulary [0, {base_vocab_size})")]
    ReservedIdOutOfRange {
        /// The role of the reserved id; "eos" or "unk".
        role: &'static str,

        /// The offending id.
        id: String,

        /// The size of the base vocabulary.
        base_vocab_size: usize,
    },

    /// A reserved id collides with the pad id.
    #[error("{role} id must not be the pad id (0)")]
    ReservedIdIsPad {
        /// The role of the reserved id; "eos" or "unk".
        role: &'static str,
    },

    /// An encoder produced (or was handed) a token outside of the vocabulary.
    #[error("token {token} out of range for vocab size {vocab_size}")]
    TokenOutOfRange {
        /// The offending token.
        token: String,

        /// The size of the vocabulary.
        vocab_size: usize,
    },

    /// The underlying model rejected the input.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

impl VocabError {
    /// The broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VocabError::VocabSizeOverflow { .. }
            | VocabError::ReservedIdOutOfRange { .. }
            | VocabError::ReservedIdIsPad { .. } => ErrorKind::Configuration,
            VocabError::TokenOutOfRange { .. }
            | VocabError::Encoding(_)
            | VocabError::External(_) => ErrorKind::Encoding,
        }
    }

    /// Is this a construction-time configuration error?
    pub fn is_configuration_error(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Is this an encoding error?
    pub fn is_encoding_error(&self) -> bool {
        self.kind() == ErrorKind::Encoding
    }
}

/// Result type for seqvocab operations.
pub type VocabResult<T> = core::result::Result<T, VocabError>;
