//! # Subword Model Interface
//!
//! The subword model (e.g. a loaded `SentencePiece` model) is an external
//! collaborator. [`SubwordVocab`](crate::vocab::SubwordVocab) only needs
//! the operations below.

use crate::{errors::VocabResult, types::TokenType};

/// An external subword model.
pub trait SubwordModel<T: TokenType>: Send + Sync {
    /// The number of pieces in the model; its native id space is
    /// ``[0, piece_count)``.
    fn piece_count(&self) -> usize;

    /// The model's end-of-sequence id, if any.
    fn eos_id(&self) -> Option<T>;

    /// The model's unknown id, if any.
    fn unk_id(&self) -> Option<T>;

    /// The piece text for an id.
    fn id_to_piece(
        &self,
        id: T,
    ) -> Option<&str>;

    /// The id for a piece text.
    fn piece_to_id(
        &self,
        piece: &str,
    ) -> Option<T>;

    /// Encode text into native ids.
    fn encode(
        &self,
        text: &str,
    ) -> VocabResult<Vec<T>>;

    /// Decode native ids into text.
    fn decode(
        &self,
        ids: &[T],
    ) -> String;

    /// Encode a batch of texts.
    ///
    /// Models with a vectorized encoder should override this.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> VocabResult<Vec<Vec<T>>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }

    /// Decode a batch of native id sequences.
    ///
    /// Models with a vectorized decoder should override this.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch.iter().map(|ids| self.decode(ids)).collect()
    }
}
