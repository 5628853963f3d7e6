//! # Piece-Table Subword Model
//!
//! A greedy longest-match [`SubwordModel`] over an ordered piece list.
//! Useful for small fixed vocabularies, and as a stand-in for a real
//! subword model.

use crate::{
    errors::{VocabError, VocabResult},
    types::{TokenType, VocabHashMap},
    vocab::subword_model::SubwordModel,
};

/// The word boundary marker used in piece text.
pub const WORD_BOUNDARY: char = '\u{2581}';

/// The rendering of the unk piece.
pub const UNK_RENDERING: &str = " \u{2047} ";

/// A greedy longest-match piece-table model.
///
/// Spaces are mapped to [`WORD_BOUNDARY`] before matching; control pieces
/// (pad, eos, unk) are never matched from text.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceTableModel<T: TokenType> {
    pieces: Vec<String>,
    piece_ids: VocabHashMap<String, T>,
    max_piece_chars: usize,
    eos_id: Option<T>,
    unk_id: Option<T>,
}

impl<T: TokenType> PieceTableModel<T> {
    /// Build a model from an ordered piece list.
    ///
    /// ## Arguments
    /// * `pieces` - piece texts; piece `i` has id `i`.
    /// * `eos_id` - the id of the eos control piece, if any.
    /// * `unk_id` - the id of the unk control piece, if any.
    pub fn new<S: AsRef<str>>(
        pieces: &[S],
        eos_id: Option<T>,
        unk_id: Option<T>,
    ) -> VocabResult<Self> {
        let mut piece_ids: VocabHashMap<String, T> = Default::default();
        for (idx, piece) in pieces.iter().enumerate() {
            let id = T::from_usize(idx).ok_or(VocabError::VocabSizeOverflow { size: pieces.len() })?;
            piece_ids.insert(piece.as_ref().to_string(), id);
        }
        let max_piece_chars = pieces
            .iter()
            .map(|p| p.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        Ok(Self {
            pieces: pieces.iter().map(|p| p.as_ref().to_string()).collect(),
            piece_ids,
            max_piece_chars,
            eos_id,
            unk_id,
        })
    }

    fn is_control(
        &self,
        id: T,
    ) -> bool {
        id == T::zero() || Some(id) == self.eos_id || Some(id) == self.unk_id
    }

    fn lookup_piece(
        &self,
        piece: &str,
    ) -> Option<T> {
        self.piece_ids
            .get(piece)
            .copied()
            .filter(|&id| !self.is_control(id))
    }
}

impl<T: TokenType> SubwordModel<T> for PieceTableModel<T> {
    fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    fn eos_id(&self) -> Option<T> {
        self.eos_id
    }

    fn unk_id(&self) -> Option<T> {
        self.unk_id
    }

    fn id_to_piece(
        &self,
        id: T,
    ) -> Option<&str> {
        self.pieces.get(id.to_usize()?).map(String::as_str)
    }

    fn piece_to_id(
        &self,
        piece: &str,
    ) -> Option<T> {
        self.piece_ids.get(piece).copied()
    }

    fn encode(
        &self,
        text: &str,
    ) -> VocabResult<Vec<T>> {
        let chars = text
            .chars()
            .map(|c| if c == ' ' { WORD_BOUNDARY } else { c })
            .collect::<Vec<char>>();

        let mut ids = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            let longest = self.max_piece_chars.min(chars.len() - pos);
            let found = (1..=longest).rev().find_map(|len| {
                let piece: String = chars[pos..pos + len].iter().collect();
                self.lookup_piece(&piece).map(|id| (id, len))
            });
            match (found, self.unk_id) {
                (Some((id, len)), _) => {
                    ids.push(id);
                    pos += len;
                }
                (None, Some(unk)) => {
                    ids.push(unk);
                    pos += 1;
                }
                (None, None) => {
                    return Err(VocabError::Encoding(format!(
                        "no piece for {:?}",
                        chars[pos]
                    )));
                }
            }
        }
        Ok(ids)
    }

    fn decode(
        &self,
        ids: &[T],
    ) -> String {
        let mut text = String::new();
        for &id in ids {
            if id == T::zero() || Some(id) == self.eos_id {
                continue;
            }
            match self.id_to_piece(id) {
                Some(piece) if Some(id) != self.unk_id => {
                    text.extend(piece.chars().map(|c| if c == WORD_BOUNDARY { ' ' } else { c }))
                }
                _ => text.push_str(UNK_RENDERING),
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::vocab::{SubwordVocab, Vocabulary};

    #[test]
    fn test_user_piece_table() {
        type T = u16;
        let pieces = ["<pad>", "</s>", "<unk>", "\u{2581}", "a", "b", "ab", "\u{2581}ab"];
        let model: PieceTableModel<T> = PieceTableModel::new(&pieces, Some(1), Some(2)).unwrap();

        assert_eq!(model.piece_count(), 8);
        assert_eq!(model.piece_to_id("ab"), Some(6));
        assert_eq!(model.encode("ab ab").unwrap(), vec![6, 7]);
        assert_eq!(model.encode("bab").unwrap(), vec![5, 6]);

        // control pieces are never matched from text.
        assert_eq!(model.encode("</s>").unwrap(), vec![2, 2, 2, 2]);

        let vocab = SubwordVocab::new(Arc::new(model), 2).unwrap();
        assert_eq!(vocab.vocab_size(), 10);
        assert_eq!(vocab.encode("ab<extra_id_1>").unwrap(), vec![6, 8]);
        assert_eq!(vocab.decode(&[9, 7, 1, 4]), "<extra_id_0> ab");
    }

    #[test]
    fn test_no_unk() {
        let model: PieceTableModel<u32> = PieceTableModel::new(&["<pad>", "a"], None, None).unwrap();
        assert_eq!(model.encode("aa").unwrap(), vec![1, 1]);
        assert!(model.encode("b").unwrap_err().is_encoding_error());

        // without an unk piece, unknown ids still render as the unk glyph.
        assert_eq!(model.decode(&[1, 7, 0]), format!("a{UNK_RENDERING}"));
    }
}
