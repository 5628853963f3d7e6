//! # Vocab Testing Tools
//!
//! A small [`PieceTableModel`] standing in for a real subword model in tests.

use crate::{types::TokenType, vocab::piece_table_model::PieceTableModel};

/// Build the 26-piece test model.
///
/// ``0: <pad>``, ``1: </s>`` (eos), ``2: <unk>`` (unk);
/// encodes ``"this is a test"`` as ``[11, 12, 14, 13, 16]``.
pub fn build_test_piece_model<T: TokenType>() -> PieceTableModel<T> {
    let pieces = [
        "<pad>", "</s>", "<unk>", "\u{2581}", "t", "h", "i", "s", "a", "e", "\u{2581}t", "th",
        "is", "\u{2581}a", "\u{2581}is", "est", "\u{2581}test", "\u{2581}this", "v", "o", "n",
        "r", "d", "l", "c", ".",
    ];
    PieceTableModel::new(&pieces, T::from_u8(1), T::from_u8(2))
        .expect("the test model fits every token type")
}
