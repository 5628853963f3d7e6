//! # Vocabulary
//!
//! This module provides the [`Vocabulary`] contract and its implementations.
//!
//! ## Id Layout
//!
//! Every vocabulary reserves ids the same way; see [`IdSpace`]:
//! * `0` is padding;
//! * `eos` and `unk` (when present) are small base ids;
//! * extra ids are allocated above the base range, in reverse.
//!
//! ## Vocabularies
//!
//! * [`SubwordVocab`] - wraps a [`SubwordModel`]; e.g. a [`PieceTableModel`].
//! * [`ByteVocab`] - UTF-8 bytes, offset by the 3 reserved ids.
//! * [`PassThroughVocab`] - identity over pre-tokenized ids.
//!
//! All of them decode through [`crate::decoders::decode_plan`].

pub mod byte_vocab;
pub mod extra_ids;
pub mod id_space;
pub mod pass_through_vocab;
pub mod piece_table_model;
pub mod subword_model;
pub mod subword_vocab;
pub mod utility;
pub mod vocab_options;
pub mod vocabulary;

#[doc(inline)]
pub use byte_vocab::ByteVocab;
#[doc(inline)]
pub use extra_ids::{ExtraIdMatcher, extra_id_marker};
#[doc(inline)]
pub use id_space::{ExtraId, IdKind, IdSpace};
#[doc(inline)]
pub use pass_through_vocab::PassThroughVocab;
#[doc(inline)]
pub use piece_table_model::PieceTableModel;
#[doc(inline)]
pub use subword_model::SubwordModel;
#[doc(inline)]
pub use subword_vocab::SubwordVocab;
#[doc(inline)]
pub use vocab_options::{IdVocabRef, TextVocabRef, VocabOptions};
#[doc(inline)]
pub use vocabulary::Vocabulary;
