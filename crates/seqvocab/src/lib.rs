//! # `seqvocab` Token-Id Vocabularies
//!
//! Uniform conversion between text and token-id sequences for model
//! input/output pipelines.
//!
//! Several tokenization schemes satisfy one contract,
//! [`vocab::Vocabulary`], so pipeline code never special-cases the
//! underlying scheme:
//! * [`vocab::SubwordVocab`] - over an external subword model;
//! * [`vocab::ByteVocab`] - over raw UTF-8 bytes;
//! * [`vocab::PassThroughVocab`] - over pre-tokenized ids.
//!
//! See:
//! * [`vocab`] for the contract, the reserved-id layout, and the vocabularies.
//! * [`decoders`] for the decode truncation shared by every vocabulary.
//!
//! ## Decoding is Total
//!
//! Decoding never fails. Any id sequence, including negative or
//! out-of-range ids, decodes to *some* output:
//! * decoding stops at the first eos id;
//! * pad ids are removed;
//! * invalid ids are replaced by the unk id, or dropped;
//! * extra ids render as ``<extra_id_N>`` markers.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps ``HashMap`` implementations for ``ahash``.
//!
//! #### feature: ``rayon``
//!
//! This enables [`rayon::ParallelRayonVocab`], a batch parallelism wrapper,
//! and the `parallel` option of [`vocab::VocabOptions`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! #### feature: ``testing``
//!
//! This exports ``vocab::utility::testing``, a small test piece-table model.
//!
//! ## Example
//!
//! ```rust
//! use seqvocab::vocab::{ByteVocab, Vocabulary};
//!
//! let vocab: ByteVocab<u32> = ByteVocab::new(0).unwrap();
//!
//! let ids = vocab.encode("ab").unwrap();
//! assert_eq!(ids, vec![100, 101]);
//!
//! // 999 is out of range, and dropped.
//! assert_eq!(vocab.decode(&[100, 101, 999]), "ab");
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod errors;
pub mod support;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{ErrorKind, VocabError, VocabResult};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{ByteVocab, IdSpace, PassThroughVocab, SubwordModel, SubwordVocab, Vocabulary};
