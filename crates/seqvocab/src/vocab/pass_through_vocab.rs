//! # Pass-Through Vocabulary
//!
//! For pipelines where tokenization already happened upstream.

use crate::{
    decoders::decode_plan::{InvalidIdPolicy, mask_tokens},
    errors::VocabResult,
    types::TokenType,
    vocab::{
        id_space::{ExtraId, IdSpace},
        vocabulary::Vocabulary,
    },
};

/// Identity vocabulary over pre-tokenized ids.
///
/// `encode` validates that ids lie in ``[0, vocab_size)``; `decode` still
/// truncates at eos and filters padding, and drops invalid ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassThroughVocab<T: TokenType> {
    id_space: IdSpace<T>,
}

impl<T: TokenType> PassThroughVocab<T> {
    /// Build a pass-through vocabulary.
    ///
    /// ## Arguments
    /// * `size` - the vocab size.
    /// * `eos_id` - the optional end-of-sequence id.
    ///
    /// ## Returns
    /// A new `PassThroughVocab`; or a configuration error if `eos_id` is
    /// invalid, or `T` cannot represent `size`.
    pub fn new(
        size: usize,
        eos_id: Option<T>,
    ) -> VocabResult<Self> {
        Self::with_extra_ids(size, 0, eos_id)
    }

    /// Build a pass-through vocabulary with extra ids above `size`.
    ///
    /// Extra ids pass through unchanged in both directions.
    pub fn with_extra_ids(
        size: usize,
        extra_ids: usize,
        eos_id: Option<T>,
    ) -> VocabResult<Self> {
        let id_space = IdSpace::new(size, extra_ids, eos_id, None)?;
        log::debug!(
            "built PassThroughVocab: size={size}, extra_ids={extra_ids}, eos_id={eos_id:?}"
        );
        Ok(Self { id_space })
    }

    /// Shape-preserving decode.
    ///
    /// Positions at and after the first eos id become the pad id;
    /// invalid ids are passed through unchanged.
    ///
    /// ## Returns
    /// A sequence of the same length as `ids`.
    pub fn decode_masked(
        &self,
        ids: &[T],
    ) -> Vec<T> {
        mask_tokens(&self.id_space, ids)
    }
}

impl<T: TokenType> Vocabulary<T> for PassThroughVocab<T> {
    type Input = [T];
    type Output = Vec<T>;

    fn id_space(&self) -> &IdSpace<T> {
        &self.id_space
    }

    fn invalid_id_policy(&self) -> InvalidIdPolicy<T> {
        InvalidIdPolicy::Drop
    }

    fn encode_raw(
        &self,
        input: &[T],
    ) -> VocabResult<Vec<T>> {
        Ok(input.to_vec())
    }

    fn append_decoded_raw(
        &self,
        ids: &[T],
        out: &mut Vec<T>,
    ) {
        out.extend_from_slice(ids);
    }

    fn append_extra_id(
        &self,
        extra: ExtraId<T>,
        out: &mut Vec<T>,
    ) {
        out.push(extra.token);
    }
}
