//! # Vocabulary Trait

use crate::{
    decoders::decode_plan::{DecodePlan, DecodeSegment, InvalidIdPolicy},
    errors::{VocabError, VocabResult},
    types::TokenType,
    vocab::id_space::{ExtraId, IdSpace},
};

/// Check that every id lies in ``[0, vocab_size)``.
///
/// ## Returns
/// `Ok(())`, or a [`VocabError::TokenOutOfRange`] naming the first bad id.
pub fn check_token_range<T: TokenType>(
    id_space: &IdSpace<T>,
    ids: &[T],
) -> VocabResult<()> {
    match ids.iter().find(|&&id| !id_space.contains(id)) {
        Some(&bad) => {
            log::trace!("out-of-range token {bad}");
            Err(VocabError::TokenOutOfRange {
                token: bad.to_string(),
                vocab_size: id_space.vocab_size(),
            })
        }
        None => Ok(()),
    }
}

/// The contract shared by every vocabulary.
///
/// Implementors supply the raw capabilities:
/// * [`id_space`](Self::id_space) - the reserved-id layout;
/// * [`encode_raw`](Self::encode_raw) - the underlying encoder;
/// * [`append_decoded_raw`](Self::append_decoded_raw) - the underlying decoder;
/// * [`append_extra_id`](Self::append_extra_id) - extra-id rendering.
///
/// The provided `encode`/`decode` operations (and their batched forms)
/// apply the shared range checks and decode truncation on top of those;
/// implementors should not need to override them, except to change how
/// a batch is scheduled.
///
/// Decoding is total: any sequence of ids decodes to *some* output.
pub trait Vocabulary<T: TokenType>: Send + Sync {
    /// The un-tokenized form; `str` for text vocabularies.
    type Input: ?Sized + Sync;

    /// The decoded form; `String` for text vocabularies.
    type Output: Default + Send;

    /// The reserved-id layout.
    fn id_space(&self) -> &IdSpace<T>;

    /// The policy for decoding ids outside of the vocabulary.
    ///
    /// Defaults to replacing with the unk id, or dropping when there is none.
    fn invalid_id_policy(&self) -> InvalidIdPolicy<T> {
        InvalidIdPolicy::from_unk_id(self.id_space().unk_id())
    }

    /// Encode `input` with the underlying encoder.
    ///
    /// ## Arguments
    /// * `input` - the input to encode.
    ///
    /// ## Returns
    /// The raw ids; these are range-checked by [`encode`](Self::encode).
    fn encode_raw(
        &self,
        input: &Self::Input,
    ) -> VocabResult<Vec<T>>;

    /// Decode a run of ids with the underlying decoder, appending to `out`.
    ///
    /// `ids` contains no pad, eos, extra or invalid ids; except for the
    /// replacement id of a [`InvalidIdPolicy::ReplaceWith`] policy.
    fn append_decoded_raw(
        &self,
        ids: &[T],
        out: &mut Self::Output,
    );

    /// Render an extra id, appending to `out`.
    fn append_extra_id(
        &self,
        extra: ExtraId<T>,
        out: &mut Self::Output,
    );

    /// The total vocab size: ``base_vocab_size + extra_ids``.
    fn vocab_size(&self) -> usize {
        self.id_space().vocab_size()
    }

    /// The size of the base id space, excluding extra ids.
    fn base_vocab_size(&self) -> usize {
        self.id_space().base_vocab_size()
    }

    /// The pad id; always 0.
    fn pad_id(&self) -> T {
        self.id_space().pad_id()
    }

    /// The end-of-sequence id, if any.
    fn eos_id(&self) -> Option<T> {
        self.id_space().eos_id()
    }

    /// The unknown id, if any.
    fn unk_id(&self) -> Option<T> {
        self.id_space().unk_id()
    }

    /// The number of extra ids.
    fn extra_ids(&self) -> usize {
        self.id_space().extra_ids()
    }

    /// Encode `input` into ids.
    ///
    /// ## Arguments
    /// * `input` - the input to encode.
    ///
    /// ## Returns
    /// The ids, each in ``[0, vocab_size)``; or an encoding error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, input)))]
    fn encode(
        &self,
        input: &Self::Input,
    ) -> VocabResult<Vec<T>> {
        let ids = self.encode_raw(input)?;
        check_token_range(self.id_space(), &ids)?;
        Ok(ids)
    }

    /// Decode `ids`.
    ///
    /// Decoding truncates at the first eos id, filters pad ids,
    /// sanitizes invalid ids, and renders extra ids in place.
    ///
    /// ## Arguments
    /// * `ids` - any id sequence.
    ///
    /// ## Returns
    /// The decoded output; this never fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids)))]
    fn decode(
        &self,
        ids: &[T],
    ) -> Self::Output {
        let plan = DecodePlan::build(self.id_space(), self.invalid_id_policy(), ids);
        if plan.sanitized() > 0 {
            log::trace!("sanitized {} invalid ids while decoding", plan.sanitized());
        }

        let mut out: Self::Output = Default::default();
        for segment in plan.into_segments() {
            match segment {
                DecodeSegment::Run(run) => self.append_decoded_raw(&run, &mut out),
                DecodeSegment::Extra(extra) => self.append_extra_id(extra, &mut out),
            }
        }
        out
    }

    /// Encode a batch.
    ///
    /// Rows are encoded independently.
    ///
    /// ## Arguments
    /// * `batch` - the inputs to encode.
    ///
    /// ## Returns
    /// One id sequence per row; or the first encoding error.
    fn encode_batch(
        &self,
        batch: &[&Self::Input],
    ) -> VocabResult<Vec<Vec<T>>> {
        batch.iter().map(|input| self.encode(input)).collect()
    }

    /// Decode a batch.
    ///
    /// Rows are decoded independently, each to its own truncation point;
    /// ``decode_batch(batch)[i] == decode(batch[i])``.
    ///
    /// ## Arguments
    /// * `batch` - the id sequences to decode.
    ///
    /// ## Returns
    /// One output per row.
    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<Self::Output> {
        batch.iter().map(|ids| self.decode(ids)).collect()
    }
}
