//! # Subword Vocabulary

use core::fmt::Debug;
use std::sync::Arc;

use crate::{
    decoders::decode_plan::{DecodePlan, DecodeSegment},
    errors::{VocabError, VocabResult},
    types::TokenType,
    vocab::{
        extra_ids::{ExtraIdMatcher, MarkerSpan},
        id_space::{ExtraId, IdSpace},
        subword_model::SubwordModel,
        vocabulary::{Vocabulary, check_token_range},
    },
};

/// Vocabulary over an external [`SubwordModel`].
///
/// Extra ids are allocated above the model's native range.
/// Their markers, ``<extra_id_N>``, are recognized as atomic units when
/// encoding, and rendered in place when decoding.
///
/// Ids outside of the vocabulary decode as the model's unk piece;
/// or are dropped when the model has no unk id.
pub struct SubwordVocab<T: TokenType, M: SubwordModel<T>> {
    model: Arc<M>,
    id_space: IdSpace<T>,
    markers: ExtraIdMatcher,
}

impl<T: TokenType, M: SubwordModel<T>> Clone for SubwordVocab<T, M> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            id_space: self.id_space,
            markers: self.markers.clone(),
        }
    }
}

impl<T: TokenType, M: SubwordModel<T>> Debug for SubwordVocab<T, M> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("SubwordVocab")
            .field("vocab_size", &self.id_space.vocab_size())
            .field("extra_ids", &self.id_space.extra_ids())
            .field("eos_id", &self.id_space.eos_id())
            .field("unk_id", &self.id_space.unk_id())
            .finish()
    }
}

/// Two subword vocabularies are equal iff their models and layouts are.
impl<T, M> PartialEq for SubwordVocab<T, M>
where
    T: TokenType,
    M: SubwordModel<T> + PartialEq,
{
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.id_space == other.id_space && self.model == other.model
    }
}

impl<T: TokenType, M: SubwordModel<T>> SubwordVocab<T, M> {
    /// Build a vocabulary over `model`.
    ///
    /// ## Arguments
    /// * `model` - the subword model.
    /// * `extra_ids` - the number of extra ids above the model's range.
    ///
    /// ## Returns
    /// A new `SubwordVocab`; or a configuration error if the model's
    /// reserved ids are invalid, or `T` cannot represent the vocab size.
    pub fn new(
        model: Arc<M>,
        extra_ids: usize,
    ) -> VocabResult<Self> {
        let id_space = IdSpace::new(model.piece_count(), extra_ids, model.eos_id(), model.unk_id())?;
        let markers = ExtraIdMatcher::new(extra_ids)?;

        log::debug!(
            "built SubwordVocab: pieces={}, extra_ids={}, vocab_size={}",
            model.piece_count(),
            extra_ids,
            id_space.vocab_size()
        );

        Ok(Self {
            model,
            id_space,
            markers,
        })
    }

    /// The underlying model.
    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    /// Decode a row into the single run the model sees.
    ///
    /// Only meaningful when there are no extra ids.
    fn plan_single_run(
        &self,
        ids: &[T],
    ) -> Vec<T> {
        DecodePlan::build(&self.id_space, self.invalid_id_policy(), ids)
            .into_segments()
            .into_iter()
            .flat_map(|segment| match segment {
                DecodeSegment::Run(run) => run,
                DecodeSegment::Extra(_) => Vec::new(),
            })
            .collect()
    }
}

impl<T: TokenType, M: SubwordModel<T>> Vocabulary<T> for SubwordVocab<T, M> {
    type Input = str;
    type Output = String;

    fn id_space(&self) -> &IdSpace<T> {
        &self.id_space
    }

    fn encode_raw(
        &self,
        input: &str,
    ) -> VocabResult<Vec<T>> {
        if self.markers.extra_ids() == 0 {
            return self.model.encode(input);
        }

        let mut ids = Vec::new();
        for span in self.markers.split(input) {
            match span {
                MarkerSpan::Text(range) => ids.extend(self.model.encode(&input[range])?),
                MarkerSpan::Extra(index) => {
                    let extra = self.id_space.extra_id(index).ok_or_else(|| {
                        VocabError::External(format!("unallocated extra id {index}"))
                    })?;
                    ids.push(extra.token);
                }
            }
        }
        Ok(ids)
    }

    fn append_decoded_raw(
        &self,
        ids: &[T],
        out: &mut String,
    ) {
        out.push_str(&self.model.decode(ids));
    }

    fn append_extra_id(
        &self,
        extra: ExtraId<T>,
        out: &mut String,
    ) {
        out.push_str(&extra.marker());
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> VocabResult<Vec<Vec<T>>> {
        if self.id_space.extra_ids() > 0 {
            return batch.iter().map(|text| self.encode(text)).collect();
        }

        let rows = self.model.encode_batch(batch)?;
        for row in &rows {
            check_token_range(&self.id_space, row)?;
        }
        Ok(rows)
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        if self.id_space.extra_ids() > 0 {
            return batch.iter().map(|ids| self.decode(ids)).collect();
        }

        let runs = batch
            .iter()
            .map(|ids| self.plan_single_run(ids))
            .collect::<Vec<_>>();
        let runs = runs.iter().map(|r| r.as_slice()).collect::<Vec<_>>();
        self.model.decode_batch(&runs)
    }
}
