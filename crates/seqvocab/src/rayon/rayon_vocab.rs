//! # Parallel Vocabulary

use crate::{
    decoders::decode_plan::InvalidIdPolicy,
    errors::VocabResult,
    types::TokenType,
    vocab::{ExtraId, IdSpace, Vocabulary},
};

/// Batch-Level Parallel Vocabulary Wrapper.
///
/// Enables ``rayon`` encoding and decoding of batches; each row is
/// processed independently.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallelRayonVocab<T: TokenType, V: Vocabulary<T>> {
    /// Wrapped vocabulary.
    pub inner: V,

    _marker: std::marker::PhantomData<T>,
}

impl<T, V> ParallelRayonVocab<T, V>
where
    T: TokenType,
    V: Vocabulary<T>,
{
    /// Create a new parallel vocabulary.
    ///
    /// ## Arguments
    /// * `inner` - The vocabulary to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonVocab` instance.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, V> Vocabulary<T> for ParallelRayonVocab<T, V>
where
    T: TokenType,
    V: Vocabulary<T>,
{
    type Input = V::Input;
    type Output = V::Output;

    fn id_space(&self) -> &IdSpace<T> {
        self.inner.id_space()
    }

    fn invalid_id_policy(&self) -> InvalidIdPolicy<T> {
        self.inner.invalid_id_policy()
    }

    fn encode_raw(
        &self,
        input: &Self::Input,
    ) -> VocabResult<Vec<T>> {
        self.inner.encode_raw(input)
    }

    fn append_decoded_raw(
        &self,
        ids: &[T],
        out: &mut Self::Output,
    ) {
        self.inner.append_decoded_raw(ids, out)
    }

    fn append_extra_id(
        &self,
        extra: ExtraId<T>,
        out: &mut Self::Output,
    ) {
        self.inner.append_extra_id(extra, out)
    }

    fn encode(
        &self,
        input: &Self::Input,
    ) -> VocabResult<Vec<T>> {
        self.inner.encode(input)
    }

    fn decode(
        &self,
        ids: &[T],
    ) -> Self::Output {
        self.inner.decode(ids)
    }

    fn encode_batch(
        &self,
        batch: &[&Self::Input],
    ) -> VocabResult<Vec<Vec<T>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|input| self.inner.encode(input))
            .collect()
    }

    fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<Self::Output> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|ids| self.inner.decode(ids))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        types::{check_is_send, check_is_sync},
        vocab::{ByteVocab, PassThroughVocab, SubwordVocab, utility::testing::build_test_piece_model},
    };

    #[test]
    fn test_byte_vocab() {
        type T = u32;

        let samples = vec![
            "hello world",
            "hello san francisco",
            "it's not the heat, it's the salt",
        ];

        let inner: ByteVocab<T> = ByteVocab::new(0).unwrap();
        let vocab = ParallelRayonVocab::new(inner.clone());
        check_is_send(&vocab);
        check_is_sync(&vocab);

        assert_eq!(vocab.vocab_size(), inner.vocab_size());

        let rows = vocab.encode_batch(&samples).unwrap();
        assert_eq!(rows, inner.encode_batch(&samples).unwrap());

        let mut batch: Vec<Vec<T>> = rows.clone();
        batch[1].insert(5, 1);
        batch[2].push(999);
        let batch = batch.iter().map(|r| r.as_slice()).collect::<Vec<_>>();

        let decoded = vocab.decode_batch(&batch);
        assert_eq!(decoded, vec!["hello world", "hello", "it's not the heat, it's the salt"]);
        for (row, text) in batch.iter().zip(decoded.iter()) {
            assert_eq!(&inner.decode(row), text);
        }
    }

    #[test]
    fn test_subword_vocab() {
        type T = u32;

        let inner = SubwordVocab::new(Arc::new(build_test_piece_model::<T>()), 10).unwrap();
        let vocab = ParallelRayonVocab::new(inner.clone());

        let texts = ["this is a test", "<extra_id_3> test"];
        let rows = vocab.encode_batch(&texts).unwrap();
        assert_eq!(rows, inner.encode_batch(&texts).unwrap());

        let batch = rows.iter().map(|r| r.as_slice()).collect::<Vec<_>>();
        assert_eq!(vocab.decode_batch(&batch), texts.to_vec());
    }

    #[test]
    fn test_pass_through_vocab() {
        type T = i32;

        let vocab = ParallelRayonVocab::new(PassThroughVocab::<T>::new(64, Some(1)).unwrap());
        let batch: [&[T]; 3] = [&[3, 1, 4], &[], &[-2, 5, 0, 6]];
        assert_eq!(vocab.decode_batch(&batch), vec![vec![3], vec![], vec![5, 6]]);
        assert!(vocab.encode_batch(&batch).is_err());
    }
}
