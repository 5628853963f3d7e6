//! Vocabulary Options
//!
//! Options for building a [`Vocabulary`].

use std::sync::Arc;

use crate::{
    errors::VocabResult,
    types::TokenType,
    vocab::{ByteVocab, PassThroughVocab, SubwordModel, SubwordVocab, Vocabulary},
};

/// A shared text vocabulary.
pub type TextVocabRef<T> = Arc<dyn Vocabulary<T, Input = str, Output = String>>;

/// A shared id-to-id vocabulary.
pub type IdVocabRef<T> = Arc<dyn Vocabulary<T, Input = [T], Output = Vec<T>>>;

/// Options for configuring a [`Vocabulary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VocabOptions {
    /// The number of extra ids to allocate above the base vocabulary.
    pub extra_ids: usize,

    /// Should batches be processed in parallel?
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub parallel: bool,
}

impl VocabOptions {
    /// Gets the configured number of extra ids.
    pub fn extra_ids(&self) -> usize {
        self.extra_ids
    }

    /// Sets the configured number of extra ids.
    pub fn set_extra_ids(
        &mut self,
        extra_ids: usize,
    ) {
        self.extra_ids = extra_ids;
    }

    /// Sets the configured number of extra ids.
    pub fn with_extra_ids(
        mut self,
        extra_ids: usize,
    ) -> Self {
        self.set_extra_ids(extra_ids);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`ByteVocab`].
    pub fn build_byte_vocab<T: TokenType>(&self) -> VocabResult<TextVocabRef<T>> {
        Ok(self.share(ByteVocab::<T>::new(self.extra_ids)?))
    }

    /// Build a [`SubwordVocab`] over `model`.
    pub fn build_subword_vocab<T, M>(
        &self,
        model: Arc<M>,
    ) -> VocabResult<TextVocabRef<T>>
    where
        T: TokenType,
        M: SubwordModel<T> + 'static,
    {
        Ok(self.share(SubwordVocab::new(model, self.extra_ids)?))
    }

    /// Build a [`PassThroughVocab`] of `size` base ids.
    pub fn build_pass_through_vocab<T: TokenType>(
        &self,
        size: usize,
        eos_id: Option<T>,
    ) -> VocabResult<IdVocabRef<T>> {
        Ok(self.share(PassThroughVocab::with_extra_ids(
            size,
            self.extra_ids,
            eos_id,
        )?))
    }

    fn share<T, V>(
        &self,
        vocab: V,
    ) -> Arc<dyn Vocabulary<T, Input = V::Input, Output = V::Output>>
    where
        T: TokenType,
        V: Vocabulary<T> + 'static,
    {
        #[cfg(feature = "rayon")]
        if self.parallel {
            return Arc::new(crate::rayon::ParallelRayonVocab::new(vocab));
        }

        #[cfg(not(feature = "rayon"))]
        if self.parallel {
            log::debug!("parallel vocabulary requested without the \"rayon\" feature");
        }

        Arc::new(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::utility::testing::build_test_piece_model;

    #[test]
    fn test_options() {
        let options = VocabOptions::default();
        assert_eq!(options.extra_ids(), 0);
        assert!(!options.parallel());

        let options = options.with_extra_ids(10).with_parallel(true);
        assert_eq!(options.extra_ids(), 10);
        assert!(options.parallel());

        let mut options = options;
        options.set_parallel(false);
        options.set_extra_ids(3);
        assert_eq!(
            options,
            VocabOptions {
                extra_ids: 3,
                parallel: false,
            }
        );
    }

    #[test]
    fn test_build_vocabs() {
        type T = u32;

        for parallel in [false, true] {
            let options = VocabOptions::default()
                .with_extra_ids(10)
                .with_parallel(parallel);

            let byte_vocab = options.build_byte_vocab::<T>().unwrap();
            assert_eq!(byte_vocab.vocab_size(), 269);
            assert_eq!(byte_vocab.decode(&[100, 268]), "a<extra_id_0>");

            let subword_vocab = options
                .build_subword_vocab(Arc::new(build_test_piece_model::<T>()))
                .unwrap();
            assert_eq!(subword_vocab.vocab_size(), 36);
            assert_eq!(
                subword_vocab.decode_batch(&[&[35, 16], &[11, 12, 1, 8]]),
                vec!["<extra_id_0> test", "this"]
            );

            let ids_vocab = options.build_pass_through_vocab::<T>(128, Some(1)).unwrap();
            assert_eq!(ids_vocab.vocab_size(), 138);
            assert_eq!(ids_vocab.decode(&[2, 3, 1, 4, 9]), vec![2, 3]);
        }
    }
}
