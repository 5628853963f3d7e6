use seqvocab::vocab::{IdVocabRef, TextVocabRef, VocabOptions};

/// The vocabulary family.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabKind {
    /// Raw UTF-8 bytes; text in, ids out.
    Byte,

    /// Pre-tokenized ids; ids in, ids out.
    PassThrough,
}

/// Vocabulary selector arg group.
#[derive(clap::Args, Debug)]
pub struct VocabSelectorArgs {
    /// Vocabulary to use.
    #[arg(long, value_enum, default_value_t = VocabKind::Byte)]
    vocab: VocabKind,

    /// Number of extra ids above the base vocabulary.
    #[arg(long, default_value_t = 0)]
    extra_ids: usize,

    /// Base vocabulary size; pass-through only.
    #[arg(long, default_value_t = 32000)]
    size: usize,

    /// End-of-sequence id; pass-through only.
    #[arg(long)]
    eos_id: Option<i64>,

    /// Process batches in parallel.
    #[arg(long)]
    parallel: bool,
}

impl VocabSelectorArgs {
    /// The selected vocabulary family.
    pub fn kind(&self) -> VocabKind {
        self.vocab
    }

    /// The configured options.
    pub fn options(&self) -> VocabOptions {
        VocabOptions::default()
            .with_extra_ids(self.extra_ids)
            .with_parallel(self.parallel)
    }

    /// Build the byte vocabulary.
    pub fn load_text_vocab(&self) -> Result<TextVocabRef<i64>, Box<dyn std::error::Error>> {
        let vocab = self.options().build_byte_vocab::<i64>()?;
        log::info!("loaded byte vocabulary: vocab_size={}", vocab.vocab_size());
        Ok(vocab)
    }

    /// Build the pass-through vocabulary.
    pub fn load_id_vocab(&self) -> Result<IdVocabRef<i64>, Box<dyn std::error::Error>> {
        let vocab = self
            .options()
            .build_pass_through_vocab::<i64>(self.size, self.eos_id)?;
        log::info!(
            "loaded pass-through vocabulary: vocab_size={}",
            vocab.vocab_size()
        );
        Ok(vocab)
    }
}
