/// The tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Encode from input to tokens.
    Encode,

    /// Decode from tokens to output.
    Decode,
}

/// Tokenizer mode argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from input to tokens.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to output.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    ///
    /// The arg group guarantees exactly one of the flags is set.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Encode
        }
    }
}
