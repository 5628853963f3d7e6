use std::io::{BufRead, Write};

use seqvocab::vocab::{IdVocabRef, TextVocabRef};

use crate::{
    input_output::{InputArgs, OutputArgs},
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
    vocab_selector::{VocabKind, VocabSelectorArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    vocab_selector: VocabSelectorArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Number of lines per batch.
    #[arg(long, default_value_t = 64)]
    batch_size: usize,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        let batch_size = self.batch_size.max(1);

        match (self.vocab_selector.kind(), self.tokenizer_mode.mode()) {
            (VocabKind::Byte, mode) => {
                let vocab = self.vocab_selector.load_text_vocab()?;
                run_cat_text(&mut reader, &mut writer, &vocab, mode, batch_size)?;
            }
            (VocabKind::PassThrough, mode) => {
                let vocab = self.vocab_selector.load_id_vocab()?;
                run_cat_ids(&mut reader, &mut writer, &vocab, mode, batch_size)?;
            }
        }

        Ok(())
    }
}

/// Parse a whitespace-separated line of token ids.
///
/// Any `i64` is accepted; decoding sanitizes ids outside of the vocabulary.
fn parse_ids(line: &str) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    line.split_whitespace()
        .map(|field| {
            field
                .parse::<i64>()
                .map_err(|e| -> Box<dyn std::error::Error> {
                    format!("invalid token id {field:?}: {e}").into()
                })
        })
        .collect()
}

fn write_ids(
    writer: &mut dyn Write,
    ids: &[i64],
) -> std::io::Result<()> {
    for (idx, id) in ids.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
    }
    writeln!(writer)
}

/// Read up to `batch_size` lines; end-of-line characters are kept.
fn read_batch(
    reader: &mut dyn BufRead,
    batch_size: usize,
) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(batch_size);
    while lines.len() < batch_size {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn run_cat_text(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    vocab: &TextVocabRef<i64>,
    mode: TokenizerMode,
    batch_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let lines = read_batch(reader, batch_size)?;
        if lines.is_empty() {
            break;
        }

        match mode {
            TokenizerMode::Encode => {
                // One id row per line; the line terminator is not encoded.
                let batch = lines
                    .iter()
                    .map(|line| line.trim_end_matches(['\r', '\n']))
                    .collect::<Vec<_>>();
                for ids in vocab.encode_batch(&batch)? {
                    write_ids(writer, &ids)?;
                }
            }
            TokenizerMode::Decode => {
                let rows = lines
                    .iter()
                    .map(|line| parse_ids(line))
                    .collect::<Result<Vec<_>, _>>()?;
                let batch = rows.iter().map(|r| r.as_slice()).collect::<Vec<_>>();
                for text in vocab.decode_batch(&batch) {
                    write!(writer, "{text}")?;
                    if !text.ends_with('\n') {
                        writeln!(writer)?;
                    }
                }
            }
        }
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_ids(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    vocab: &IdVocabRef<i64>,
    mode: TokenizerMode,
    batch_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let lines = read_batch(reader, batch_size)?;
        if lines.is_empty() {
            break;
        }

        let rows = lines
            .iter()
            .map(|line| parse_ids(line))
            .collect::<Result<Vec<_>, _>>()?;
        let batch = rows.iter().map(|r| r.as_slice()).collect::<Vec<_>>();

        let out = match mode {
            TokenizerMode::Encode => vocab.encode_batch(&batch)?,
            TokenizerMode::Decode => vocab.decode_batch(&batch),
        };
        for ids in out {
            write_ids(writer, &ids)?;
        }
        writer.flush()?;
    }
    Ok(())
}
