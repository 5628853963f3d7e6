#![allow(missing_docs)]

use seqvocab::{
    VocabResult,
    vocab::{ExtraId, IdSpace, Vocabulary},
};

const TEST_STR: &str = "Testing.";
const TEST_IDS: [u32; 8] = [84, 101, 115, 116, 105, 110, 103, 46];

/// A user-defined vocabulary over the 128 ascii code points.
///
/// Only the raw capabilities are supplied; truncation, sanitization
/// and extra-id rendering come from the shared contract.
struct AsciiVocab {
    id_space: IdSpace<u32>,
}

impl AsciiVocab {
    fn new(
        extra_ids: usize,
        use_eos: bool,
        use_unk: bool,
    ) -> Self {
        let eos_id = use_eos.then_some(1);
        let unk_id = use_unk.then_some(2);
        Self {
            id_space: IdSpace::new(128, extra_ids, eos_id, unk_id).unwrap(),
        }
    }
}

impl Vocabulary<u32> for AsciiVocab {
    type Input = str;
    type Output = String;

    fn id_space(&self) -> &IdSpace<u32> {
        &self.id_space
    }

    fn encode_raw(
        &self,
        input: &str,
    ) -> VocabResult<Vec<u32>> {
        Ok(input.chars().map(|c| c as u32).collect())
    }

    fn append_decoded_raw(
        &self,
        ids: &[u32],
        out: &mut String,
    ) {
        for &id in ids {
            match id {
                1 => out.push_str("<eos>"),
                _ => out.extend(char::from_u32(id)),
            }
        }
    }

    fn append_extra_id(
        &self,
        extra: ExtraId<u32>,
        out: &mut String,
    ) {
        out.push_str(&extra.marker());
    }
}

fn with_tail(tail: &[u32]) -> Vec<u32> {
    let mut ids = vec![161];
    ids.extend_from_slice(&TEST_IDS);
    ids.extend_from_slice(tail);
    ids
}

#[test]
fn test_properties() {
    let vocab = AsciiVocab::new(10, false, true);
    assert_eq!(vocab.extra_ids(), 10);
    assert_eq!(vocab.pad_id(), 0);
    assert_eq!(vocab.eos_id(), None);
    assert_eq!(vocab.unk_id(), Some(2));
    assert_eq!(vocab.vocab_size(), 128 + 10);

    let vocab = AsciiVocab::new(0, true, false);
    assert_eq!(vocab.extra_ids(), 0);
    assert_eq!(vocab.pad_id(), 0);
    assert_eq!(vocab.eos_id(), Some(1));
    assert_eq!(vocab.unk_id(), None);
    assert_eq!(vocab.vocab_size(), 128);
}

#[test]
fn test_encode() {
    let vocab = AsciiVocab::new(0, true, true);
    assert_eq!(vocab.encode(TEST_STR).unwrap(), TEST_IDS.to_vec());

    let err = vocab.encode("caf\u{e9}").unwrap_err();
    assert!(err.is_encoding_error());
}

#[test]
fn test_decode_unk_and_eos() {
    let vocab = AsciiVocab::new(0, true, true);
    let ids = with_tail(&[127, 191, 1, 0, 10]);
    assert_eq!(vocab.decode(&ids), format!("\x02{TEST_STR}\x7f\x02"));
}

#[test]
fn test_decode_unk_only() {
    let vocab = AsciiVocab::new(35, false, true);
    assert_eq!(vocab.vocab_size(), 163);

    // 161 is now extra id 1; 191 is still out of range.
    let ids = with_tail(&[127, 191, 1, 33, 1]);
    assert_eq!(
        vocab.decode(&ids),
        format!("<extra_id_1>{TEST_STR}\x7f\x02<eos>!<eos>")
    );
}

#[test]
fn test_decode_eos_only() {
    let vocab = AsciiVocab::new(0, true, false);

    let ids = with_tail(&[127, 191, 1, 33, 1]);
    assert_eq!(vocab.decode(&ids), format!("{TEST_STR}\x7f"));

    let ids = with_tail(&[127, 191]);
    assert_eq!(vocab.decode(&ids), format!("{TEST_STR}\x7f"));

    let mut ids = vec![1];
    ids.extend_from_slice(&TEST_IDS);
    assert_eq!(vocab.decode(&ids), "");
}

#[test]
fn test_decode_no_unk_or_eos() {
    let vocab = AsciiVocab::new(0, false, false);
    let ids = with_tail(&[127, 191, 1, 33, 1]);
    assert_eq!(vocab.decode(&ids), format!("{TEST_STR}\x7f<eos>!<eos>"));
}

#[test]
fn test_decode_batch() {
    let vocab = AsciiVocab::new(0, true, true);

    let first = with_tail(&[127, 191, 1, 33, 1]);
    let second = with_tail(&[1, 191, 1, 33, 1]);
    let batch = [first.as_slice(), second.as_slice()];

    let decoded = vocab.decode_batch(&batch);
    assert_eq!(
        decoded,
        vec![
            format!("\x02{TEST_STR}\x7f\x02"),
            format!("\x02{TEST_STR}"),
        ]
    );
    for (row, text) in batch.iter().zip(decoded.iter()) {
        assert_eq!(&vocab.decode(row), text);
    }
}

#[test]
fn test_extra_id_round_trip() {
    let vocab = AsciiVocab::new(3, true, true);

    // ascii encoding knows nothing about markers.
    let ids = vocab.encode("<extra_id_0>").unwrap();
    assert_eq!(ids.len(), "<extra_id_0>".len());

    assert_eq!(vocab.decode(&[130, 104, 105, 128]), "<extra_id_0>hi<extra_id_2>");
    assert_eq!(vocab.encode_raw("hi").unwrap(), vec![104, 105]);
}
