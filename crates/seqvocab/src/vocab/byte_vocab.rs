//! # Byte Vocabulary
//!
//! Text is UTF-8 encoded; each byte ``b`` maps to the token ``b + 3``.
//! The three ids below the byte range are reserved:
//!
//! | id | role |
//! |----|------|
//! | 0  | pad  |
//! | 1  | eos  |
//! | 2  | unk  |

use core::fmt::Debug;

use crate::{
    decoders::decode_plan::InvalidIdPolicy,
    errors::{VocabError, VocabResult},
    support::strings::string_from_utf8_dropping_invalid,
    types::TokenType,
    vocab::{
        id_space::{ExtraId, IdSpace},
        vocabulary::Vocabulary,
    },
};

/// The offset between a byte value and its token.
pub const BYTE_OFFSET: usize = 3;

/// The eos id of a [`ByteVocab`].
pub const BYTE_EOS_ID: usize = 1;

/// The unk id of a [`ByteVocab`].
pub const BYTE_UNK_ID: usize = 2;

/// The base vocab size of a [`ByteVocab`]: ``256 + BYTE_OFFSET``.
pub const BYTE_BASE_VOCAB_SIZE: usize = 256 + BYTE_OFFSET;

/// Byte-level vocabulary.
///
/// Decoding drops ids which do not map back to a byte (including unk),
/// and drops byte sequences which are not valid UTF-8.
///
/// Extra ids, when configured, decode to ``<extra_id_N>`` markers;
/// encoding treats marker text as ordinary bytes, never as extra ids.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteVocab<T: TokenType> {
    id_space: IdSpace<T>,

    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: [T; 256],
}

impl<T: TokenType> Debug for ByteVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteVocab")
            .field("vocab_size", &self.id_space.vocab_size())
            .field("extra_ids", &self.id_space.extra_ids())
            .finish()
    }
}

fn reserved_token<T: TokenType>(id: usize) -> VocabResult<T> {
    T::from_usize(id).ok_or(VocabError::VocabSizeOverflow {
        size: BYTE_BASE_VOCAB_SIZE,
    })
}

impl<T: TokenType> ByteVocab<T> {
    /// Build a byte vocabulary.
    ///
    /// ## Arguments
    /// * `extra_ids` - the number of extra ids above the byte range.
    ///
    /// ## Returns
    /// A new `ByteVocab`; or a configuration error if `T` cannot
    /// represent the vocab size.
    pub fn new(extra_ids: usize) -> VocabResult<Self> {
        let id_space = IdSpace::new(
            BYTE_BASE_VOCAB_SIZE,
            extra_ids,
            Some(reserved_token(BYTE_EOS_ID)?),
            Some(reserved_token(BYTE_UNK_ID)?),
        )?;

        let mut byte_tokens = [T::zero(); 256];
        for (byte, slot) in byte_tokens.iter_mut().enumerate() {
            *slot = reserved_token(byte + BYTE_OFFSET)?;
        }

        log::debug!(
            "built ByteVocab: vocab_size={}, extra_ids={}",
            id_space.vocab_size(),
            extra_ids
        );

        Ok(Self {
            id_space,
            byte_tokens,
        })
    }

    /// Get the byte-ord => token mapping table.
    pub fn byte_tokens(&self) -> &[T; 256] {
        &self.byte_tokens
    }

    /// Get the token corresponding to a given byte.
    #[inline(always)]
    pub fn get_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_tokens[byte as usize]
    }

    /// Append the translated byte tokens to a target buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The slice of bytes to translate and append.
    /// * `tokens` - The target token buffer.
    #[inline(always)]
    pub fn append_tokens(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(bytes.iter().map(|&b| self.get_token(b)));
    }

    /// Get the byte corresponding to a given token, if any.
    ///
    /// ## Returns
    /// `None` for reserved, extra and out-of-range tokens.
    #[inline(always)]
    pub fn get_byte(
        &self,
        token: T,
    ) -> Option<u8> {
        let shifted = token.to_usize()?.checked_sub(BYTE_OFFSET)?;
        u8::try_from(shifted).ok()
    }
}

impl<T: TokenType> Vocabulary<T> for ByteVocab<T> {
    type Input = str;
    type Output = String;

    fn id_space(&self) -> &IdSpace<T> {
        &self.id_space
    }

    /// Byte streams have no "unknown glyph"; invalid ids are always dropped.
    fn invalid_id_policy(&self) -> InvalidIdPolicy<T> {
        InvalidIdPolicy::Drop
    }

    fn encode_raw(
        &self,
        input: &str,
    ) -> VocabResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(input.len());
        self.append_tokens(input.as_bytes(), &mut tokens);
        Ok(tokens)
    }

    fn append_decoded_raw(
        &self,
        ids: &[T],
        out: &mut String,
    ) {
        let bytes = ids
            .iter()
            .filter_map(|&id| self.get_byte(id))
            .collect::<Vec<u8>>();
        out.push_str(&string_from_utf8_dropping_invalid(bytes));
    }

    fn append_extra_id(
        &self,
        extra: ExtraId<T>,
        out: &mut String,
    ) {
        out.push_str(&extra.marker());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_STRING: &str = "this is a test";
    const TEST_BYTE_IDS: [u32; 14] = [
        119, 107, 108, 118, 35, 108, 118, 35, 100, 35, 119, 104, 118, 119,
    ];

    #[test]
    fn test_byte_vocab() {
        type T = u32;
        let vocab: ByteVocab<T> = ByteVocab::new(0).unwrap();

        assert_eq!(vocab.vocab_size(), 259);
        assert_eq!(vocab.base_vocab_size(), 259);
        assert_eq!(vocab.pad_id(), 0);
        assert_eq!(vocab.eos_id(), Some(1));
        assert_eq!(vocab.unk_id(), Some(2));
        assert_eq!(vocab.extra_ids(), 0);

        assert_eq!(vocab.encode(TEST_STRING).unwrap(), TEST_BYTE_IDS.to_vec());
        assert_eq!(vocab.decode(&TEST_BYTE_IDS), TEST_STRING);

        assert_eq!(format!("{:?}", vocab), "ByteVocab { vocab_size: 259, extra_ids: 0 }");
    }

    #[test]
    fn test_byte_table() {
        type T = u32;
        let vocab: ByteVocab<T> = ByteVocab::new(0).unwrap();

        assert_eq!(vocab.get_token(0_u8), 3);
        assert_eq!(vocab.get_token(255_u8), 258);
        assert_eq!(vocab.byte_tokens()[97], 100);

        assert_eq!(vocab.get_byte(0), None);
        assert_eq!(vocab.get_byte(2), None);
        assert_eq!(vocab.get_byte(3), Some(0));
        assert_eq!(vocab.get_byte(258), Some(255));
        assert_eq!(vocab.get_byte(259), None);
    }

    #[test]
    fn test_encode_decode_scenario() {
        type T = u32;
        let vocab: ByteVocab<T> = ByteVocab::new(0).unwrap();

        assert_eq!(vocab.encode("ab").unwrap(), vec![100, 101]);
        assert_eq!(vocab.decode(&[100, 101, 999]), "ab");
        assert_eq!(vocab.decode(&[260]), "");
    }

    #[test]
    fn test_unk_is_dropped() {
        type T = u32;
        let vocab: ByteVocab<T> = ByteVocab::new(0).unwrap();

        assert_eq!(vocab.decode(&[100, 2, 101]), "ab");
        assert_eq!(vocab.decode(&[100, 0, 101, 1, 102]), "ab");
    }

    #[test]
    fn test_invalid_utf8_is_dropped() {
        type T = i32;
        let vocab: ByteVocab<T> = ByteVocab::new(0).unwrap();

        // 0xff is never valid UTF-8.
        assert_eq!(vocab.decode(&[0xff + 3, 100]), "a");

        // a truncated "é" (0xc3 0xa9).
        assert_eq!(vocab.decode(&[0xc3 + 3, 100]), "a");
        assert_eq!(vocab.decode(&[0xc3 + 3, 0xa9 + 3]), "é");

        assert_eq!(vocab.decode(&[-4, 100, i32::MAX]), "a");
    }

    #[test]
    fn test_extra_ids() {
        type T = u32;
        let vocab: ByteVocab<T> = ByteVocab::new(10).unwrap();

        assert_eq!(vocab.vocab_size(), 269);
        assert_eq!(vocab.decode(&[100]), "a");
        assert_eq!(vocab.decode(&[268]), "<extra_id_0>");
        assert_eq!(vocab.decode(&[100, 259, 101]), "a<extra_id_9>b");
        assert_eq!(vocab.decode(&[269]), "");

        // Markers are ordinary text to a byte vocabulary.
        let ids = vocab.encode("<extra_id_0>").unwrap();
        assert_eq!(ids.len(), "<extra_id_0>".len());
        assert!(ids.iter().all(|&id| id < 259));
        assert_eq!(vocab.decode(&ids), "<extra_id_0>");
    }

    #[test]
    fn test_equality() {
        type T = u32;
        let a: ByteVocab<T> = ByteVocab::new(0).unwrap();
        let b: ByteVocab<T> = ByteVocab::new(0).unwrap();
        let c: ByteVocab<T> = ByteVocab::new(10).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_token_type_too_small() {
        let err = ByteVocab::<u8>::new(0).unwrap_err();
        assert!(err.is_configuration_error());
    }
}
