//! # Reserved Id Layout
//!
//! Every vocabulary shares the same id layout:
//!
//! ```text
//! 0                  pad
//! [1, base)          base ids; eos/unk (when present) live here
//! [base, base+extra) extra ids, allocated in reverse:
//!                    extra index 0 is the top id, base+extra-1
//! ```

use crate::{
    errors::{VocabError, VocabResult},
    types::TokenType,
    vocab::extra_ids::extra_id_marker,
};

/// The classification of a single id against an [`IdSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// The pad id (always 0).
    Pad,

    /// The configured eos id.
    Eos,

    /// Any other id in ``[0, base_vocab_size)``; includes unk.
    Base,

    /// An extra id; carries the extra-id index.
    Extra(usize),

    /// Negative, or ``>= vocab_size``.
    Invalid,
}

/// A resolved extra id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtraId<T: TokenType> {
    /// The 0-based extra-id index.
    pub index: usize,

    /// The token allocated to the index.
    pub token: T,
}

impl<T: TokenType> ExtraId<T> {
    /// The canonical marker text for this extra id.
    pub fn marker(&self) -> String {
        extra_id_marker(self.index)
    }
}

/// Reserved-id layout of a vocabulary.
///
/// This is a pure value; it is fixed when a vocabulary is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdSpace<T: TokenType> {
    base_vocab_size: usize,
    extra_ids: usize,
    eos_id: Option<T>,
    unk_id: Option<T>,
}

fn check_reserved_id<T: TokenType>(
    role: &'static str,
    id: Option<T>,
    base_vocab_size: usize,
) -> VocabResult<()> {
    let Some(id) = id else {
        return Ok(());
    };
    if id == T::zero() {
        return Err(VocabError::ReservedIdIsPad { role });
    }
    match id.to_usize() {
        Some(idx) if idx < base_vocab_size => Ok(()),
        _ => Err(VocabError::ReservedIdOutOfRange {
            role,
            id: id.to_string(),
            base_vocab_size,
        }),
    }
}

impl<T: TokenType> IdSpace<T> {
    /// Build and validate an id layout.
    ///
    /// ## Arguments
    /// * `base_vocab_size` - the size of the underlying id space.
    /// * `extra_ids` - the number of extra ids appended above the base.
    /// * `eos_id` - the optional end-of-sequence id.
    /// * `unk_id` - the optional unknown id.
    ///
    /// ## Returns
    /// A new `IdSpace`, or a configuration error if:
    /// * `eos_id` or `unk_id` is the pad id, or outside ``[0, base_vocab_size)``;
    /// * the largest id is not representable by `T`.
    pub fn new(
        base_vocab_size: usize,
        extra_ids: usize,
        eos_id: Option<T>,
        unk_id: Option<T>,
    ) -> VocabResult<Self> {
        let vocab_size = base_vocab_size
            .checked_add(extra_ids)
            .ok_or(VocabError::VocabSizeOverflow { size: usize::MAX })?;
        if vocab_size > 0 && T::from_usize(vocab_size - 1).is_none() {
            return Err(VocabError::VocabSizeOverflow { size: vocab_size });
        }

        check_reserved_id("eos", eos_id, base_vocab_size)?;
        check_reserved_id("unk", unk_id, base_vocab_size)?;

        Ok(Self {
            base_vocab_size,
            extra_ids,
            eos_id,
            unk_id,
        })
    }

    /// The pad id; always 0.
    pub fn pad_id(&self) -> T {
        T::zero()
    }

    /// The end-of-sequence id, if any.
    pub fn eos_id(&self) -> Option<T> {
        self.eos_id
    }

    /// The unknown id, if any.
    pub fn unk_id(&self) -> Option<T> {
        self.unk_id
    }

    /// The number of extra ids.
    pub fn extra_ids(&self) -> usize {
        self.extra_ids
    }

    /// The size of the base id space, excluding extra ids.
    pub fn base_vocab_size(&self) -> usize {
        self.base_vocab_size
    }

    /// The total vocab size: ``base_vocab_size + extra_ids``.
    pub fn vocab_size(&self) -> usize {
        self.base_vocab_size + self.extra_ids
    }

    /// Is `id` in ``[0, vocab_size)``?
    pub fn contains(
        &self,
        id: T,
    ) -> bool {
        id.to_usize().is_some_and(|idx| idx < self.vocab_size())
    }

    /// Resolve extra-id `index`.
    ///
    /// ## Returns
    /// `None` if ``index >= extra_ids``.
    pub fn extra_id(
        &self,
        index: usize,
    ) -> Option<ExtraId<T>> {
        if index >= self.extra_ids {
            return None;
        }
        let token = T::from_usize(self.vocab_size() - 1 - index)?;
        Some(ExtraId { index, token })
    }

    /// The extra-id index of `id`, if it is an extra id.
    pub fn extra_index(
        &self,
        id: T,
    ) -> Option<usize> {
        match self.classify(id) {
            IdKind::Extra(index) => Some(index),
            _ => None,
        }
    }

    /// Classify `id` against this layout.
    ///
    /// This is total over every value of `T`.
    #[inline]
    pub fn classify(
        &self,
        id: T,
    ) -> IdKind {
        if id == T::zero() {
            return IdKind::Pad;
        }
        if self.eos_id == Some(id) {
            return IdKind::Eos;
        }
        match id.to_usize() {
            Some(idx) if idx < self.base_vocab_size => IdKind::Base,
            Some(idx) if idx < self.vocab_size() => IdKind::Extra(self.vocab_size() - 1 - idx),
            _ => IdKind::Invalid,
        }
    }
}
