//! # Decode Truncation and Sanitization
//!
//! Every vocabulary decodes through the same plan:
//!
//! 1. truncate at the first eos id (exclusive);
//! 2. filter pad ids everywhere;
//! 3. sanitize invalid ids by the vocabulary's [`InvalidIdPolicy`];
//! 4. split the surviving ids into runs of base ids, separated by extra ids.
//!
//! Steps 1 and 2 are computed as a keep-mask with no early exit and no
//! data-dependent lengths; see [`keep_mask`]. Each row of a batch is
//! planned independently.

use crate::{
    types::TokenType,
    vocab::id_space::{ExtraId, IdKind, IdSpace},
};

/// How a vocabulary treats invalid ids while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidIdPolicy<T: TokenType> {
    /// Remove the id.
    Drop,

    /// Substitute the given id; typically the unk id.
    ReplaceWith(T),
}

impl<T: TokenType> InvalidIdPolicy<T> {
    /// Replace with `unk_id` when present; otherwise drop.
    pub fn from_unk_id(unk_id: Option<T>) -> Self {
        match unk_id {
            Some(unk) => InvalidIdPolicy::ReplaceWith(unk),
            None => InvalidIdPolicy::Drop,
        }
    }
}

/// Compute the truncation keep-mask for `ids`.
///
/// Position `i` is kept iff no eos id occurs in ``ids[..=i]``,
/// and ``ids[i]`` is not the pad id.
///
/// ## Arguments
/// * `id_space` - the reserved-id layout.
/// * `ids` - the id sequence.
///
/// ## Returns
/// A mask of the same length as `ids`.
pub fn keep_mask<T: TokenType>(
    id_space: &IdSpace<T>,
    ids: &[T],
) -> Vec<bool> {
    let pad = id_space.pad_id();
    let eos = id_space.eos_id();

    let mut seen_eos = false;
    ids.iter()
        .map(|&id| {
            seen_eos |= eos == Some(id);
            !seen_eos && id != pad
        })
        .collect()
}

/// Shape-preserving truncation: dropped positions become the pad id.
///
/// ## Returns
/// A sequence of the same length as `ids`.
pub fn mask_tokens<T: TokenType>(
    id_space: &IdSpace<T>,
    ids: &[T],
) -> Vec<T> {
    let pad = id_space.pad_id();
    ids.iter()
        .zip(keep_mask(id_space, ids))
        .map(|(&id, keep)| if keep { id } else { pad })
        .collect()
}

/// A decode segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeSegment<T: TokenType> {
    /// A run of base ids (possibly including a substituted unk id).
    Run(Vec<T>),

    /// A single extra id.
    Extra(ExtraId<T>),
}

/// The planned decode of one id sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodePlan<T: TokenType> {
    segments: Vec<DecodeSegment<T>>,
    sanitized: usize,
}

impl<T: TokenType> DecodePlan<T> {
    /// Plan the decode of `ids`.
    ///
    /// ## Arguments
    /// * `id_space` - the reserved-id layout.
    /// * `policy` - the invalid id policy.
    /// * `ids` - the id sequence; any values at all.
    ///
    /// ## Returns
    /// A new `DecodePlan`; this never fails.
    pub fn build(
        id_space: &IdSpace<T>,
        policy: InvalidIdPolicy<T>,
        ids: &[T],
    ) -> Self {
        let mut segments = Vec::new();
        let mut run: Vec<T> = Vec::new();
        let mut sanitized = 0;

        for (&id, keep) in ids.iter().zip(keep_mask(id_space, ids)) {
            if !keep {
                continue;
            }
            match id_space.classify(id) {
                IdKind::Pad | IdKind::Eos => {}
                IdKind::Base => run.push(id),
                IdKind::Extra(index) => {
                    if !run.is_empty() {
                        segments.push(DecodeSegment::Run(core::mem::take(&mut run)));
                    }
                    segments.push(DecodeSegment::Extra(ExtraId { index, token: id }));
                }
                IdKind::Invalid => {
                    sanitized += 1;
                    if let InvalidIdPolicy::ReplaceWith(replacement) = policy {
                        run.push(replacement);
                    }
                }
            }
        }
        if !run.is_empty() {
            segments.push(DecodeSegment::Run(run));
        }

        Self {
            segments,
            sanitized,
        }
    }

    /// The planned segments, in order.
    pub fn segments(&self) -> &[DecodeSegment<T>] {
        &self.segments
    }

    /// Consume the plan, returning the segments.
    pub fn into_segments(self) -> Vec<DecodeSegment<T>> {
        self.segments
    }

    /// The number of invalid ids which were dropped or replaced.
    pub fn sanitized(&self) -> usize {
        self.sanitized
    }

    /// Is the plan empty?
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
