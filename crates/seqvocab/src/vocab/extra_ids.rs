//! # Extra-Id Markers
//!
//! Extra ids are sentinel tokens allocated above the base vocabulary.
//! Each has a canonical textual marker, ``<extra_id_N>``, used when
//! rendering decoded text; and, for vocabularies which support it,
//! recognized as an atomic unit when encoding.

use core::ops::Range;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::errors::{VocabError, VocabResult};

/// The marker text for extra-id index `index`.
///
/// ## Arguments
/// * `index` - the 0-based extra-id index.
///
/// ## Returns
/// The canonical marker, e.g. ``<extra_id_0>``.
pub fn extra_id_marker(index: usize) -> String {
    format!("<extra_id_{index}>")
}

/// A span of text split around extra-id markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerSpan {
    /// Ordinary text; a byte range into the source text.
    Text(Range<usize>),

    /// A recognized marker; the extra-id index.
    Extra(usize),
}

/// Scans text for the markers of a fixed number of extra ids.
///
/// Markers for indices ``>= extra_ids`` are not recognized, and remain text.
#[derive(Debug, Clone)]
pub struct ExtraIdMatcher {
    extra_ids: usize,
    automaton: Option<AhoCorasick>,
}

impl ExtraIdMatcher {
    /// Build a matcher for `extra_ids` markers.
    ///
    /// ## Arguments
    /// * `extra_ids` - the number of extra ids.
    ///
    /// ## Returns
    /// A new `ExtraIdMatcher`; pattern `i` of the automaton is marker `i`.
    pub fn new(extra_ids: usize) -> VocabResult<Self> {
        let automaton = if extra_ids == 0 {
            None
        } else {
            let markers = (0..extra_ids).map(extra_id_marker).collect::<Vec<_>>();
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .build(&markers)
                .map_err(|e| VocabError::External(e.to_string()))?;
            Some(ac)
        };
        Ok(Self {
            extra_ids,
            automaton,
        })
    }

    /// The number of recognized markers.
    pub fn extra_ids(&self) -> usize {
        self.extra_ids
    }

    /// Split `text` into ordinary text spans and markers, in order.
    ///
    /// Empty text spans are not emitted.
    pub fn split(
        &self,
        text: &str,
    ) -> Vec<MarkerSpan> {
        let mut spans = Vec::new();
        let Some(ac) = &self.automaton else {
            if !text.is_empty() {
                spans.push(MarkerSpan::Text(0..text.len()));
            }
            return spans;
        };

        let mut last = 0;
        for m in ac.find_iter(text) {
            if m.start() > last {
                spans.push(MarkerSpan::Text(last..m.start()));
            }
            spans.push(MarkerSpan::Extra(m.pattern().as_usize()));
            last = m.end();
        }
        if last < text.len() {
            spans.push(MarkerSpan::Text(last..text.len()));
        }
        spans
    }
}
