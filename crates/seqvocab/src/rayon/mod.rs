//! # Rayon Utilities
//!
//! ``rayon`` powered wrappers for parallel batch encoding and decoding.

mod rayon_vocab;

pub use rayon_vocab::ParallelRayonVocab;
