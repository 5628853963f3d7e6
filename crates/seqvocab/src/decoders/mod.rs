//! # Decoding
//!
//! The decode truncation and sanitization shared by every
//! [`Vocabulary`](crate::vocab::Vocabulary).
//!
//! ## Example
//!
//! ```rust
//! use seqvocab::decoders::{DecodePlan, DecodeSegment, InvalidIdPolicy};
//! use seqvocab::vocab::IdSpace;
//!
//! let id_space: IdSpace<u32> = IdSpace::new(128, 0, Some(1), None).unwrap();
//! let plan = DecodePlan::build(&id_space, InvalidIdPolicy::Drop, &[5, 0, 6, 1, 0, 9]);
//! assert_eq!(plan.segments(), &[DecodeSegment::Run(vec![5, 6])]);
//! ```

pub mod decode_plan;

pub use decode_plan::{DecodePlan, DecodeSegment, InvalidIdPolicy, keep_mask, mask_tokens};
