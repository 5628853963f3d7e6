//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive};

/// A type that can be used as a token id.
///
/// These are primitive integers. Signed types are permitted so that ids
/// produced by tensor engines (typically `i32`) can be decoded directly;
/// negative ids are never valid, and are sanitized by decoding.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type VocabHashMap<K, V> = ahash::AHashMap<K, V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type VocabHashMap<K, V> = std::collections::HashMap<K, V>;
    }
}

/// Static check that a type is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Static check that a type is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
        let _: IsToken<i32>;
        let _: IsToken<i64>;
    }
}
