//! # Support Utilities

pub mod strings;
