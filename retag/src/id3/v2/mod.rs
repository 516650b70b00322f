//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! * Tags are always written as ID3v2.4, with UTF-8 text and no tag or frame flags set.
//! * An existing tag is never merged with the new one. Writing replaces the tag entirely.
//! * `COMM` and `USLT` frames require a language, so comments and lyrics are written as `TXXX` frames.

pub(crate) mod frame;
pub(crate) mod header;
pub mod util;
pub(crate) mod write;
