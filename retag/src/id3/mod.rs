//! ID3 specific items
//!
//! Only ID3v2.4 tags are written. Existing ID3v2 tags of any version are never read, they are
//! located and discarded as a whole.

pub mod v2;
