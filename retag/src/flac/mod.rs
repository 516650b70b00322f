//! Items for FLAC
//!
//! ## File notes
//!
//! * Text tags are stored in a single `VORBIS_COMMENT` block. An existing block is replaced in place,
//!   and its previous comments (and vendor string) are discarded.
//! * Each cover art tag is appended as its own `PICTURE` block. By default, existing pictures are
//!   kept, see [`PicturePolicy`](crate::config::PicturePolicy).
//! * All other metadata blocks, and the audio frames, are copied verbatim.
//! * A leading ID3v2 tag is **not** supported, the file must start with the `fLaC` marker.

mod block;
mod read;
mod write;

use crate::config::WriteOptions;
use crate::error::Result;
use crate::tag::Tag;

/// Write `tags` to a FLAC stream
///
/// # Errors
///
/// * `data` does not start with the `fLaC` marker, or its block list is truncated ([`ErrorKind::InvalidContainer`](crate::error::ErrorKind::InvalidContainer))
/// * A block is too large for its 24-bit length ([`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData))
///
/// # Examples
///
/// ```rust
/// use retag::config::WriteOptions;
/// use retag::tag::Tag;
///
/// # fn main() -> retag::error::Result<()> {
/// // The marker, followed by an empty STREAMINFO block flagged as last
/// let flac = b"fLaC\x80\x00\x00\x00";
///
/// let tagged = retag::flac::write_tags(flac, &[Tag::artist("X")], WriteOptions::default())?;
/// assert!(tagged.ends_with(b"ARTIST=X"));
/// # Ok(()) }
/// ```
pub fn write_tags(data: &[u8], tags: &[Tag], write_options: WriteOptions) -> Result<Vec<u8>> {
	write::write_tags(data, tags, write_options)
}

/// Remove the text tags from a FLAC stream
///
/// What happens to the `VORBIS_COMMENT` block is decided by the [`ClearPolicy`](crate::config::ClearPolicy).
/// `PICTURE` blocks are left untouched.
///
/// # Errors
///
/// See [`write_tags`]
pub fn clear_tags(data: &[u8], write_options: WriteOptions) -> Result<Vec<u8>> {
	write::clear_tags(data, write_options)
}
