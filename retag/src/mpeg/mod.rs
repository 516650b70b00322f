//! Items for MPEG audio (MP3)
//!
//! ## File notes
//!
//! * Only a leading ID3v2 tag is handled. It is written as ID3v2.4, see [`crate::id3::v2`].
//! * The audio frames are never inspected, everything after the tag is copied verbatim.
//! * A tag claiming to be larger than the file is considered part of the audio.

use crate::error::Result;
use crate::id3::v2::header::strip_id3v2;
use crate::id3::v2::write::create_tag;
use crate::tag::Tag;

/// Replace the ID3v2 tag of an MP3 stream
///
/// Any existing ID3v2 tag is discarded, and a new ID3v2.4 tag holding `tags` is placed in front
/// of the audio. A tag header is written even if none of `tags` produced a frame.
///
/// # Errors
///
/// A frame or the tag as a whole is too large for a synchsafe size ([`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData))
///
/// # Examples
///
/// ```rust
/// use retag::tag::Tag;
///
/// # fn main() -> retag::error::Result<()> {
/// let audio = [0xFF, 0xFB, 0x90, 0x00];
/// let tagged = retag::mpeg::write_tags(&audio, &[Tag::title("Foo title")])?;
///
/// assert!(tagged.starts_with(b"ID3\x04\x00"));
/// assert!(tagged.ends_with(&audio));
/// # Ok(()) }
/// ```
pub fn write_tags(bytes: &[u8], tags: &[Tag]) -> Result<Vec<u8>> {
	let audio = strip_id3v2(bytes);

	let mut output = create_tag(tags)?;
	output.extend_from_slice(audio);

	Ok(output)
}

/// Remove the ID3v2 tag of an MP3 stream, leaving only the audio
///
/// Input without a (valid) tag is returned unchanged.
///
/// # Examples
///
/// ```rust
/// let audio = [0xFF, 0xFB, 0x90, 0x00];
/// assert_eq!(retag::mpeg::clear_tags(&audio), audio);
/// ```
pub fn clear_tags(bytes: &[u8]) -> Vec<u8> {
	strip_id3v2(bytes).to_vec()
}
