//! Write metadata to MP3 and FLAC files.
//!
//! Retag rewrites the tags embedded in an audio file without touching the audio itself. The same
//! list of [`Tag`](tag::Tag)s can be written to any supported format:
//!
//! | Format | Extension | Tag written                                 |
//! |--------|-----------|---------------------------------------------|
//! | MP3    | `mp3`     | ID3v2.4                                     |
//! | FLAC   | `flac`    | Vorbis comments, with `PICTURE` cover art   |
//!
//! Existing tags are never read. Writing replaces all text tags in the file.
//!
//! # Examples
//!
//! ## Writing to a path
//!
//! ```rust,no_run
//! # fn main() -> retag::error::Result<()> {
//! use retag::tag::Tag;
//!
//! // The format is determined by the extension
//! let path = "test.mp3";
//!
//! let tags = [
//! 	Tag::title("Foo title"),
//! 	Tag::artist("Bar artist"),
//! 	Tag::track_number(3),
//! 	// Keys without a dedicated field are written as custom items
//! 	Tag::new("MOOD", "Calm"),
//! ];
//!
//! retag::write_tags(path, &tags)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Removing tags
//!
//! ```rust,no_run
//! # fn main() -> retag::error::Result<()> {
//! use retag::config::{ClearPolicy, WriteOptions};
//!
//! // By default, the VORBIS_COMMENT block of a FLAC file is kept, but emptied
//! retag::clear_tags("test.flac")?;
//!
//! // It can also be removed entirely
//! let options = WriteOptions::new().clear_policy(ClearPolicy::RemoveVorbisComments);
//! retag::clear_tags_with_options("test.flac", options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing in memory
//!
//! ```rust
//! # fn main() -> retag::error::Result<()> {
//! use retag::config::WriteOptions;
//! use retag::file::FileType;
//! use retag::tag::Tag;
//!
//! // A FLAC stream with an empty STREAMINFO block, followed by some audio
//! let flac = b"fLaC\x80\x00\x00\x00\xFF\xF8";
//!
//! let tagged = FileType::Flac.write_tags(flac, &[Tag::artist("X")], WriteOptions::default())?;
//! assert!(tagged.ends_with(b"ARTIST=X\xFF\xF8"));
//! # Ok(())
//! # }
//! ```
//!
//! # Important format-specific notes
//!
//! Be sure to read the module documentation of each format ([`mpeg`], [`flac`]) to see important notes and warnings.

pub mod config;
pub mod error;
pub mod file;
pub mod flac;
pub mod id3;
pub(crate) mod macros;
pub mod mpeg;
pub mod picture;
pub mod tag;
mod util;
mod write;

pub use util::io;

pub use write::{
	clear_tags, clear_tags_from, clear_tags_with_options, is_supported, supported_extensions,
	write_tag, write_tag_with_options, write_tags, write_tags_to, write_tags_with_options,
};
