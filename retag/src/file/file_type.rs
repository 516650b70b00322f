use crate::config::WriteOptions;
use crate::error::Result;
use crate::tag::Tag;

use std::ffi::OsStr;
use std::path::Path;

/// List of supported audio extensions
///
/// This contains the extensions of all supported [`FileType`]s, and can be used a filter
/// when scanning directories.
///
/// # Examples
///
/// ```rust,no_run
/// use retag::file::EXTENSIONS;
/// use retag::tag::Tag;
/// use std::fs;
///
/// # fn main() -> retag::error::Result<()> {
/// for entry in fs::read_dir(".")? {
/// 	let entry = entry?;
///
/// 	let path = entry.path();
/// 	let Some(extension) = path.extension() else {
/// 		continue;
/// 	};
///
/// 	// Skip any non-audio file extensions
/// 	if !EXTENSIONS.iter().any(|e| extension.eq_ignore_ascii_case(e)) {
/// 		continue;
/// 	}
///
/// 	retag::write_tag(path, &Tag::genre("Ambient"))?;
/// }
/// # Ok(()) }
/// ```
pub const EXTENSIONS: &[&str] = &[
	// Also update `FileType::from_ext()` below
	"mp3", "flac",
];

/// The type of file to write
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[non_exhaustive]
pub enum FileType {
	/// MP3, tagged with ID3v2.4
	Mpeg,
	/// FLAC, tagged with Vorbis comments and picture blocks
	Flac,
}

impl FileType {
	/// Attempts to extract a [`FileType`] from an extension
	///
	/// The comparison is case-insensitive.
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::file::FileType;
	///
	/// assert_eq!(FileType::from_ext("mp3"), Some(FileType::Mpeg));
	/// assert_eq!(FileType::from_ext("FLAC"), Some(FileType::Flac));
	/// assert_eq!(FileType::from_ext("ogg"), None);
	/// ```
	pub fn from_ext<E>(ext: E) -> Option<Self>
	where
		E: AsRef<OsStr>,
	{
		let ext = ext.as_ref().to_str()?.to_ascii_lowercase();

		// Also update `EXTENSIONS` above
		match ext.as_str() {
			"mp3" => Some(Self::Mpeg),
			"flac" => Some(Self::Flac),
			_ => None,
		}
	}

	/// Attempts to determine a [`FileType`] from a path
	///
	/// The path must end with `.` followed by one of the [`EXTENSIONS`], compared case-insensitively.
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::file::FileType;
	/// use std::path::Path;
	///
	/// let path = Path::new("path/to/my.mp3");
	/// assert_eq!(FileType::from_path(path), Some(FileType::Mpeg));
	///
	/// let path = Path::new("path/to/.Flac");
	/// assert_eq!(FileType::from_path(path), Some(FileType::Flac));
	///
	/// let path = Path::new("path/to/mp3");
	/// assert_eq!(FileType::from_path(path), None);
	/// ```
	pub fn from_path<P>(path: P) -> Option<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref().to_string_lossy();
		let (_, ext) = path.rsplit_once('.')?;

		Self::from_ext(ext)
	}

	/// Whether the path can be handled by this `FileType`
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::file::FileType;
	///
	/// assert!(FileType::Flac.supports_file("song.flac"));
	/// assert!(!FileType::Flac.supports_file("song.mp3"));
	/// ```
	pub fn supports_file<P>(self, path: P) -> bool
	where
		P: AsRef<Path>,
	{
		Self::from_path(path) == Some(self)
	}

	/// Write `tags` to the file content in `data`, returning the new content
	///
	/// See [`mpeg::write_tags`](crate::mpeg::write_tags) and [`flac::write_tags`](crate::flac::write_tags).
	///
	/// # Errors
	///
	/// * The content is not a valid FLAC stream ([`ErrorKind::InvalidContainer`](crate::error::ErrorKind::InvalidContainer))
	/// * A tag is too large to be written ([`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData))
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::config::WriteOptions;
	/// use retag::file::FileType;
	/// use retag::tag::Tag;
	///
	/// # fn main() -> retag::error::Result<()> {
	/// let tagged = FileType::Mpeg.write_tags(&[0xFF, 0xFB], &[Tag::title("Foo")], WriteOptions::default())?;
	/// assert!(tagged.starts_with(b"ID3"));
	/// # Ok(()) }
	/// ```
	pub fn write_tags(self, data: &[u8], tags: &[Tag], write_options: WriteOptions) -> Result<Vec<u8>> {
		log::debug!("Writing {} tags to a {:?} file", tags.len(), self);

		match self {
			FileType::Mpeg => crate::mpeg::write_tags(data, tags),
			FileType::Flac => crate::flac::write_tags(data, tags, write_options),
		}
	}

	/// Remove the tags from the file content in `data`, returning the new content
	///
	/// See [`mpeg::clear_tags`](crate::mpeg::clear_tags) and [`flac::clear_tags`](crate::flac::clear_tags).
	///
	/// # Errors
	///
	/// See [`FileType::write_tags`]
	pub fn clear_tags(self, data: &[u8], write_options: WriteOptions) -> Result<Vec<u8>> {
		log::debug!("Clearing the tags of a {:?} file", self);

		match self {
			FileType::Mpeg => Ok(crate::mpeg::clear_tags(data)),
			FileType::Flac => crate::flac::clear_tags(data, write_options),
		}
	}
}
