//! Contains the errors that can arise within Retag
//!
//! The primary error is [`RetagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::file::FileType;

use std::fmt::{Debug, Display, Formatter};
use std::path::{Path, PathBuf};

/// Alias for `Result<T, RetagError>`
pub type Result<T> = std::result::Result<T, RetagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Pre-write validation
	/// The target path does not exist
	FileNotFound,
	/// The target path exists, but cannot be opened for reading
	NotReadable,
	/// The target path exists, but cannot be opened for writing
	NotWritable,

	// File format related errors
	/// No codec is registered for the file's extension
	UnsupportedFormat,
	/// The container could not be decoded (bad signature, truncated block list, etc.)
	InvalidContainer(FileDecodingError),

	// File data related errors
	/// Attempting to write an item that does not fit in its length field
	///
	/// ID3v2 sizes are limited to 28 bits (synchsafe), and FLAC blocks to 24 bits.
	TooMuchData,

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// An error that arises while decoding a file
pub struct FileDecodingError {
	format: FileType,
	description: &'static str,
}

impl FileDecodingError {
	/// Create a `FileDecodingError` from a [`FileType`] and description
	#[must_use]
	pub const fn new(format: FileType, description: &'static str) -> Self {
		Self {
			format,
			description,
		}
	}

	/// Returns the associated [`FileType`]
	pub fn format(&self) -> FileType {
		self.format
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}: {:?}", self.format, self.description)
	}
}

impl Display for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}: {}", self.format, self.description)
	}
}

/// Errors that could occur within Retag
///
/// Errors raised while operating on a path carry that path, see [`RetagError::path`].
pub struct RetagError {
	pub(crate) kind: ErrorKind,
	pub(crate) path: Option<PathBuf>,
}

impl RetagError {
	/// Create a `RetagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::error::{ErrorKind, RetagError};
	///
	/// let unsupported = RetagError::new(ErrorKind::UnsupportedFormat);
	/// assert!(unsupported.path().is_none());
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind, path: None }
	}

	/// Attach the offending path to the error
	///
	/// An existing path is never overwritten, the innermost path wins.
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::error::{ErrorKind, RetagError};
	/// use std::path::Path;
	///
	/// let err = RetagError::new(ErrorKind::FileNotFound).with_path("song.mp3");
	/// assert_eq!(err.path(), Some(Path::new("song.mp3")));
	/// ```
	#[must_use]
	pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
		if self.path.is_none() {
			self.path = Some(path.as_ref().to_path_buf());
		}

		self
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::error::{ErrorKind, RetagError};
	///
	/// let unsupported = RetagError::new(ErrorKind::UnsupportedFormat);
	/// if let ErrorKind::UnsupportedFormat = unsupported.kind() {
	/// 	println!("Only MP3 and FLAC files can be tagged");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the path the error occurred on, if the operation involved one
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}
}

impl std::error::Error for RetagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for RetagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.path {
			Some(ref path) => write!(f, "{:?} ({})", self.kind, path.display()),
			None => write!(f, "{:?}", self.kind),
		}
	}
}

impl From<FileDecodingError> for RetagError {
	fn from(input: FileDecodingError) -> Self {
		Self::new(ErrorKind::InvalidContainer(input))
	}
}

impl From<std::io::Error> for RetagError {
	fn from(input: std::io::Error) -> Self {
		Self::new(ErrorKind::Io(input))
	}
}

impl From<std::convert::Infallible> for RetagError {
	fn from(input: std::convert::Infallible) -> Self {
		match input {}
	}
}

impl Display for RetagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}")?,

			ErrorKind::FileNotFound => write!(f, "File does not exist")?,
			ErrorKind::NotReadable => write!(f, "File is not readable")?,
			ErrorKind::NotWritable => write!(f, "File is not writable")?,
			ErrorKind::UnsupportedFormat => write!(
				f,
				"Unsupported file format, expected one of: {}",
				crate::file::EXTENSIONS.join(", ")
			)?,
			ErrorKind::InvalidContainer(ref file_decode_err) => {
				write!(f, "Invalid container: {file_decode_err}")?
			},
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to write an item too large for its length field"
			)?,
		}

		if let Some(ref path) = self.path {
			write!(f, " ({})", path.display())?;
		}

		Ok(())
	}
}
