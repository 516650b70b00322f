/// Options to control how Retag writes to a file
///
/// This acts as a dumping ground for all sorts of format-specific settings. As such, this is best
/// used as an application global config that gets set once.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) vendor: &'static str,
	pub(crate) picture_policy: PicturePolicy,
	pub(crate) clear_policy: ClearPolicy,
}

impl WriteOptions {
	/// Default vendor string written to FLAC `VORBIS_COMMENT` blocks
	pub const DEFAULT_VENDOR: &'static str = "retag";

	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			vendor: Self::DEFAULT_VENDOR,
			picture_policy: PicturePolicy::Append,
			clear_policy: ClearPolicy::EmptyVorbisComments,
		}
	}

	/// Set the vendor string of FLAC `VORBIS_COMMENT` blocks
	///
	/// The vendor string is always rewritten, the one already present in the file is discarded.
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::config::WriteOptions;
	///
	/// let options = WriteOptions::new().vendor("my-tagger 1.0");
	/// ```
	pub const fn vendor(mut self, vendor: &'static str) -> Self {
		self.vendor = vendor;
		self
	}

	/// How FLAC `PICTURE` blocks already in the file are treated when writing cover art
	///
	/// See [`PicturePolicy`].
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::config::{PicturePolicy, WriteOptions};
	///
	/// // Only ever keep the cover art from the latest write
	/// let options = WriteOptions::new().picture_policy(PicturePolicy::Replace);
	/// ```
	pub const fn picture_policy(mut self, picture_policy: PicturePolicy) -> Self {
		self.picture_policy = picture_policy;
		self
	}

	/// What clearing a FLAC file does to its `VORBIS_COMMENT` block
	///
	/// See [`ClearPolicy`].
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::config::{ClearPolicy, WriteOptions};
	///
	/// let options = WriteOptions::new().clear_policy(ClearPolicy::RemoveVorbisComments);
	/// ```
	pub const fn clear_policy(mut self, clear_policy: ClearPolicy) -> Self {
		self.clear_policy = clear_policy;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	///     vendor: "retag",
	///     picture_policy: PicturePolicy::Append,
	///     clear_policy: ClearPolicy::EmptyVorbisComments,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

/// The treatment of existing FLAC `PICTURE` blocks when new cover art is written
///
/// This has no effect on MP3 files, as their entire tag is rebuilt on every write.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum PicturePolicy {
	/// Every cover art tag appends a new `PICTURE` block, existing blocks are kept
	///
	/// Writing the same cover twice will leave two identical blocks in the file.
	#[default]
	Append,
	/// Existing `PICTURE` blocks are dropped before the new ones are appended
	///
	/// Only applies when the write carries at least one cover art tag.
	Replace,
}

/// The treatment of the FLAC `VORBIS_COMMENT` block when clearing a file
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ClearPolicy {
	/// The block is kept, holding only the vendor string and zero comments
	#[default]
	EmptyVorbisComments,
	/// The block is removed from the file entirely
	RemoveVorbisComments,
}
