//! Writing tags to paths and file-like objects

use crate::config::WriteOptions;
use crate::error::{ErrorKind, RetagError, Result};
use crate::file::{EXTENSIONS, FileType};
use crate::tag::Tag;
use crate::util::io::{FileLike, Truncate};

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind as IoErrorKind, SeekFrom};
use std::path::Path;

/// Write `tags` to the file at `path`, replacing all existing text tags
///
/// This is equivalent to [`write_tags_with_options`] with the default [`WriteOptions`].
///
/// # Errors
///
/// See [`write_tags_with_options`]
///
/// # Examples
///
/// ```rust,no_run
/// use retag::tag::Tag;
///
/// # fn main() -> retag::error::Result<()> {
/// let tags = [Tag::title("Foo title"), Tag::artist("Bar artist"), Tag::new("MOOD", "Calm")];
/// retag::write_tags("song.flac", &tags)?;
/// # Ok(()) }
/// ```
pub fn write_tags<P>(path: P, tags: &[Tag]) -> Result<()>
where
	P: AsRef<Path>,
{
	write_tags_with_options(path, tags, WriteOptions::default())
}

/// Write `tags` to the file at `path`
///
/// The whole file is read, the tags are written in memory, and the file is overwritten. There is
/// no temporary file, an interruption during the write can leave the file truncated.
///
/// # Errors
///
/// * `path` does not exist ([`ErrorKind::FileNotFound`])
/// * `path` cannot be opened for reading ([`ErrorKind::NotReadable`]) or writing ([`ErrorKind::NotWritable`])
/// * The extension of `path` is not one of the [`EXTENSIONS`] ([`ErrorKind::UnsupportedFormat`])
/// * The file content is invalid, or a tag is too large (see [`FileType::write_tags`])
///
/// All errors carry `path`, see [`RetagError::path`].
///
/// # Examples
///
/// ```rust,no_run
/// use retag::config::{PicturePolicy, WriteOptions};
/// use retag::tag::Tag;
///
/// # fn main() -> retag::error::Result<()> {
/// let cover = std::fs::read("cover.png")?;
/// let options = WriteOptions::new().picture_policy(PicturePolicy::Replace);
///
/// retag::write_tags_with_options("song.flac", &[Tag::cover_art(cover)], options)?;
/// # Ok(()) }
/// ```
pub fn write_tags_with_options<P>(path: P, tags: &[Tag], write_options: WriteOptions) -> Result<()>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	inner_write(path, |file, file_type| {
		write_tags_to(file, file_type, tags, write_options)
	})
	.map_err(|e| e.with_path(path))
}

/// Write a single tag to the file at `path`
///
/// This is the same as calling [`write_tags`] with a single tag, so all existing text tags are
/// still replaced.
///
/// # Errors
///
/// See [`write_tags_with_options`]
pub fn write_tag<P>(path: P, tag: &Tag) -> Result<()>
where
	P: AsRef<Path>,
{
	write_tags(path, std::slice::from_ref(tag))
}

/// Write a single tag to the file at `path`, with custom [`WriteOptions`]
///
/// # Errors
///
/// See [`write_tags_with_options`]
pub fn write_tag_with_options<P>(path: P, tag: &Tag, write_options: WriteOptions) -> Result<()>
where
	P: AsRef<Path>,
{
	write_tags_with_options(path, std::slice::from_ref(tag), write_options)
}

/// Remove the tags from the file at `path`
///
/// This is equivalent to [`clear_tags_with_options`] with the default [`WriteOptions`].
///
/// # Errors
///
/// See [`write_tags_with_options`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> retag::error::Result<()> {
/// retag::clear_tags("song.mp3")?;
/// # Ok(()) }
/// ```
pub fn clear_tags<P>(path: P) -> Result<()>
where
	P: AsRef<Path>,
{
	clear_tags_with_options(path, WriteOptions::default())
}

/// Remove the tags from the file at `path`, with custom [`WriteOptions`]
///
/// * MP3: The ID3v2 tag is removed entirely
/// * FLAC: The text tags are removed, see [`ClearPolicy`](crate::config::ClearPolicy)
///
/// # Errors
///
/// See [`write_tags_with_options`]
pub fn clear_tags_with_options<P>(path: P, write_options: WriteOptions) -> Result<()>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	inner_write(path, |file, file_type| {
		clear_tags_from(file, file_type, write_options)
	})
	.map_err(|e| e.with_path(path))
}

/// Whether the path has a supported extension
///
/// The file itself is not checked.
///
/// # Examples
///
/// ```rust
/// assert!(retag::is_supported("song.MP3"));
/// assert!(!retag::is_supported("song.ogg"));
/// ```
pub fn is_supported<P>(path: P) -> bool
where
	P: AsRef<Path>,
{
	FileType::from_path(path).is_some()
}

/// The extensions of all supported formats, see [`EXTENSIONS`]
pub fn supported_extensions() -> &'static [&'static str] {
	EXTENSIONS
}

/// Write `tags` to a file-like object
///
/// The entire content of `file` is read, and `file` is rewritten from the start. If nothing
/// changed, `file` is left untouched.
///
/// # Errors
///
/// * Reading, truncating, or writing `file` fails
/// * See [`FileType::write_tags`]
///
/// # Examples
///
/// ```rust
/// use retag::config::WriteOptions;
/// use retag::file::FileType;
/// use retag::tag::Tag;
/// use std::io::Cursor;
///
/// # fn main() -> retag::error::Result<()> {
/// let mut file = Cursor::new(vec![0xFF_u8, 0xFB, 0x90, 0x00]);
/// retag::write_tags_to(&mut file, FileType::Mpeg, &[Tag::title("Foo")], WriteOptions::default())?;
///
/// assert!(file.get_ref().starts_with(b"ID3"));
/// # Ok(()) }
/// ```
pub fn write_tags_to<F>(
	file: &mut F,
	file_type: FileType,
	tags: &[Tag],
	write_options: WriteOptions,
) -> Result<()>
where
	F: FileLike,
	RetagError: From<<F as Truncate>::Error>,
{
	rewrite(file, |content| {
		file_type.write_tags(content, tags, write_options)
	})
}

/// Remove the tags from a file-like object
///
/// # Errors
///
/// See [`write_tags_to`]
pub fn clear_tags_from<F>(file: &mut F, file_type: FileType, write_options: WriteOptions) -> Result<()>
where
	F: FileLike,
	RetagError: From<<F as Truncate>::Error>,
{
	rewrite(file, |content| file_type.clear_tags(content, write_options))
}

fn rewrite<F, T>(file: &mut F, transform: T) -> Result<()>
where
	F: FileLike,
	RetagError: From<<F as Truncate>::Error>,
	T: FnOnce(&[u8]) -> Result<Vec<u8>>,
{
	file.rewind()?;

	let mut content = Vec::new();
	file.read_to_end(&mut content)?;

	let new_content = transform(&content)?;
	if new_content == content {
		log::debug!("Nothing to do");
		return Ok(());
	}

	file.seek(SeekFrom::Start(0))?;
	file.truncate(0)?;
	file.write_all(&new_content)?;
	file.flush()?;

	Ok(())
}

fn inner_write<W>(path: &Path, write: W) -> Result<()>
where
	W: FnOnce(&mut File, FileType) -> Result<()>,
{
	let mut file = open_for_write(path)?;

	let Some(file_type) = FileType::from_path(path) else {
		return Err(RetagError::new(ErrorKind::UnsupportedFormat));
	};

	log::debug!("Resolved {} as {:?}", path.display(), file_type);
	write(&mut file, file_type)
}

fn open_for_write(path: &Path) -> Result<File> {
	match OpenOptions::new().read(true).write(true).open(path) {
		Ok(file) => Ok(file),
		Err(e) if e.kind() == IoErrorKind::NotFound => {
			Err(RetagError::new(ErrorKind::FileNotFound))
		},
		Err(e) if e.kind() == IoErrorKind::PermissionDenied => {
			// Distinguish between the two halves of the permission check
			if File::open(path).is_err() {
				return Err(RetagError::new(ErrorKind::NotReadable));
			}

			Err(RetagError::new(ErrorKind::NotWritable))
		},
		Err(e) => Err(e.into()),
	}
}
