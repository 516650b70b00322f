//! Various traits for reading and writing to file-like objects

use crate::error::RetagError;

use std::collections::VecDeque;
use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};

/// Provides a method to truncate an object to the specified length
///
/// This is one component of the [`FileLike`] trait, which is used to provide implementors access to
/// [`write_tags_to`](crate::write_tags_to) and [`clear_tags_from`](crate::clear_tags_from).
///
/// Take great care in implementing this for downstream types, as Retag will assume that the
/// container has the new length specified. If this assumption were to be broken, files **will** become corrupted.
///
/// # Examples
///
/// ```rust
/// use retag::io::Truncate;
/// use std::io::Cursor;
///
/// # fn main() -> retag::error::Result<()> {
/// let mut file = Cursor::new(vec![0xFF_u8, 0xFB, 0x90, 0x00, 0x00]);
/// Truncate::truncate(&mut file, 2)?;
///
/// assert_eq!(file.get_ref(), &[0xFF, 0xFB]);
/// # Ok(()) }
/// ```
pub trait Truncate {
	/// The error type of the truncation operation
	type Error: Into<RetagError>;

	/// Truncate a storage object to the specified length
	///
	/// # Errors
	///
	/// Errors depend on the object being truncated, which may not always be fallible.
	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error>;
}

impl Truncate for File {
	type Error = std::io::Error;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.set_len(new_len)
	}
}

impl Truncate for Vec<u8> {
	type Error = std::convert::Infallible;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.truncate(new_len as usize);
		Ok(())
	}
}

impl Truncate for VecDeque<u8> {
	type Error = std::convert::Infallible;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.truncate(new_len as usize);
		Ok(())
	}
}

impl<T> Truncate for Cursor<T>
where
	T: Truncate,
{
	type Error = <T as Truncate>::Error;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.get_mut().truncate(new_len)
	}
}

impl<T> Truncate for Box<T>
where
	T: Truncate,
{
	type Error = <T as Truncate>::Error;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.as_mut().truncate(new_len)
	}
}

impl<T> Truncate for &mut T
where
	T: Truncate,
{
	type Error = <T as Truncate>::Error;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		(**self).truncate(new_len)
	}
}

/// Provides a set of methods to read and write to a file-like object
///
/// This is a combination of the [`Read`], [`Write`], [`Seek`] and [`Truncate`] traits.
/// It is used to provide implementors access to [`write_tags_to`](crate::write_tags_to)
/// and [`clear_tags_from`](crate::clear_tags_from).
///
/// The whole object is rewritten on every call, so any type that can be read, rewound, truncated
/// and written to will work.
///
/// # Examples
///
/// ```rust
/// use retag::file::FileType;
/// use retag::io::FileLike;
/// use std::io::Cursor;
///
/// # fn main() -> retag::error::Result<()> {
/// fn tag_in_memory<F: FileLike>(file: &mut F) -> retag::error::Result<()>
/// where
/// 	retag::error::RetagError: From<<F as retag::io::Truncate>::Error>,
/// {
/// 	retag::clear_tags_from(file, FileType::Mpeg, retag::config::WriteOptions::default())
/// }
///
/// let mut file = Cursor::new(vec![0xFF_u8, 0xFB, 0x90, 0x00]);
/// tag_in_memory(&mut file)?;
/// # Ok(()) }
/// ```
pub trait FileLike: Read + Write + Seek + Truncate
where
	<Self as Truncate>::Error: Into<RetagError>,
{
}

impl<T> FileLike for T
where
	T: Read + Write + Seek + Truncate,
	<T as Truncate>::Error: Into<RetagError>,
{
}
