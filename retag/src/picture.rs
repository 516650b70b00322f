//! Format-agnostic picture handling
//!
//! Cover art is supplied as raw image bytes. The MIME type is never taken from the caller, it is
//! sniffed from the leading bytes of the image (see [`MimeType::from_bin`]).

use crate::error::Result;
use crate::macros::err;

use std::fmt::{Display, Formatter};

use byteorder::{BigEndian, WriteBytesExt};

/// The picture type written for every cover art tag ("Cover (front)")
pub const FRONT_COVER: u8 = 3;

/// Mime types for pictures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MimeType {
	/// PNG image
	Png,
	/// JPEG image
	Jpeg,
}

impl MimeType {
	/// Get a `MimeType` from the leading bytes of an image
	///
	/// Only JPEG and PNG are recognized, anything else is assumed to be a JPEG.
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::picture::MimeType;
	///
	/// assert_eq!(MimeType::from_bin(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]), MimeType::Png);
	/// assert_eq!(MimeType::from_bin(&[0xFF, 0xD8, 0xFF, 0xE0]), MimeType::Jpeg);
	///
	/// // Unknown or empty data falls back to JPEG
	/// assert_eq!(MimeType::from_bin(b"GIF89a"), MimeType::Jpeg);
	/// assert_eq!(MimeType::from_bin(&[]), MimeType::Jpeg);
	/// ```
	pub fn from_bin(bytes: &[u8]) -> Self {
		match bytes {
			[0x89, b'P', b'N', b'G', ..] => Self::Png,
			// `FF D8`, or anything unrecognized
			_ => Self::Jpeg,
		}
	}

	/// Get a &str from a `MimeType`
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::picture::MimeType;
	///
	/// assert_eq!(MimeType::Png.as_str(), "image/png");
	/// ```
	pub fn as_str(self) -> &'static str {
		match self {
			MimeType::Png => "image/png",
			MimeType::Jpeg => "image/jpeg",
		}
	}
}

impl Display for MimeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Cover art borrowed from a [`Tag`](crate::tag::Tag)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Picture<'a> {
	pub(crate) mime_type: MimeType,
	pub(crate) data: &'a [u8],
}

impl<'a> Picture<'a> {
	pub(crate) fn from_bytes(data: &'a [u8]) -> Self {
		Self {
			mime_type: MimeType::from_bin(data),
			data,
		}
	}

	/// Convert a [`Picture`] to the body of a FLAC `METADATA_BLOCK_PICTURE`
	///
	/// NOTES:
	///
	/// * This does not include the METADATA_BLOCK_HEADER
	/// * The description is always empty, and the dimensions, color depth and
	///   color count are all written as zero ("unknown")
	pub(crate) fn as_flac_bytes(&self) -> Result<Vec<u8>> {
		let mime_str = self.mime_type.as_str();

		let Ok(data_len) = u32::try_from(self.data.len()) else {
			err!(TooMuchData);
		};

		let mut data = Vec::with_capacity(32 + mime_str.len() + self.data.len());

		data.write_u32::<BigEndian>(u32::from(FRONT_COVER))?;
		data.write_u32::<BigEndian>(mime_str.len() as u32)?;
		data.extend(mime_str.as_bytes());

		// Description
		data.write_u32::<BigEndian>(0)?;

		// Width, height, color depth, number of colors
		data.extend([0; 16]);

		data.write_u32::<BigEndian>(data_len)?;
		data.extend(self.data);

		Ok(data)
	}
}
