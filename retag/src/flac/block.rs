use crate::error::Result;
use crate::macros::{decode_err, err};
use crate::picture::Picture;

use std::borrow::Cow;
use std::io::Write;

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};

pub(in crate::flac) const BLOCK_ID_VORBIS_COMMENTS: u8 = 4;
pub(in crate::flac) const BLOCK_ID_PICTURE: u8 = 6;

/// The largest block body that fits in the 24-bit length field
const MAX_BLOCK_SIZE: usize = 0xFF_FFFF;
const BLOCK_HEADER_SIZE: usize = 4;

/// A single FLAC metadata block
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Block {
	pub(crate) ty: u8,
	pub(crate) last: bool,
	pub(crate) content: Vec<u8>,
}

impl Block {
	/// Read a block from the front of `data`, advancing it past the block
	pub(crate) fn read(data: &mut &[u8]) -> Result<Self> {
		if data.len() < BLOCK_HEADER_SIZE {
			decode_err!(@BAIL Flac, "Block header runs past the end of the file");
		}

		let byte = data[0];
		let last = (byte & 0x80) != 0;
		let ty = byte & 0x7F;

		let size = BigEndian::read_u24(&data[1..BLOCK_HEADER_SIZE]) as usize;
		log::trace!("Reading FLAC block, type: {ty}, size: {size}");

		let Some(content) = data.get(BLOCK_HEADER_SIZE..BLOCK_HEADER_SIZE + size) else {
			decode_err!(@BAIL Flac, "Block content runs past the end of the file");
		};

		let content = content.to_vec();
		*data = &data[BLOCK_HEADER_SIZE + size..];

		Ok(Self { ty, last, content })
	}

	/// Create a `VORBIS_COMMENT` block
	///
	/// There is no framing bit, that is only used in Ogg streams.
	pub(crate) fn new_comments<'a, I>(vendor: &str, items: I) -> Result<Self>
	where
		I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
	{
		let mut content = Vec::new();

		let Ok(vendor_len) = u32::try_from(vendor.len()) else {
			err!(TooMuchData);
		};

		content.write_u32::<LittleEndian>(vendor_len)?;
		content.write_all(vendor.as_bytes())?;

		// The count is filled in once all comments are written
		let count_pos = content.len();
		content.write_u32::<LittleEndian>(0)?;

		let mut count = 0_u32;
		for (field, value) in items {
			let comment = format!("{field}={value}");

			let Ok(bytes_len) = u32::try_from(comment.len()) else {
				err!(TooMuchData);
			};

			count += 1;

			content.write_u32::<LittleEndian>(bytes_len)?;
			content.write_all(comment.as_bytes())?;
		}

		LittleEndian::write_u32(&mut content[count_pos..count_pos + 4], count);

		Ok(Self {
			ty: BLOCK_ID_VORBIS_COMMENTS,
			last: false,
			content,
		})
	}

	/// Create a `PICTURE` block
	pub(crate) fn new_picture(picture: &Picture<'_>) -> Result<Self> {
		Ok(Self {
			ty: BLOCK_ID_PICTURE,
			last: false,
			content: picture.as_flac_bytes()?,
		})
	}

	pub(crate) fn write_to<W>(&self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		if self.content.len() > MAX_BLOCK_SIZE {
			err!(TooMuchData);
		}

		writer.write_u8((u8::from(self.last) << 7) | self.ty)?;
		writer.write_u24::<BigEndian>(self.content.len() as u32)?;
		writer.write_all(&self.content)?;

		log::trace!(
			"Wrote a block (ty: {}, size: {}, last: {})",
			self.ty,
			self.content.len(),
			self.last
		);

		Ok(())
	}
}
