use crate::id3::v2::util::synchsafe::SynchsafeInteger;

use byteorder::{BigEndian, ByteOrder};

/// The size of an ID3v2 header, and of its optional footer
pub(crate) const ID3V2_HEADER_SIZE: u32 = 10;

const ID3V2_FOOTER_FLAG: u8 = 0x10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Id3v2Header {
	pub footer: bool,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	/// Parse the header at the start of `bytes`, if there is one
	///
	/// The version is not checked, every ID3v2 revision shares this layout.
	pub(crate) fn parse(bytes: &[u8]) -> Option<Self> {
		let header = bytes.get(..ID3V2_HEADER_SIZE as usize)?;
		if &header[..3] != b"ID3" {
			return None;
		}

		Some(Self {
			footer: header[5] & ID3V2_FOOTER_FLAG == ID3V2_FOOTER_FLAG,
			size: BigEndian::read_u32(&header[6..]).unsynch(),
		})
	}

	/// The total size of the tag, including the header and footer
	pub(crate) fn full_tag_size(self) -> u64 {
		let footer_size = if self.footer { ID3V2_HEADER_SIZE } else { 0 };
		u64::from(self.size) + u64::from(ID3V2_HEADER_SIZE) + u64::from(footer_size)
	}
}

/// Skip over an ID3v2 tag at the start of `bytes`
///
/// If no tag is present, or the tag claims to be larger than the input, the entire input is
/// returned untouched.
pub(crate) fn strip_id3v2(bytes: &[u8]) -> &[u8] {
	let Some(header) = Id3v2Header::parse(bytes) else {
		return bytes;
	};

	let tag_size = header.full_tag_size();
	if tag_size > bytes.len() as u64 {
		log::warn!(
			"ID3v2 tag claims a size of {tag_size} bytes, but the input is only {} bytes long, \
			 treating everything as audio",
			bytes.len()
		);
		return bytes;
	}

	log::debug!("Found an ID3v2 tag, size: {tag_size}");
	&bytes[tag_size as usize..]
}
