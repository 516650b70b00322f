use crate::error::Result;
use crate::id3::v2::frame::Frame;
use crate::id3::v2::header::ID3V2_HEADER_SIZE;
use crate::id3::v2::util::synchsafe::synchsafe_bytes;
use crate::tag::Tag;

use std::io::Write;

/// Build a complete ID3v2.4 tag from `tags`
///
/// The header is always written, even if no frames were produced.
pub(crate) fn create_tag(tags: &[Tag]) -> Result<Vec<u8>> {
	let mut frames = Vec::new();
	for frame in tags.iter().filter_map(Frame::from_tag) {
		write_frame(&mut frames, frame.id(), &frame.as_bytes())?;
	}

	let mut id3v2 = Vec::with_capacity(ID3V2_HEADER_SIZE as usize + frames.len());

	// Version 4, revision 0, no flags
	id3v2.write_all(&[b'I', b'D', b'3', 4, 0, 0])?;
	id3v2.write_all(&synchsafe_bytes(frames.len())?)?;
	id3v2.append(&mut frames);

	log::debug!("Created ID3v2.4 tag, size: {}", id3v2.len());
	Ok(id3v2)
}

fn write_frame<W>(writer: &mut W, name: &str, value: &[u8]) -> Result<()>
where
	W: Write,
{
	log::trace!("Writing frame: {name}, size: {}", value.len());

	writer.write_all(name.as_bytes())?;
	writer.write_all(&synchsafe_bytes(value.len())?)?;
	// No frame flags
	writer.write_all(&[0, 0])?;
	writer.write_all(value)?;

	Ok(())
}
