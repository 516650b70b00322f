use super::block::Block;
use crate::error::Result;
use crate::macros::decode_err;

pub(super) const FLAC_MARKER: &[u8; 4] = b"fLaC";

/// The metadata blocks of a FLAC stream, and the audio that follows them
#[derive(Debug)]
pub(super) struct FlacStream<'a> {
	pub(super) blocks: Vec<Block>,
	pub(super) audio: &'a [u8],
}

impl<'a> FlacStream<'a> {
	/// Split `data` into its metadata blocks and audio
	///
	/// Blocks are read until one is flagged as the last, or the input is exhausted. Everything
	/// after that is audio, and is never inspected.
	pub(super) fn read_from(data: &'a [u8]) -> Result<Self> {
		let Some(mut data) = data.strip_prefix(FLAC_MARKER) else {
			decode_err!(@BAIL Flac, "File missing \"fLaC\" stream marker");
		};

		log::debug!("File verified to be FLAC");

		let mut blocks = Vec::new();
		while !data.is_empty() {
			let block = Block::read(&mut data)?;
			let last = block.last;

			blocks.push(block);
			if last {
				break;
			}
		}

		log::debug!(
			"Read {} metadata blocks, audio size: {}",
			blocks.len(),
			data.len()
		);

		Ok(Self {
			blocks,
			audio: data,
		})
	}
}
