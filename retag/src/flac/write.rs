use super::block::{BLOCK_ID_PICTURE, BLOCK_ID_VORBIS_COMMENTS, Block};
use super::read::{FLAC_MARKER, FlacStream};
use crate::config::{ClearPolicy, PicturePolicy, WriteOptions};
use crate::error::Result;
use crate::tag::{ItemKey, Tag, TagContent};

use std::borrow::Cow;

pub(super) fn write_tags(data: &[u8], tags: &[Tag], write_options: WriteOptions) -> Result<Vec<u8>> {
	let stream = FlacStream::read_from(data)?;

	let (comments, pictures) = encode_tags(tags, write_options.vendor)?;
	let blocks = apply_tags(
		stream.blocks,
		comments,
		pictures,
		write_options.picture_policy,
	);

	write_stream(&blocks, stream.audio)
}

pub(super) fn clear_tags(data: &[u8], write_options: WriteOptions) -> Result<Vec<u8>> {
	match write_options.clear_policy {
		ClearPolicy::EmptyVorbisComments => write_tags(data, &[], write_options),
		ClearPolicy::RemoveVorbisComments => {
			let stream = FlacStream::read_from(data)?;
			let blocks = remove_comments(stream.blocks);

			write_stream(&blocks, stream.audio)
		},
	}
}

/// Build the `VORBIS_COMMENT` block and the `PICTURE` blocks for `tags`
fn encode_tags(tags: &[Tag], vendor: &str) -> Result<(Block, Vec<Block>)> {
	let mut comments = Vec::new();
	let mut pictures = Vec::new();

	for tag in tags {
		match tag.content() {
			Some(TagContent::Text(value)) => {
				let field = match tag.item_key().and_then(ItemKey::vorbis_field) {
					Some(field) => Cow::Borrowed(field),
					None => Cow::Owned(tag.key().to_uppercase()),
				};

				comments.push((field, value));
			},
			Some(TagContent::Picture(picture)) => pictures.push(Block::new_picture(&picture)?),
			None => {},
		}
	}

	Ok((Block::new_comments(vendor, comments)?, pictures))
}

/// Place the new blocks into the existing block list
///
/// An existing `VORBIS_COMMENT` block is replaced in place, keeping its position and last-block flag.
/// Otherwise, it is appended. Every picture is appended after that.
fn apply_tags(
	mut blocks: Vec<Block>,
	comments: Block,
	pictures: Vec<Block>,
	picture_policy: PicturePolicy,
) -> Vec<Block> {
	match blocks
		.iter_mut()
		.find(|block| block.ty == BLOCK_ID_VORBIS_COMMENTS)
	{
		Some(existing) => {
			log::debug!("Replacing the existing VORBIS_COMMENT block");
			existing.content = comments.content;
		},
		None => {
			log::debug!("File has no VORBIS_COMMENT block, appending one");
			push_last(&mut blocks, comments);
		},
	}

	if !pictures.is_empty() && picture_policy == PicturePolicy::Replace {
		log::debug!("Removing existing PICTURE blocks");
		blocks.retain(|block| block.ty != BLOCK_ID_PICTURE);
	}

	for picture in pictures {
		push_last(&mut blocks, picture);
	}

	seal_last(&mut blocks);
	blocks
}

fn remove_comments(mut blocks: Vec<Block>) -> Vec<Block> {
	log::debug!("Removing VORBIS_COMMENT blocks");

	blocks.retain(|block| block.ty != BLOCK_ID_VORBIS_COMMENTS);
	seal_last(&mut blocks);

	blocks
}

/// Append `block` as the new last block
fn push_last(blocks: &mut Vec<Block>, mut block: Block) {
	for block in &mut *blocks {
		block.last = false;
	}

	block.last = true;
	blocks.push(block);
}

/// Flag the final block as the last one, if no block is flagged
///
/// Needed when the flagged block was removed, or the input ran out of bytes before a
/// flagged block was found.
fn seal_last(blocks: &mut [Block]) {
	if blocks.iter().any(|block| block.last) {
		return;
	}

	if let Some(block) = blocks.last_mut() {
		block.last = true;
	}
}

fn write_stream(blocks: &[Block], audio: &[u8]) -> Result<Vec<u8>> {
	let mut data = Vec::with_capacity(
		FLAC_MARKER.len()
			+ blocks
				.iter()
				.map(|block| block.content.len() + 4)
				.sum::<usize>()
			+ audio.len(),
	);

	data.extend_from_slice(FLAC_MARKER);
	for block in blocks {
		block.write_to(&mut data)?;
	}
	data.extend_from_slice(audio);

	Ok(data)
}
