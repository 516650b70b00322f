use crate::picture::{FRONT_COVER, Picture};
use crate::tag::{ItemKey, Tag, TagContent};

use std::borrow::Cow;

/// Text encoding byte for ISO-8859-1
const LATIN_1: u8 = 0;
/// Text encoding byte for UTF-8
const UTF_8: u8 = 3;

/// The frame ID used for keys without a dedicated frame
pub(crate) const USER_TEXT_FRAME_ID: &str = "TXXX";
/// The frame ID for attached pictures
pub(crate) const PICTURE_FRAME_ID: &str = "APIC";

/// A single ID3v2.4 frame, ready to be written
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Frame<'a> {
	/// A text information frame (`T***`)
	Text { id: &'static str, value: Cow<'a, str> },
	/// A `TXXX` frame, the description holds the caller's key
	UserText { description: &'a str, value: Cow<'a, str> },
	/// An `APIC` frame
	Picture(Picture<'a>),
}

impl<'a> Frame<'a> {
	/// Convert a [`Tag`] to a `Frame`, returning `None` if the tag cannot be written
	pub(crate) fn from_tag(tag: &'a Tag) -> Option<Self> {
		match tag.content()? {
			TagContent::Picture(picture) => Some(Frame::Picture(picture)),
			TagContent::Text(value) => match tag.item_key().and_then(ItemKey::id3v2_frame_id) {
				Some(id) => Some(Frame::Text { id, value }),
				None => Some(Frame::UserText {
					description: tag.key(),
					value,
				}),
			},
		}
	}

	pub(crate) fn id(&self) -> &'static str {
		match self {
			Frame::Text { id, .. } => *id,
			Frame::UserText { .. } => USER_TEXT_FRAME_ID,
			Frame::Picture(_) => PICTURE_FRAME_ID,
		}
	}

	/// The frame content, excluding the frame header
	pub(crate) fn as_bytes(&self) -> Vec<u8> {
		let mut content = Vec::new();

		match self {
			Frame::Text { value, .. } => {
				content.push(UTF_8);
				content.extend(value.as_bytes());
			},
			Frame::UserText { description, value } => {
				content.push(UTF_8);
				content.extend(description.as_bytes());
				content.push(0);
				content.extend(value.as_bytes());
			},
			Frame::Picture(picture) => {
				content.push(LATIN_1);
				content.extend(picture.mime_type.as_str().as_bytes());
				content.push(0);
				content.push(FRONT_COVER);
				// Empty description
				content.push(0);
				content.extend(picture.data);
			},
		}

		content
	}
}
