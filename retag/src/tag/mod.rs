//! Utilities for generic tag handling
//!
//! A [`Tag`] is a single `key = value` record. The same list of tags can be written to any
//! supported format, each codec maps the keys to its own identifiers (see [`ItemKey`]).
//!
//! ## Cover art
//!
//! Binary values are only written under a cover art key ([`ItemKey::CoverArt`], ex. `"albumart"`
//! or `"cover"`). Any other binary tag, as well as a text value under a cover art key, is
//! **silently dropped** by every codec.

mod item;

use crate::picture::Picture;

use std::borrow::Cow;

// Exports
pub use item::{ItemKey, TagKind, TagValue};

macro_rules! impl_text_constructors {
	($($item_key:ident => $name:ident),+ $(,)?) => {
		paste::paste! {
			$(
				#[doc = "Creates a `" $name "` tag, stored under [`ItemKey::" $item_key "`]"]
				pub fn $name(value: impl Into<String>) -> Self {
					Self::new(ItemKey::$item_key.as_str(), TagValue::Text(value.into()))
				}
			)+
		}
	}
}

/// A single metadata record
///
/// ## Usage
///
/// ```rust
/// use retag::tag::{ItemKey, Tag, TagKind, TagValue};
///
/// // Well-known keys
/// let title = Tag::title("Foo title");
/// assert_eq!(title.item_key(), Some(ItemKey::TrackTitle));
///
/// // Any key can be used, unknown keys become custom items
/// let mood = Tag::new("MOOD", "Mellow");
/// assert_eq!(mood.item_key(), None);
///
/// // Numbers are written as text
/// let bpm = Tag::new("bpm", 128_u32);
/// assert_eq!(bpm.kind(), TagKind::Number);
///
/// // Cover art is the only binary item that gets written
/// let cover = Tag::cover_art(vec![0xFF, 0xD8, 0xFF, 0xE0]);
/// assert_eq!(cover.kind(), TagKind::Binary);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
	key: String,
	value: TagValue,
}

/// What a [`Tag`] contributes to a file once written
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TagContent<'a> {
	Text(Cow<'a, str>),
	Picture(Picture<'a>),
}

impl Tag {
	/// Create a new `Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::tag::{Tag, TagValue};
	///
	/// let tag = Tag::new("artist", "Foo artist");
	/// assert_eq!(tag.key(), "artist");
	/// assert_eq!(tag.value(), &TagValue::Text(String::from("Foo artist")));
	/// ```
	pub fn new(key: impl Into<String>, value: impl Into<TagValue>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}

	impl_text_constructors! {
		TrackTitle  => title,
		TrackArtist => artist,
		AlbumTitle  => album,
		AlbumArtist => album_artist,
		Genre       => genre,
		Composer    => composer,
		Comment     => comment,
	}

	/// Creates a track number tag, stored under [`ItemKey::TrackNumber`]
	pub fn track_number(number: u32) -> Self {
		Self::new(ItemKey::TrackNumber.as_str(), number)
	}

	/// Creates a cover art tag from raw image bytes, stored under [`ItemKey::CoverArt`]
	///
	/// The MIME type is sniffed from the data, see [`MimeType::from_bin`](crate::picture::MimeType::from_bin).
	pub fn cover_art(data: Vec<u8>) -> Self {
		Self::new(ItemKey::CoverArt.as_str(), TagValue::Binary(data))
	}

	/// Returns the key, exactly as supplied
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns a reference to the [`TagValue`]
	pub fn value(&self) -> &TagValue {
		&self.value
	}

	/// Consumes the `Tag`, returning its [`TagValue`]
	pub fn into_value(self) -> TagValue {
		self.value
	}

	/// Returns the [`TagKind`] of the value
	pub fn kind(&self) -> TagKind {
		self.value.kind()
	}

	/// Resolves the key to an [`ItemKey`], see [`ItemKey::from_key`]
	pub fn item_key(&self) -> Option<ItemKey> {
		ItemKey::from_key(&self.key)
	}

	/// Whether the key denotes album art
	pub fn is_cover_art(&self) -> bool {
		self.item_key() == Some(ItemKey::CoverArt)
	}

	/// Classify the tag, returning `None` if it cannot be written to any format
	pub(crate) fn content(&self) -> Option<TagContent<'_>> {
		if self.is_cover_art() {
			let Some(data) = self.value.binary() else {
				log::warn!("Discarding cover art tag `{}`, expected binary data", self.key);
				return None;
			};

			return Some(TagContent::Picture(Picture::from_bytes(data)));
		}

		match self.value.text() {
			Some(text) => Some(TagContent::Text(text)),
			None => {
				log::warn!(
					"Discarding binary tag `{}`, only cover art may hold binary data",
					self.key
				);
				None
			},
		}
	}
}
