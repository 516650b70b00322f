use std::borrow::Cow;
use std::fmt::{Display, Formatter};

macro_rules! first_key {
	($key:tt $(| $remaining:expr)*) => {
		$key
	};
}

// This is used to create the key/ItemKey maps
//
// First comes the name of the map.
// Ex:
//
// VORBIS_MAP;
//
// This is followed by the key value pairs separated by `=>`, with the key being the
// format-specific key and the value being the appropriate ItemKey variant.
// Ex. "ARTIST" => TrackArtist
//
// Some formats have multiple keys that map to the same ItemKey variant, which can be added with '|'.
// The standard key **must** come first, it is the one used when writing.
//
// Lookups of format-specific keys are case-insensitive.
macro_rules! gen_map {
	(
		$(#[$meta:meta])?
		$NAME:ident;

		$(
			$($key:literal)|+ => $variant:ident
		),+ $(,)?
	) => {
		paste::paste! {
			const [<$NAME _ENTRIES>]: &[(&str, ItemKey)] = &[
				$(
					$(
						($key, ItemKey::$variant),
					)+
				)+
			];

			$(#[$meta])?
			#[allow(non_camel_case_types)]
			struct $NAME;

			$(#[$meta])?
			impl $NAME {
				pub(crate) fn get_item_key(&self, key: &str) -> Option<ItemKey> {
					[<$NAME _ENTRIES>]
						.iter()
						.find(|(k, _)| k.eq_ignore_ascii_case(key))
						.map(|(_, v)| *v)
				}

				pub(crate) fn get_key(&self, item_key: ItemKey) -> Option<&'static str> {
					match item_key {
						$(
							ItemKey::$variant => Some(first_key!($($key)|*)),
						)+
						#[allow(unreachable_patterns)]
						_ => None
					}
				}
			}
		}
	}
}

// The keys callers are expected to use
gen_map!(
	ALIAS_MAP;

	"title"                                       => TrackTitle,
	"artist"                                      => TrackArtist,
	"album"                                       => AlbumTitle,
	"albumartist" | "album_artist" | "album artist" => AlbumArtist,
	"genre"                                       => Genre,
	"date" | "year"                               => RecordingDate,
	"tracknumber" | "track_number" | "track"      => TrackNumber,
	"discnumber" | "disc_number" | "disc"         => DiscNumber,
	"composer"                                    => Composer,
	"comment"                                     => Comment,
	"lyrics"                                      => Lyrics,
	"bpm"                                         => Bpm,
	"copyright"                                   => CopyrightMessage,
	"publisher" | "label"                         => Publisher,
	"encoder" | "encodedby"                       => EncoderSoftware,
	"isrc"                                        => Isrc,
	"albumart" | "album_art" | "coverart" | "cover_art" | "cover" | "picture" => CoverArt
);

// COMM and USLT are not plain text frames (they carry a language), so comments and lyrics
// are written as TXXX
gen_map!(
	ID3V2_MAP;

	"TIT2" => TrackTitle,
	"TPE1" => TrackArtist,
	"TALB" => AlbumTitle,
	"TPE2" => AlbumArtist,
	"TCON" => Genre,
	"TDRC" => RecordingDate,
	"TRCK" => TrackNumber,
	"TPOS" => DiscNumber,
	"TCOM" => Composer,
	"TBPM" => Bpm,
	"TCOP" => CopyrightMessage,
	"TPUB" => Publisher,
	"TSSE" => EncoderSoftware,
	"TSRC" => Isrc,
	"APIC" => CoverArt
);

// Pictures live in their own blocks, there is no field for `CoverArt`
gen_map!(
	VORBIS_MAP;

	"TITLE"                        => TrackTitle,
	"ARTIST"                       => TrackArtist,
	"ALBUM"                        => AlbumTitle,
	"ALBUMARTIST" | "ALBUM ARTIST" => AlbumArtist,
	"GENRE"                        => Genre,
	"DATE"                         => RecordingDate,
	"TRACKNUMBER"                  => TrackNumber,
	"DISCNUMBER"                   => DiscNumber,
	"COMPOSER"                     => Composer,
	"COMMENT" | "DESCRIPTION"      => Comment,
	"LYRICS" | "UNSYNCEDLYRICS"    => Lyrics,
	"BPM"                          => Bpm,
	"COPYRIGHT"                    => CopyrightMessage,
	"LABEL" | "ORGANIZATION"       => Publisher,
	"ENCODER"                      => EncoderSoftware,
	"ISRC"                         => Isrc
);

/// A generic representation of a tag's key
///
/// Callers address tags with plain strings (see [`Tag`](crate::tag::Tag)). Well-known strings
/// resolve to an `ItemKey`, which in turn maps to the format-specific identifier. Keys with no
/// `ItemKey` are written as custom items (`TXXX` frames in ID3v2, uppercased fields in Vorbis
/// comments).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum ItemKey {
	// Titles
	AlbumTitle,
	TrackTitle,

	// People & Organizations
	AlbumArtist,
	TrackArtist,
	Composer,
	Publisher,

	// Numbering
	TrackNumber,
	DiscNumber,

	// Dates
	RecordingDate,

	// Miscellaneous
	Genre,
	Comment,
	Lyrics,
	Bpm,
	CopyrightMessage,
	EncoderSoftware,
	Isrc,

	/// Embedded album art, the only key that accepts binary values
	CoverArt,
}

impl ItemKey {
	/// Resolve a caller-supplied key
	///
	/// The lookup is case-insensitive. Aside from the common names (`"title"`, `"album artist"`,
	/// `"cover"`, ...), the native ID3v2.4 frame IDs and Vorbis comment field names are accepted
	/// as well.
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::tag::ItemKey;
	///
	/// assert_eq!(ItemKey::from_key("Title"), Some(ItemKey::TrackTitle));
	/// assert_eq!(ItemKey::from_key("TPE1"), Some(ItemKey::TrackArtist));
	/// assert_eq!(ItemKey::from_key("ALBUMARTIST"), Some(ItemKey::AlbumArtist));
	/// assert_eq!(ItemKey::from_key("mood"), None);
	/// ```
	pub fn from_key(key: &str) -> Option<Self> {
		ALIAS_MAP
			.get_item_key(key)
			.or_else(|| ID3V2_MAP.get_item_key(key))
			.or_else(|| VORBIS_MAP.get_item_key(key))
	}

	/// The canonical caller-facing name of the key
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::tag::ItemKey;
	///
	/// assert_eq!(ItemKey::CoverArt.as_str(), "albumart");
	/// ```
	pub fn as_str(self) -> &'static str {
		// Every variant has an alias
		ALIAS_MAP.get_key(self).unwrap_or_default()
	}

	/// The ID3v2.4 frame ID for this key, if it has a dedicated frame
	pub fn id3v2_frame_id(self) -> Option<&'static str> {
		ID3V2_MAP.get_key(self)
	}

	/// The Vorbis comment field name for this key, if it has one
	pub fn vorbis_field(self) -> Option<&'static str> {
		VORBIS_MAP.get_key(self)
	}
}

impl Display for ItemKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The kind of a [`TagValue`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
	/// UTF-8 text
	Text,
	/// Raw bytes, only meaningful for cover art
	Binary,
	/// A number, written as text
	Number,
}

/// Represents a tag's value
#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
	/// Any UTF-8 encoded text
	Text(String),
	/// Binary data, only written for [`ItemKey::CoverArt`]
	Binary(Vec<u8>),
	/// A number, stringified when written
	///
	/// `f32` values keep their shortest decimal form (`0.1_f32` is written as `0.1`). Integers
	/// beyond 2^53 lose precision.
	Number(f64),
}

impl TagValue {
	/// Returns the [`TagKind`] of the value
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::tag::{TagKind, TagValue};
	///
	/// assert_eq!(TagValue::from(7_u32).kind(), TagKind::Number);
	/// ```
	pub fn kind(&self) -> TagKind {
		match self {
			TagValue::Text(_) => TagKind::Text,
			TagValue::Binary(_) => TagKind::Binary,
			TagValue::Number(_) => TagKind::Number,
		}
	}

	/// The value as text, stringifying numbers
	///
	/// Returns `None` for [`TagValue::Binary`].
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::tag::TagValue;
	///
	/// assert_eq!(TagValue::from(3_u32).text().as_deref(), Some("3"));
	/// assert_eq!(TagValue::from(120.5_f64).text().as_deref(), Some("120.5"));
	/// assert_eq!(TagValue::from(vec![0xFF, 0xD8]).text(), None);
	/// ```
	pub fn text(&self) -> Option<Cow<'_, str>> {
		match self {
			TagValue::Text(text) => Some(Cow::Borrowed(text)),
			TagValue::Number(number) => Some(Cow::Owned(number.to_string())),
			TagValue::Binary(_) => None,
		}
	}

	/// The value as bytes
	///
	/// Returns `None` for anything but [`TagValue::Binary`].
	pub fn binary(&self) -> Option<&[u8]> {
		match self {
			TagValue::Binary(bytes) => Some(bytes),
			_ => None,
		}
	}
}

impl From<String> for TagValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for TagValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<Vec<u8>> for TagValue {
	fn from(value: Vec<u8>) -> Self {
		Self::Binary(value)
	}
}

impl From<&[u8]> for TagValue {
	fn from(value: &[u8]) -> Self {
		Self::Binary(value.to_vec())
	}
}

macro_rules! impl_from_number {
	($($ty:ty),+) => {
		$(
			impl From<$ty> for TagValue {
				fn from(value: $ty) -> Self {
					Self::Number(f64::from(value))
				}
			}
		)+
	};
}

impl_from_number!(u8, u16, u32, i8, i16, i32, f64);

macro_rules! impl_from_wide_integer {
	($($ty:ty),+) => {
		$(
			impl From<$ty> for TagValue {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}
		)+
	};
}

impl_from_wide_integer!(u64, i64, usize, isize);

impl From<f32> for TagValue {
	fn from(value: f32) -> Self {
		// Go through the shortest decimal form, widening directly turns 0.1 into 0.10000000149011612
		let number = value.to_string().parse().unwrap_or(f64::from(value));
		Self::Number(number)
	}
}
