use crate::util::{
	FLAC_AUDIO, JPEG_DATA, PADDING, PICTURE, PNG_DATA, RawBlock, STREAMINFO, VORBIS_COMMENTS,
	block_types, flac_stream, minimal_flac, read_comments, read_flac, temp_file,
	verify_last_flag,
};

use std::io::{Cursor, Read, Seek};

use retag::config::{ClearPolicy, PicturePolicy, WriteOptions};
use retag::error::ErrorKind;
use retag::file::FileType;
use retag::tag::Tag;

fn write(stream: &[u8], tags: &[Tag]) -> Vec<u8> {
	FileType::Flac
		.write_tags(stream, tags, WriteOptions::default())
		.unwrap()
}

fn streaminfo_and_padding() -> Vec<u8> {
	flac_stream(&[
		RawBlock {
			ty: STREAMINFO,
			last: false,
			content: vec![0x10; 34],
		},
		RawBlock {
			ty: PADDING,
			last: true,
			content: vec![0; 16],
		},
	])
}

#[test_log::test]
fn minimal_file() {
	let output = write(&minimal_flac(), &[Tag::new("ARTIST", "X")]);
	let (blocks, audio) = read_flac(&output);

	assert_eq!(block_types(&blocks), [STREAMINFO, VORBIS_COMMENTS]);
	assert!(!blocks[0].last);
	assert!(blocks[1].last);
	assert_eq!(audio, FLAC_AUDIO);

	let (vendor, comments) = read_comments(&blocks[1].content);
	assert_eq!(vendor, "retag");
	assert_eq!(comments, ["ARTIST=X"]);
}

#[test_log::test]
fn field_names() {
	let output = write(
		&minimal_flac(),
		&[
			Tag::title("Foo title"),
			Tag::new("album artist", "Bar"),
			Tag::track_number(7),
			Tag::new("mood", "Calm"),
		],
	);

	let (blocks, _) = read_flac(&output);
	let (_, comments) = read_comments(&blocks[1].content);

	assert_eq!(
		comments,
		[
			"TITLE=Foo title",
			"ALBUMARTIST=Bar",
			"TRACKNUMBER=7",
			"MOOD=Calm"
		]
	);
}

#[test_log::test]
fn numeric_fields() {
	let output = write(
		&minimal_flac(),
		&[Tag::new("replaygain_track_gain", -6.2_f32), Tag::new("date", 2024_usize)],
	);

	let (blocks, _) = read_flac(&output);
	let (_, comments) = read_comments(&blocks[1].content);
	assert_eq!(comments, ["REPLAYGAIN_TRACK_GAIN=-6.2", "DATE=2024"]);
}

#[test_log::test]
fn custom_vendor() {
	let output = FileType::Flac
		.write_tags(
			&minimal_flac(),
			&[Tag::artist("X")],
			WriteOptions::new().vendor("my tagger"),
		)
		.unwrap();

	let (blocks, _) = read_flac(&output);
	let (vendor, _) = read_comments(&blocks[1].content);
	assert_eq!(vendor, "my tagger");
}

#[test_log::test]
fn replace_in_place() {
	let first = write(&streaminfo_and_padding(), &[Tag::artist("First")]);
	let second = write(&first, &[Tag::title("Second")]);

	let (blocks, audio) = read_flac(&second);
	assert_eq!(block_types(&blocks), [STREAMINFO, PADDING, VORBIS_COMMENTS]);
	verify_last_flag(&blocks);
	assert_eq!(audio, FLAC_AUDIO);

	let (_, comments) = read_comments(&blocks[2].content);
	assert_eq!(comments, ["TITLE=Second"]);
}

#[test_log::test]
fn replace_keeps_position() {
	let stream = flac_stream(&[
		RawBlock {
			ty: STREAMINFO,
			last: false,
			content: vec![0x10; 34],
		},
		RawBlock {
			ty: VORBIS_COMMENTS,
			last: false,
			content: b"\x00\x00\x00\x00\x00\x00\x00\x00".to_vec(),
		},
		RawBlock {
			ty: PADDING,
			last: true,
			content: vec![0; 8],
		},
	]);

	let output = write(&stream, &[Tag::genre("Jazz")]);
	let (blocks, audio) = read_flac(&output);

	assert_eq!(block_types(&blocks), [STREAMINFO, VORBIS_COMMENTS, PADDING]);
	verify_last_flag(&blocks);
	assert_eq!(blocks[2].content, [0; 8]);
	assert_eq!(audio, FLAC_AUDIO);
}

#[test_log::test]
fn pictures_are_appended() {
	let output = write(
		&minimal_flac(),
		&[
			Tag::cover_art(PNG_DATA.to_vec()),
			Tag::artist("X"),
			Tag::new("cover", JPEG_DATA.to_vec()),
		],
	);

	let (blocks, audio) = read_flac(&output);
	assert_eq!(
		block_types(&blocks),
		[STREAMINFO, VORBIS_COMMENTS, PICTURE, PICTURE]
	);
	verify_last_flag(&blocks);
	assert_eq!(audio, FLAC_AUDIO);

	// Cover art never ends up in the comments
	let (_, comments) = read_comments(&blocks[1].content);
	assert_eq!(comments, ["ARTIST=X"]);

	let mut expected = Vec::<u8>::new();
	expected.extend(3_u32.to_be_bytes());
	expected.extend(9_u32.to_be_bytes());
	expected.extend(b"image/png");
	expected.extend([0; 20]);
	expected.extend((PNG_DATA.len() as u32).to_be_bytes());
	expected.extend(PNG_DATA);
	assert_eq!(blocks[2].content, expected);

	assert_eq!(&blocks[3].content[8..18], b"image/jpeg");
	assert!(blocks[3].content.ends_with(JPEG_DATA));
}

#[test_log::test]
fn pictures_accumulate() {
	let cover = [Tag::cover_art(PNG_DATA.to_vec())];

	let first = write(&minimal_flac(), &cover);
	let second = write(&first, &cover);

	let (blocks, _) = read_flac(&second);
	assert_eq!(
		block_types(&blocks),
		[STREAMINFO, VORBIS_COMMENTS, PICTURE, PICTURE]
	);
	verify_last_flag(&blocks);
	assert_eq!(blocks[2], RawBlock {
		last: false,
		..blocks[3].clone()
	});
}

#[test_log::test]
fn picture_replace_policy() {
	let options = WriteOptions::new().picture_policy(PicturePolicy::Replace);

	let first = write(&minimal_flac(), &[Tag::cover_art(PNG_DATA.to_vec())]);
	let second = FileType::Flac
		.write_tags(&first, &[Tag::cover_art(JPEG_DATA.to_vec())], options)
		.unwrap();

	let (blocks, audio) = read_flac(&second);
	assert_eq!(block_types(&blocks), [STREAMINFO, VORBIS_COMMENTS, PICTURE]);
	verify_last_flag(&blocks);
	assert!(blocks[2].content.ends_with(JPEG_DATA));
	assert_eq!(audio, FLAC_AUDIO);
}

#[test_log::test]
fn unwritable_tags_are_dropped() {
	let output = write(
		&minimal_flac(),
		&[
			Tag::new("notes", vec![1_u8, 2, 3]),
			Tag::new("albumart", "cover.png"),
		],
	);

	let (blocks, _) = read_flac(&output);
	assert_eq!(block_types(&blocks), [STREAMINFO, VORBIS_COMMENTS]);

	let (_, comments) = read_comments(&blocks[1].content);
	assert!(comments.is_empty());
}

#[test_log::test]
fn clear_empties_comments() {
	let tagged = write(&streaminfo_and_padding(), &[Tag::artist("X"), Tag::title("Y")]);
	let cleared = FileType::Flac
		.clear_tags(&tagged, WriteOptions::default())
		.unwrap();

	let (blocks, audio) = read_flac(&cleared);
	assert_eq!(block_types(&blocks), [STREAMINFO, PADDING, VORBIS_COMMENTS]);
	verify_last_flag(&blocks);
	assert_eq!(audio, FLAC_AUDIO);

	let (vendor, comments) = read_comments(&blocks[2].content);
	assert_eq!(vendor, "retag");
	assert!(comments.is_empty());
}

#[test_log::test]
fn clear_keeps_pictures() {
	let tagged = write(
		&minimal_flac(),
		&[Tag::artist("X"), Tag::cover_art(PNG_DATA.to_vec())],
	);
	let cleared = FileType::Flac
		.clear_tags(&tagged, WriteOptions::default())
		.unwrap();

	let (blocks, _) = read_flac(&cleared);
	assert_eq!(block_types(&blocks), [STREAMINFO, VORBIS_COMMENTS, PICTURE]);
	verify_last_flag(&blocks);
}

#[test_log::test]
fn clear_remove_policy() {
	let options = WriteOptions::new().clear_policy(ClearPolicy::RemoveVorbisComments);

	let tagged = write(&minimal_flac(), &[Tag::artist("X")]);
	let cleared = FileType::Flac.clear_tags(&tagged, options).unwrap();

	// Back to where we started
	assert_eq!(cleared, minimal_flac());
}

#[test_log::test]
fn bad_signature() {
	let mut stream = minimal_flac();
	stream[0] = b'F';

	let err = FileType::Flac
		.write_tags(&stream, &[Tag::artist("X")], WriteOptions::default())
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidContainer(_)));
}

#[test_log::test]
fn truncated_block() {
	let mut stream = b"fLaC".to_vec();
	// STREAMINFO, claiming 34 bytes, with only 10 available
	stream.extend([0x80, 0x00, 0x00, 0x22]);
	stream.extend([0; 10]);

	let err = FileType::Flac
		.write_tags(&stream, &[Tag::artist("X")], WriteOptions::default())
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidContainer(_)));

	let err = FileType::Flac
		.clear_tags(&stream[..6], WriteOptions::default())
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidContainer(_)));
}

#[test_log::test]
fn oversized_picture() {
	let cover = Tag::cover_art(vec![0xFF; 0x100_0000]);

	let err = FileType::Flac
		.write_tags(&minimal_flac(), &[cover], WriteOptions::default())
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));
}

#[test_log::test]
fn write_to_file() {
	let mut file = temp_file(&minimal_flac());
	retag::write_tags_to(
		&mut file,
		FileType::Flac,
		&[Tag::artist("X")],
		WriteOptions::default(),
	)
	.unwrap();

	file.rewind().unwrap();
	let mut content = Vec::new();
	file.read_to_end(&mut content).unwrap();

	assert_eq!(content, write(&minimal_flac(), &[Tag::artist("X")]));
}

#[test_log::test]
fn clear_shrinks_file() {
	let tagged = write(&minimal_flac(), &[Tag::comment("a".repeat(1000))]);
	let options = WriteOptions::new().clear_policy(ClearPolicy::RemoveVorbisComments);

	let mut file = Cursor::new(tagged);
	retag::clear_tags_from(&mut file, FileType::Flac, options).unwrap();

	// Nothing may be left past the new end
	assert_eq!(file.into_inner(), minimal_flac());
}
