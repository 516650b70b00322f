use crate::util::{JPEG_DATA, MPEG_AUDIO, PNG_DATA, temp_file};

use std::io::{Read, Seek};

use retag::config::WriteOptions;
use retag::file::FileType;
use retag::tag::Tag;

fn write(data: &[u8], tags: &[Tag]) -> Vec<u8> {
	FileType::Mpeg
		.write_tags(data, tags, WriteOptions::default())
		.unwrap()
}

fn clear(data: &[u8]) -> Vec<u8> {
	FileType::Mpeg
		.clear_tags(data, WriteOptions::default())
		.unwrap()
}

/// Split an ID3v2 tag into its `(id, content)` frames
fn read_frames(tag: &[u8]) -> Vec<(String, Vec<u8>)> {
	let synchsafe = |b: &[u8]| {
		(u32::from(b[0]) << 21) | (u32::from(b[1]) << 14) | (u32::from(b[2]) << 7) | u32::from(b[3])
	};

	let size = synchsafe(&tag[6..10]) as usize;
	let mut frames = Vec::new();

	let mut pos = 10;
	while pos < 10 + size {
		let id = String::from_utf8(tag[pos..pos + 4].to_vec()).unwrap();
		let len = synchsafe(&tag[pos + 4..pos + 8]) as usize;
		assert_eq!(&tag[pos + 8..pos + 10], &[0, 0], "Frame flags should be empty");

		frames.push((id, tag[pos + 10..pos + 10 + len].to_vec()));
		pos += 10 + len;
	}

	assert_eq!(pos, 10 + size);
	frames
}

#[test_log::test]
fn round_trip() {
	let output = write(MPEG_AUDIO, &[Tag::title("Foo title"), Tag::artist("Bar artist")]);

	assert_eq!(&output[..6], b"ID3\x04\x00\x00");
	assert!(output[6..10].iter().all(|b| b & 0x80 == 0));
	assert!(output.ends_with(MPEG_AUDIO));

	let frames = read_frames(&output);
	assert_eq!(frames.len(), 2);
	assert_eq!(frames[0], (String::from("TIT2"), b"\x03Foo title".to_vec()));
	assert_eq!(frames[1], (String::from("TPE1"), b"\x03Bar artist".to_vec()));

	let tag_size = output.len() - MPEG_AUDIO.len();
	assert_eq!(&output[tag_size..], MPEG_AUDIO);
}

#[test_log::test]
fn custom_and_numeric_frames() {
	let output = write(
		MPEG_AUDIO,
		&[
			Tag::new("MOOD", "Calm"),
			Tag::track_number(5),
			Tag::new("rating", 4.5_f64),
			Tag::comment("Nice"),
		],
	);

	let frames = read_frames(&output);
	assert_eq!(
		frames,
		[
			(String::from("TXXX"), b"\x03MOOD\x00Calm".to_vec()),
			(String::from("TRCK"), b"\x035".to_vec()),
			(String::from("TXXX"), b"\x03rating\x004.5".to_vec()),
			(String::from("TXXX"), b"\x03comment\x00Nice".to_vec()),
		]
	);
}

#[test_log::test]
fn float_frames_keep_decimal_form() {
	let output = write(
		MPEG_AUDIO,
		&[Tag::new("rating", 0.1_f32), Tag::new("bpm", 120.7_f32)],
	);

	let frames = read_frames(&output);
	assert_eq!(
		frames,
		[
			(String::from("TXXX"), b"\x03rating\x000.1".to_vec()),
			(String::from("TBPM"), b"\x03120.7".to_vec()),
		]
	);
}

#[test_log::test]
fn picture_frames() {
	let output = write(
		MPEG_AUDIO,
		&[
			Tag::cover_art(PNG_DATA.to_vec()),
			Tag::new("Cover", JPEG_DATA.to_vec()),
			// Dropped
			Tag::new("data", vec![0_u8; 4]),
			Tag::new("albumart", "cover.png"),
		],
	);

	let frames = read_frames(&output);
	assert_eq!(frames.len(), 2);

	let mut png = b"\x00image/png\x00\x03\x00".to_vec();
	png.extend(PNG_DATA);
	assert_eq!(frames[0], (String::from("APIC"), png));

	let mut jpeg = b"\x00image/jpeg\x00\x03\x00".to_vec();
	jpeg.extend(JPEG_DATA);
	assert_eq!(frames[1], (String::from("APIC"), jpeg));
}

#[test_log::test]
fn rewrite_replaces_tag() {
	let first = write(MPEG_AUDIO, &[Tag::title("a".repeat(300))]);
	let second = write(&first, &[Tag::title("b")]);

	assert_eq!(second, write(MPEG_AUDIO, &[Tag::title("b")]));
}

#[test_log::test]
fn empty_tag_list_still_writes_header() {
	let output = write(MPEG_AUDIO, &[]);

	assert_eq!(&output[..10], b"ID3\x04\x00\x00\x00\x00\x00\x00");
	assert_eq!(&output[10..], MPEG_AUDIO);
}

#[test_log::test]
fn idempotent_strip() {
	// Tag-free input is untouched
	assert_eq!(clear(MPEG_AUDIO), MPEG_AUDIO);

	let tagged = write(MPEG_AUDIO, &[Tag::title("Foo")]);
	let once = clear(&tagged);
	let twice = clear(&once);

	assert_eq!(once, MPEG_AUDIO);
	assert_eq!(once, twice);
}

#[test_log::test]
fn strip_tag_with_footer() {
	let mut data = b"ID3\x04\x00\x10\x00\x00\x00\x02".to_vec();
	data.extend([0xAA, 0xBB]);
	data.extend(b"3DI\x04\x00\x10\x00\x00\x00\x02");
	data.extend(MPEG_AUDIO);

	assert_eq!(clear(&data), MPEG_AUDIO);
}

#[test_log::test]
fn strip_older_versions() {
	// ID3v2.3, with an extended header (ignored, it is counted in the size)
	let mut data = b"ID3\x03\x00\x40\x00\x00\x00\x05".to_vec();
	data.extend([0; 5]);
	data.extend(MPEG_AUDIO);

	assert_eq!(clear(&data), MPEG_AUDIO);
}

#[test_log::test]
fn oversized_tag_is_audio() {
	// Claims 127 bytes of frames, only 2 are present
	let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x7F".to_vec();
	data.extend([0xAA, 0xBB]);

	assert_eq!(clear(&data), data);

	let output = write(&data, &[]);
	assert_eq!(&output[10..], data);
}

#[test_log::test]
fn short_input() {
	assert_eq!(clear(b"ID3"), b"ID3");
	assert!(clear(&[]).is_empty());

	let output = write(b"ID3\x04", &[Tag::title("a")]);
	assert!(output.ends_with(b"ID3\x04"));
}

#[test_log::test]
fn write_to_file() {
	let mut file = temp_file(MPEG_AUDIO);
	retag::write_tags_to(
		&mut file,
		FileType::Mpeg,
		&[Tag::album("Foo album")],
		WriteOptions::default(),
	)
	.unwrap();

	file.rewind().unwrap();
	let mut content = Vec::new();
	file.read_to_end(&mut content).unwrap();

	assert_eq!(content, write(MPEG_AUDIO, &[Tag::album("Foo album")]));

	// And back
	retag::clear_tags_from(&mut file, FileType::Mpeg, WriteOptions::default()).unwrap();

	file.rewind().unwrap();
	let mut content = Vec::new();
	file.read_to_end(&mut content).unwrap();

	assert_eq!(content, MPEG_AUDIO);
}
