#![allow(missing_docs)]

use retag::config::WriteOptions;
use retag::tag::Tag;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "tag_writer", about = "A simple tag writer example")]
struct Opt {
	#[structopt(short, long)]
	title: Option<String>,

	#[structopt(short, long)]
	artist: Option<String>,

	#[structopt(short = "A", long)]
	album: Option<String>,

	#[structopt(short, long)]
	genre: Option<String>,

	/// An image file to embed as the front cover
	#[structopt(short, long, parse(from_os_str))]
	cover: Option<PathBuf>,

	/// Remove all tags instead of writing
	#[structopt(long)]
	clear: bool,

	#[structopt(parse(from_os_str))]
	path: PathBuf,
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	if !retag::is_supported(&opt.path) {
		eprintln!(
			"ERROR: Unsupported file, expected one of: {}",
			retag::supported_extensions().join(", ")
		);
		std::process::exit(1);
	}

	if opt.clear {
		retag::clear_tags(&opt.path).expect("ERROR: Failed to clear the tags!");
		println!("INFO: Tags successfully removed!");
		return;
	}

	let mut tags = Vec::new();

	if let Some(title) = opt.title {
		tags.push(Tag::title(title));
	}

	if let Some(artist) = opt.artist {
		tags.push(Tag::artist(artist));
	}

	if let Some(album) = opt.album {
		tags.push(Tag::album(album));
	}

	if let Some(genre) = opt.genre {
		tags.push(Tag::genre(genre));
	}

	if let Some(cover) = opt.cover {
		let data = std::fs::read(cover).expect("ERROR: Failed to read the cover!");
		tags.push(Tag::cover_art(data));
	}

	if tags.is_empty() {
		eprintln!("ERROR: No options provided!");
		std::process::exit(1);
	}

	retag::write_tags_with_options(&opt.path, &tags, WriteOptions::default())
		.expect("ERROR: Failed to write the tags!");

	println!("INFO: Tags successfully updated!");
}
