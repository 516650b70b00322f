#![allow(missing_docs)]

mod flac;
mod mpeg;
