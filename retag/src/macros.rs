// Shorthand for return Err(RetagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant) -> return Err(RetagError::new(ErrorKind::Variant))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::RetagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
}

// Shorthand for FileDecodingError::new(FileType::Foo, "Message")
//
// Usage:
//
// - decode_err!(Variant, Message)
//
// or bail:
//
// - decode_err!(@BAIL Variant, Message)
macro_rules! decode_err {
	($file_ty:ident, $reason:literal) => {
		Into::<crate::error::RetagError>::into(crate::error::FileDecodingError::new(
			crate::file::FileType::$file_ty,
			$reason,
		))
	};
	(@BAIL $file_ty:ident, $reason:literal) => {
		return Err(decode_err!($file_ty, $reason))
	};
}

pub(crate) use {decode_err, err};
