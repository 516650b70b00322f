//! Utilities for working with synchsafe integers
//!
//! ID3v2 stores its sizes as synchsafe integers, where the most significant bit of every byte is
//! zeroed. A 4 byte synchsafe integer is therefore limited to 28 bits.

use crate::error::Result;

/// The largest value that fits in a 4 byte synchsafe integer
pub const MAX_SYNCHSAFE_U32: u32 = 0x0FFF_FFFF;

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// The value is split into 7-bit groups, most significant first, each stored in the low
	/// 7 bits of a byte.
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> retag::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	///
	/// // One more and it no longer fits
	/// assert!(0x1000_0000_u32.synch().is_err());
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// Only the low 7 bits of each byte are considered, a stray high bit is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use retag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// let size = u32::from_be_bytes([0x00, 0x00, 0x02, 0x01]);
	/// assert_eq!(size.unsynch(), 257);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		if self > MAX_SYNCHSAFE_U32 {
			crate::macros::err!(TooMuchData);
		}

		let n = self;
		Ok((n & 0x7F)
			| ((n & (0x7F << 7)) << 1)
			| ((n & (0x7F << 14)) << 2)
			| ((n & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}

/// Encode a length as 4 synchsafe bytes
pub(crate) fn synchsafe_bytes(len: usize) -> Result<[u8; 4]> {
	let Ok(len) = u32::try_from(len) else {
		crate::macros::err!(TooMuchData);
	};

	Ok(len.synch()?.to_be_bytes())
}
