//! Byte-level codecs: RFC 3986 percent-encoding, big-endian unsigned integers, secure random
//! bytes, and SHA-1 digests.

mod percent;
mod random;
mod uint;

pub use percent::*;
pub use random::*;
pub use uint::*;

// crates.io
use sha1::{Digest, Sha1};

/// SHA-1 digest over the concatenation of `inputs`.
pub fn sha1_digest<I, B>(inputs: I) -> [u8; 20]
where
	I: IntoIterator<Item = B>,
	B: AsRef<[u8]>,
{
	let mut hasher = Sha1::new();

	for input in inputs {
		hasher.update(input.as_ref());
	}

	let mut digest = [0_u8; 20];

	digest.copy_from_slice(&hasher.finalize());

	digest
}

/// Lowercase hexadecimal rendering of [`sha1_digest`].
pub fn sha1_hexdigest<I, B>(inputs: I) -> String
where
	I: IntoIterator<Item = B>,
	B: AsRef<[u8]>,
{
	sha1_digest(inputs).iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sha1_hexdigest_matches_known_vector() {
		assert_eq!(sha1_hexdigest(["abc"]), "a9993e364706816aba3e25717850c26c9cd0d89d");
		assert_eq!(sha1_hexdigest(["a", "b", "c"]), sha1_hexdigest(["abc"]));
		assert_eq!(sha1_hexdigest(Vec::<&[u8]>::new()), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
	}
}
