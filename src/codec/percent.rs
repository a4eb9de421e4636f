// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
// self
use crate::error::DecodeError;

/// Everything except the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`).
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes every UTF-8 octet of `value` outside the unreserved set as `%XX` (uppercase).
pub fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Reverses [`percent_encode`].
///
/// Unlike form decoding, `+` is left untouched. A `%` that is not followed by two hex digits is
/// rejected rather than passed through.
pub fn percent_decode(value: &str) -> Result<String, DecodeError> {
	validate_escapes(value)?;

	Ok(percent_decode_str(value).decode_utf8()?.into_owned())
}

fn validate_escapes(value: &str) -> Result<(), DecodeError> {
	let bytes = value.as_bytes();
	let mut offset = 0;

	while offset < bytes.len() {
		if bytes[offset] == b'%' {
			let well_formed = bytes
				.get(offset + 1..offset + 3)
				.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));

			if !well_formed {
				return Err(DecodeError::InvalidEscape { offset });
			}

			offset += 3;
		} else {
			offset += 1;
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// crates.io
	use proptest::prelude::*;
	// self
	use super::*;

	#[test]
	fn encodes_known_vectors() {
		assert_eq!(percent_encode("abcABC123"), "abcABC123");
		assert_eq!(percent_encode("-._~"), "-._~");
		assert_eq!(percent_encode("%"), "%25");
		assert_eq!(percent_encode("+"), "%2B");
		assert_eq!(percent_encode("&=*"), "%26%3D%2A");
		assert_eq!(percent_encode("\u{0080}"), "%C2%80");
		assert_eq!(percent_encode("\u{3001}"), "%E3%80%81");
		assert_eq!(percent_encode("\u{00A9}"), "%C2%A9");
		assert_eq!(percent_encode(" /"), "%20%2F");
	}

	#[test]
	fn decodes_mixed_case_escapes() {
		assert_eq!(
			percent_decode("%e3%80%81a%2Bb+").expect("Escapes should decode."),
			"\u{3001}a+b+"
		);
		assert_eq!(percent_decode("").expect("Empty input should decode."), "");
	}

	#[test]
	fn rejects_malformed_input() {
		assert_eq!(percent_decode("abc%"), Err(DecodeError::InvalidEscape { offset: 3 }));
		assert_eq!(percent_decode("%2"), Err(DecodeError::InvalidEscape { offset: 0 }));
		assert_eq!(percent_decode("a%zz"), Err(DecodeError::InvalidEscape { offset: 1 }));
		assert!(matches!(percent_decode("%C3%28"), Err(DecodeError::InvalidUtf8(_))));
	}

	proptest! {
		#[test]
		fn decode_inverts_encode(value in any::<String>()) {
			prop_assert_eq!(percent_decode(&percent_encode(&value)), Ok(value));
		}

		#[test]
		fn encoded_output_is_unreserved_ascii(value in any::<String>()) {
			let encoded = percent_encode(&value);

			prop_assert!(
				encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b))
			);
		}
	}
}
