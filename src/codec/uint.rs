// crates.io
use num_bigint::BigUint;
use num_traits::Zero;

/// Interprets `bytes` as a big-endian unsigned integer; empty input is zero.
pub fn bytes_to_uint(bytes: &[u8]) -> BigUint {
	if bytes.is_empty() {
		return BigUint::zero();
	}

	BigUint::from_bytes_be(bytes)
}

/// Big-endian encoding of `n` without leading zero bytes.
///
/// Zero encodes to the empty string. When `min_length > 0`, the output is left-padded with zero
/// bytes up to the next multiple of `min_length` (an empty encoding pads to `min_length`).
pub fn uint_to_bytes(n: &BigUint, min_length: usize) -> Vec<u8> {
	let mut bytes = if n.is_zero() { Vec::new() } else { n.to_bytes_be() };

	if min_length > 0 {
		let target = bytes.len().div_ceil(min_length).max(1) * min_length;

		if target > bytes.len() {
			let mut padded = vec![0; target - bytes.len()];

			padded.append(&mut bytes);
			bytes = padded;
		}
	}

	bytes
}

/// Number of bits needed to represent `n`; zero needs none.
pub fn bit_length(n: &BigUint) -> usize {
	n.bits()
}

/// Number of bytes needed to represent `n`; zero needs none.
pub fn byte_length(n: &BigUint) -> usize {
	bit_length(n).div_ceil(8)
}

#[cfg(test)]
mod tests {
	// crates.io
	use proptest::prelude::*;
	// self
	use super::*;

	fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
		let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());

		&bytes[start..]
	}

	#[test]
	fn zero_edge_cases() {
		let zero = bytes_to_uint(&[]);

		assert!(zero.is_zero());
		assert_eq!(bytes_to_uint(&[0, 0, 0]), zero);
		assert!(uint_to_bytes(&zero, 0).is_empty());
		assert_eq!(uint_to_bytes(&zero, 4), vec![0; 4]);
		assert_eq!(bit_length(&zero), 0);
		assert_eq!(byte_length(&zero), 0);
	}

	#[test]
	fn lengths_track_highest_set_bit() {
		assert_eq!(bit_length(&BigUint::from(1_u8)), 1);
		assert_eq!(bit_length(&BigUint::from(255_u8)), 8);
		assert_eq!(byte_length(&BigUint::from(255_u8)), 1);
		assert_eq!(bit_length(&BigUint::from(256_u16)), 9);
		assert_eq!(byte_length(&BigUint::from(256_u16)), 2);
		assert_eq!(byte_length(&BigUint::from(u64::MAX)), 8);
	}

	#[test]
	fn padding_rounds_up_to_block_multiple() {
		let n = BigUint::from(0x01_02_03_u32);

		assert_eq!(uint_to_bytes(&n, 0), vec![1, 2, 3]);
		assert_eq!(uint_to_bytes(&n, 2), vec![0, 1, 2, 3]);
		assert_eq!(uint_to_bytes(&n, 3), vec![1, 2, 3]);
		assert_eq!(uint_to_bytes(&n, 8), vec![0, 0, 0, 0, 0, 1, 2, 3]);
	}

	proptest! {
		#[test]
		fn bytes_survive_uint_conversion(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
			let n = bytes_to_uint(&bytes);

			let unpadded = uint_to_bytes(&n, 0);

			prop_assert_eq!(unpadded.as_slice(), strip_leading_zeros(&bytes));

			if !bytes.is_empty() {
				prop_assert_eq!(uint_to_bytes(&n, bytes.len()), bytes.clone());
			}
		}

		#[test]
		fn uint_survives_byte_conversion(value in any::<u64>(), block in 0_usize..20) {
			let n = BigUint::from(value);

			prop_assert_eq!(bytes_to_uint(&uint_to_bytes(&n, block)), n);
		}
	}
}
