// crates.io
use rand::RngCore;
// self
use crate::_prelude::*;

/// Source of cryptographically secure random bytes.
///
/// Implementations must be safe to share across threads; the generator only ever borrows them.
pub trait RandomSource
where
	Self: Send + Sync + Debug,
{
	/// Fills `dest` entirely with random bytes.
	fn fill_bytes(&self, dest: &mut [u8]);
}

/// Operating-system seeded CSPRNG backed by [`rand::rng`] (a per-thread ChaCha generator).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRandom;
impl RandomSource for SystemRandom {
	fn fill_bytes(&self, dest: &mut [u8]) {
		rand::rng().fill_bytes(dest);
	}
}

/// Returns `n` bytes drawn from [`SystemRandom`].
pub fn random_bytes(n: usize) -> Vec<u8> {
	let mut bytes = vec![0; n];

	SystemRandom.fill_bytes(&mut bytes);

	bytes
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn random_bytes_honors_length() {
		assert!(random_bytes(0).is_empty());
		assert_eq!(random_bytes(33).len(), 33);
		assert_ne!(random_bytes(16), random_bytes(16), "Two 128-bit draws should differ.");
	}
}
