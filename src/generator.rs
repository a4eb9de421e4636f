//! Nonce and timestamp generation with injectable randomness and clock.

// self
use crate::{
	_prelude::*,
	codec::{RandomSource, SystemRandom, bytes_to_uint},
};

/// Default nonce strength in bits.
pub const DEFAULT_NONCE_BITS: usize = 64;

/// Wall-clock time source.
pub trait Clock
where
	Self: Send + Sync + Debug,
{
	/// Current instant.
	fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}
}

/// Clock frozen at a single instant, for reproducible signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(OffsetDateTime);
impl FixedClock {
	/// Freezes the clock at `instant`.
	pub fn new(instant: OffsetDateTime) -> Self {
		Self(instant)
	}

	/// Freezes the clock at `seconds` past the Unix epoch.
	pub fn from_unix_timestamp(seconds: i64) -> Result<Self> {
		OffsetDateTime::from_unix_timestamp(seconds)
			.map(Self)
			.map_err(|e| Error::illegal_argument("oauth_timestamp", e.to_string()))
	}
}
impl Clock for FixedClock {
	fn now(&self) -> OffsetDateTime {
		self.0
	}
}

/// Produces `oauth_nonce` and `oauth_timestamp` values.
#[derive(Clone, Debug)]
pub struct CredentialGenerator {
	random: Arc<dyn RandomSource>,
	clock: Arc<dyn Clock>,
}
impl CredentialGenerator {
	/// Creates a generator over explicit collaborators.
	pub fn new(random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
		Self { random, clock }
	}

	/// Decimal rendering of a random unsigned integer of `bit_strength` bits.
	///
	/// `bit_strength` must be a positive multiple of 8.
	pub fn generate_nonce(&self, bit_strength: usize) -> Result<String> {
		if bit_strength == 0 || bit_strength % 8 != 0 {
			return Err(Error::illegal_argument(
				"bit_strength",
				format!("expected a positive multiple of 8, got {bit_strength}"),
			));
		}

		let mut bytes = vec![0; bit_strength / 8];

		self.random.fill_bytes(&mut bytes);

		Ok(bytes_to_uint(&bytes).to_string())
	}

	/// Random lowercase hexadecimal string of `length` characters (positive and even).
	pub fn generate_hex_nonce(&self, length: usize) -> Result<String> {
		if length == 0 || length % 2 != 0 {
			return Err(Error::illegal_argument(
				"length",
				format!("expected a positive even length, got {length}"),
			));
		}

		let mut bytes = vec![0; length / 2];

		self.random.fill_bytes(&mut bytes);

		Ok(bytes.iter().map(|byte| format!("{byte:02x}")).collect())
	}

	/// Current Unix time in whole seconds, as a decimal string.
	pub fn generate_timestamp(&self) -> Result<String> {
		let seconds = self.clock.now().unix_timestamp();

		if seconds <= 0 {
			return Err(Error::illegal_argument(
				"oauth_timestamp",
				format!("clock reports non-positive Unix time {seconds}"),
			));
		}

		Ok(seconds.to_string())
	}
}
impl Default for CredentialGenerator {
	fn default() -> Self {
		Self::new(Arc::new(SystemRandom), Arc::new(SystemClock))
	}
}

/// [`CredentialGenerator::generate_nonce`] over the system random source.
pub fn generate_nonce(bit_strength: usize) -> Result<String> {
	CredentialGenerator::default().generate_nonce(bit_strength)
}

/// [`CredentialGenerator::generate_timestamp`] over the system clock.
pub fn generate_timestamp() -> Result<String> {
	CredentialGenerator::default().generate_timestamp()
}
