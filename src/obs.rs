//! Optional observability helpers for signing operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_signer.signature` with the
//!   `operation` and `method` (signature method) fields.
//! - Enable `metrics` to increment the `oauth1_signer_signature_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureOperation {
	/// Signature computation.
	Sign,
	/// Signature verification.
	Verify,
	/// Full OAuth parameter assembly for an outbound request.
	BuildParams,
}
impl SignatureOperation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureOperation::Sign => "sign",
			SignatureOperation::Verify => "verify",
			SignatureOperation::BuildParams => "build_params",
		}
	}
}
impl Display for SignatureOperation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureOutcome {
	/// Entry to an engine operation.
	Attempt,
	/// Successful completion (for verification: the signature matched).
	Success,
	/// Error or signature mismatch.
	Failure,
}
impl SignatureOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureOutcome::Attempt => "attempt",
			SignatureOutcome::Success => "success",
			SignatureOutcome::Failure => "failure",
		}
	}

	/// Maps a result onto success/failure.
	pub fn of<T, E>(result: &std::result::Result<T, E>) -> Self {
		if result.is_ok() { SignatureOutcome::Success } else { SignatureOutcome::Failure }
	}
}
impl Display for SignatureOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
