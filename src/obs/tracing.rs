// self
use crate::{_prelude::*, obs::SignatureOperation};

/// A span builder used by signing operations.
#[derive(Clone, Debug)]
pub struct SignatureSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SignatureSpan {
	/// Creates a new span tagged with the operation and signature method label.
	pub fn new(operation: SignatureOperation, method: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth1_signer.signature",
				operation = operation.as_str(),
				method
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, method);

			Self {}
		}
	}

	/// Enters the span until the returned guard drops.
	pub fn entered(self) -> SignatureSpanGuard {
		#[cfg(feature = "tracing")]
		{
			SignatureSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			SignatureSpanGuard {}
		}
	}
}

/// RAII guard returned by [`SignatureSpan::entered`].
pub struct SignatureSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for SignatureSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SignatureSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn signature_span_noop_without_tracing() {
		let guard = SignatureSpan::new(SignatureOperation::Sign, "HMAC-SHA1").entered();

		assert_eq!(format!("{guard:?}"), "SignatureSpanGuard(..)");
	}
}
