// self
use crate::obs::{SignatureOperation, SignatureOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_signature_outcome(operation: SignatureOperation, outcome: SignatureOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_signer_signature_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}
