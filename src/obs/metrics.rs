// self
use crate::obs::CallOutcome;

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(path: &str, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"authlete_client_call_total",
			"path" => path.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (path, outcome);
	}
}
