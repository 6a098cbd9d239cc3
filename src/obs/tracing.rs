// self
use crate::_prelude::*;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by the invoker.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the endpoint path.
	pub fn new(path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("authlete_client.call", path, method = "POST");

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = path;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event carrying the received HTTP status.
pub fn record_status(status: u16) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(status, "Provider responded.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = status;
	}
}

/// Emits a warn event describing a failed call.
pub fn record_failure(error: &CallError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(status = error.status(), retryable = error.is_retryable(), "{error}");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn failure_events_noop_without_tracing() {
		record_status(503);
		record_failure(&CallError::UnexpectedStatus(503));
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new("/api/auth/token");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
