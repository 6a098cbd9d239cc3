//! Optional observability helpers for remote calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `authlete_client.call` with the `path` and
//!   `method` fields, plus a debug event for every received status and a warn event per failure.
//! - Enable `metrics` to increment the `authlete_client_call_total` counter for every
//!   attempt/success/failure, labeled by `path` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to the invoker.
	Attempt,
	/// Successful decode of the declared response shape.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
