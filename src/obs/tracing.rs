// self
use crate::{
	_prelude::*,
	obs::{FlowKind, FlowOutcome, record_flow_outcome},
};

/// One observed client operation.
///
/// Creating a flow counts an attempt. Running work through [`scope`](Self::scope) or
/// [`run`](Self::run) counts the result and, for errors, emits a `warn` event inside the span.
#[derive(Debug)]
pub struct FlowSpan {
	kind: FlowKind,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens the span for `kind` at `stage` and counts the attempt.
	pub fn start(kind: FlowKind, stage: &'static str) -> Self {
		record_flow_outcome(kind, FlowOutcome::Attempt);

		#[cfg(feature = "tracing")]
		{
			Self {
				kind,
				span: tracing::info_span!(
					"oauth2_wordpress_com.flow",
					flow = kind.as_str(),
					stage
				),
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self { kind }
		}
	}

	/// Flow this span belongs to.
	pub fn kind(&self) -> FlowKind {
		self.kind
	}

	/// Runs synchronous work inside the span.
	pub fn scope<T>(self, work: impl FnOnce() -> Result<T>) -> Result<T> {
		#[cfg(feature = "tracing")]
		let result = self.span.in_scope(work);
		#[cfg(not(feature = "tracing"))]
		let result = work();

		self.settle(&result);

		result
	}

	/// Drives `work` to completion inside the span without holding a guard across `.await`.
	pub async fn run<T, Fut>(self, work: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		#[cfg(feature = "tracing")]
		let result = {
			use tracing::Instrument;

			work.instrument(self.span.clone()).await
		};
		#[cfg(not(feature = "tracing"))]
		let result = work.await;

		self.settle(&result);

		result
	}

	fn settle<T>(&self, result: &Result<T>) {
		let Err(err) = result else {
			record_flow_outcome(self.kind, FlowOutcome::Success);

			return;
		};

		record_flow_outcome(self.kind, FlowOutcome::Failure);

		#[cfg(feature = "tracing")]
		{
			let _entered = self.span.enter();

			tracing::warn!(flow = self.kind.as_str(), error = %err, "Provider flow failed.");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = err;
		}
	}
}
