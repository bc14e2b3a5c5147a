// self
use crate::obs::{FlowKind, FlowOutcome};

/// Counter name; labels are `flow` ([`FlowKind::as_str`]) and `outcome`
/// ([`FlowOutcome::as_str`]).
pub const FLOW_COUNTER: &str = "oauth2_wordpress_com_flow_total";

/// Counts one flow event on the installed metrics recorder (when enabled).
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(FLOW_COUNTER, "flow" => kind.as_str(), "outcome" => outcome.as_str())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
	// std
	use std::sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	};
	// crates.io
	use metrics::{
		Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
	};
	use parking_lot::Mutex;
	// self
	use super::*;

	#[derive(Default)]
	struct Hits(AtomicU64);
	impl CounterFn for Hits {
		fn increment(&self, value: u64) {
			self.0.fetch_add(value, Ordering::Relaxed);
		}

		fn absolute(&self, value: u64) {
			self.0.store(value, Ordering::Relaxed);
		}
	}

	#[derive(Default)]
	struct CapturingRecorder {
		counters: Mutex<Vec<(String, Vec<(String, String)>, Arc<Hits>)>>,
	}
	impl Recorder for CapturingRecorder {
		fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

		fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

		fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

		fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
			let hits = Arc::new(Hits::default());
			let labels = key
				.labels()
				.map(|label| (label.key().to_owned(), label.value().to_owned()))
				.collect();

			self.counters.lock().push((key.name().to_owned(), labels, hits.clone()));

			Counter::from_arc(hits)
		}

		fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
			Gauge::noop()
		}

		fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
			Histogram::noop()
		}
	}

	#[test]
	fn outcomes_are_counted_with_flow_labels() {
		let recorder = CapturingRecorder::default();

		metrics::with_local_recorder(&recorder, || {
			record_flow_outcome(FlowKind::ResourceOwner, FlowOutcome::Failure);
		});

		let counters = recorder.counters.lock();
		let (name, labels, hits) = counters.first().expect("One counter should be registered.");

		assert_eq!(name, FLOW_COUNTER);
		assert_eq!(
			labels,
			&vec![
				("flow".to_owned(), "resource_owner".to_owned()),
				("outcome".to_owned(), "failure".to_owned()),
			]
		);
		assert_eq!(hits.0.load(Ordering::Relaxed), 1);
	}
}
