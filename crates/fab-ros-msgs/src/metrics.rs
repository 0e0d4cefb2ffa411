//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Prometheus counters for codec traffic.
use prometheus::{IntCounter, Opts, Registry};

/// Prometheus metric handles for codec activity.
#[derive(Clone)]
pub struct CodecMetrics {
    encoded: IntCounter,
    decoded: IntCounter,
    failures: IntCounter,
}

impl CodecMetrics {
    /// Register codec metrics with the provided registry.
    pub fn register(registry: &Registry) -> Result<Self, prometheus::Error> {
        let encoded = IntCounter::with_opts(Opts::new(
            "messages_encoded_total",
            "Messages flattened into wire bytes",
        ))?;
        let decoded = IntCounter::with_opts(Opts::new(
            "messages_decoded_total",
            "Messages reconstructed from wire bytes",
        ))?;
        let failures = IntCounter::with_opts(Opts::new(
            "message_codec_failures_total",
            "Encode or decode attempts that returned an error",
        ))?;

        registry.register(Box::new(encoded.clone()))?;
        registry.register(Box::new(decoded.clone()))?;
        registry.register(Box::new(failures.clone()))?;

        Ok(Self {
            encoded,
            decoded,
            failures,
        })
    }

    /// Count one successful encode.
    pub fn observe_encoded(&self) {
        self.encoded.inc();
    }

    /// Count one successful decode.
    pub fn observe_decoded(&self) {
        self.decoded.inc();
    }

    /// Count one failed encode or decode.
    pub fn observe_failure(&self) {
        self.failures.inc();
    }

    /// Current `(encoded, decoded, failures)` counts.
    pub fn snapshot(&self) -> (u64, u64, u64) {
        (self.encoded.get(), self.decoded.get(), self.failures.get())
    }
}
