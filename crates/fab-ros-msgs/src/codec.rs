//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Byte-level encoding of messages for a transport to carry.
use std::fmt;

use fab_ros_logging::{fab_debug, log_codec_event, CodecOutcome, Direction, LogContext};
use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::metrics::CodecMetrics;
use crate::wire::{FieldPolicy, FromWire, RosMessage, ToWire, WireValue};
use crate::Result;

/// Byte representation of a wire mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// UTF-8 JSON, as spoken by rosbridge.
    #[default]
    Json,
    /// CBOR, rosbridge's compact alternative.
    Cbor,
}

impl WireFormat {
    /// Lowercase label used in logs and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            WireFormat::Json => "json",
            WireFormat::Cbor => "cbor",
        }
    }
}

/// Flattens messages to bytes and reconstructs them, with one policy for
/// every nested field.
#[derive(Clone, Default)]
pub struct WireCodec {
    format: WireFormat,
    policy: FieldPolicy,
    log_payloads: bool,
    metrics: Option<CodecMetrics>,
}

impl WireCodec {
    /// Codec with the given format and policy, logging payloads off.
    pub fn new(format: WireFormat, policy: FieldPolicy) -> Self {
        Self {
            format,
            policy,
            ..Self::default()
        }
    }

    /// Codec built from loaded settings, without metrics.
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            format: config.format,
            policy: config.policy,
            log_payloads: config.log_payloads,
            metrics: None,
        }
    }

    /// Count encodes, decodes and failures in `metrics`.
    pub fn with_metrics(mut self, metrics: CodecMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Byte format used by [`WireCodec::encode`] and [`WireCodec::decode`].
    pub fn format(&self) -> WireFormat {
        self.format
    }

    /// Policy applied when reconstructing decoded messages.
    pub fn policy(&self) -> FieldPolicy {
        self.policy
    }

    /// Flatten `message` and serialise it in this codec's format.
    pub fn encode<M: RosMessage + Serialize>(&self, message: &M) -> Result<Vec<u8>> {
        let ctx = self.context(M::TYPE_NAME, Direction::Encode);
        let result = message.to_wire().and_then(|wire| {
            if self.log_payloads {
                fab_debug!(context = ctx, "payload {}", wire);
            }
            self.to_bytes(&wire)
        });
        match &result {
            Ok(bytes) => {
                self.observe(|m| m.observe_encoded());
                let note = format!("encoded {} bytes", bytes.len());
                log_codec_event(Some(&ctx), "codec.encode", &note, CodecOutcome::Success);
            }
            Err(err) => self.fault(&ctx, "codec.encode", err),
        }
        result
    }

    /// Parse `bytes` and reconstruct an `M` under this codec's policy.
    pub fn decode<M: RosMessage + FromWire>(&self, bytes: &[u8]) -> Result<M> {
        let ctx = self.context(M::TYPE_NAME, Direction::Decode);
        let result = self.decode_value(bytes).and_then(|wire| {
            if self.log_payloads {
                fab_debug!(context = ctx, "payload {}", wire);
            }
            M::from_wire_with(&wire, self.policy)
        });
        match &result {
            Ok(_) => {
                self.observe(|m| m.observe_decoded());
                let note = format!("decoded {} bytes", bytes.len());
                log_codec_event(Some(&ctx), "codec.decode", &note, CodecOutcome::Success);
            }
            Err(err) => {
                let path = err.path();
                let ctx = ctx.with_field(&path);
                self.fault(&ctx, "codec.decode", err);
            }
        }
        result
    }

    /// Parse `bytes` into an untyped wire value without reconstruction.
    pub fn decode_value(&self, bytes: &[u8]) -> Result<WireValue> {
        Ok(match self.format {
            WireFormat::Json => serde_json::from_slice(bytes)?,
            WireFormat::Cbor => serde_cbor::from_slice(bytes)?,
        })
    }

    fn to_bytes(&self, wire: &WireValue) -> Result<Vec<u8>> {
        Ok(match self.format {
            WireFormat::Json => serde_json::to_vec(wire)?,
            WireFormat::Cbor => serde_cbor::to_vec(wire)?,
        })
    }

    fn context<'a>(&self, message_type: &'a str, direction: Direction) -> LogContext<'a> {
        LogContext::new()
            .with_message_type(message_type)
            .with_format(self.format.as_str())
            .with_direction(direction)
    }

    fn observe(&self, record: impl FnOnce(&CodecMetrics)) {
        if let Some(metrics) = &self.metrics {
            record(metrics);
        }
    }

    fn fault(&self, ctx: &LogContext<'_>, event: &str, err: &crate::SchemaError) {
        self.observe(|m| m.observe_failure());
        log_codec_event(Some(ctx), event, &err.to_string(), CodecOutcome::Fault);
    }
}

impl fmt::Debug for WireCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireCodec")
            .field("format", &self.format)
            .field("policy", &self.policy)
            .field("log_payloads", &self.log_payloads)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
