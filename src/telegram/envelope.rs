//! SL20 report envelope parsing.
//!
//! A device report arrives as a JSON object with three fields: `PG`
//! (register payload), `RW` (raw waveform payload) and `date` (Unix epoch
//! seconds). The payload fields are single-element string arrays; `date`
//! may be an integer or a numeric string and defaults to 0 when absent.

use crate::error::Sl20Error;
use log::debug;
use serde_json::{Map, Value};

/// One device-to-server report, split into its raw payload fields.
///
/// The envelope parser only separates fields; payload decoding happens in
/// [`crate::telegram::registers`] and [`crate::chart::waveform`]. A
/// telegram may legitimately omit `PG` or `RW` (a timestamp-only decode
/// needs neither), so accessors surface [`Sl20Error::MissingField`] at
/// the point of use instead of failing the whole envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telegram {
    pg_hex: Option<String>,
    rw_hex: Option<String>,
    epoch: i64,
}

impl Telegram {
    /// Build a telegram directly from raw fields, bypassing the JSON
    /// envelope. Used by tests and callers that already hold payloads.
    pub fn new(pg_hex: Option<String>, rw_hex: Option<String>, epoch: i64) -> Self {
        Self {
            pg_hex,
            rw_hex,
            epoch,
        }
    }

    /// Parse a JSON envelope as received from the broker.
    pub fn from_json_str(payload: &str) -> Result<Self, Sl20Error> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| Sl20Error::TelegramParseError(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Parse an already-deserialized JSON envelope.
    pub fn from_value(value: &Value) -> Result<Self, Sl20Error> {
        let object = value.as_object().ok_or_else(|| {
            Sl20Error::TelegramParseError("envelope is not a JSON object".to_string())
        })?;

        let pg_hex = first_payload(object, "PG")?;
        let rw_hex = first_payload(object, "RW")?;
        let epoch = match object.get("date") {
            None | Some(Value::Null) => 0,
            Some(date) => parse_epoch(date)?,
        };

        debug!(
            "telegram envelope: PG {} chars, RW {} chars, date {epoch}",
            pg_hex.as_deref().map_or(0, str::len),
            rw_hex.as_deref().map_or(0, str::len),
        );

        Ok(Self {
            pg_hex,
            rw_hex,
            epoch,
        })
    }

    /// The register payload, if the telegram carried one.
    pub fn pg_hex(&self) -> Result<&str, Sl20Error> {
        self.pg_hex.as_deref().ok_or(Sl20Error::MissingField("PG"))
    }

    /// The waveform payload, if the telegram carried one.
    pub fn rw_hex(&self) -> Result<&str, Sl20Error> {
        self.rw_hex.as_deref().ok_or(Sl20Error::MissingField("RW"))
    }

    /// Acquisition time as Unix epoch seconds.
    pub fn epoch(&self) -> i64 {
        self.epoch
    }
}

/// Extract element 0 of a single-element string array field.
///
/// An absent field or an empty array is `None`; a field of the wrong
/// shape is an envelope error.
fn first_payload(object: &Map<String, Value>, key: &'static str) -> Result<Option<String>, Sl20Error> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => match items.first() {
            None => Ok(None),
            Some(Value::String(payload)) => Ok(Some(payload.clone())),
            Some(other) => Err(Sl20Error::TelegramParseError(format!(
                "{key}[0] is not a string: {other}"
            ))),
        },
        Some(other) => Err(Sl20Error::TelegramParseError(format!(
            "{key} is not an array: {other}"
        ))),
    }
}

/// Parse the `date` field, accepting an integer or a numeric string.
fn parse_epoch(date: &Value) -> Result<i64, Sl20Error> {
    let epoch = match date {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| Sl20Error::InvalidTimestamp(format!("non-integer date: {number}")))?,
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| Sl20Error::InvalidTimestamp(format!("non-numeric date: {text:?}")))?,
        other => {
            return Err(Sl20Error::InvalidTimestamp(format!(
                "unsupported date value: {other}"
            )))
        }
    };

    if epoch < 0 {
        return Err(Sl20Error::InvalidTimestamp(format!(
            "negative epoch: {epoch}"
        )));
    }

    Ok(epoch)
}
