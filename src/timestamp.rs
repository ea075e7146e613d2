//! Telegram timestamp rendering.
//!
//! Telegram timestamps are UTC Unix epoch seconds; zero is a legitimate
//! value reported by devices that lost their clock, so only negative or
//! unrepresentable epochs are errors. Historical firmware revisions
//! disagreed on the display pattern, so the pattern is a caller-supplied
//! parameter with one fixed default rather than a hard-coded constant.

use crate::constants::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::Sl20Error;
use chrono::{DateTime, Utc};

/// Render a telegram epoch with the default display pattern.
pub fn format_timestamp(epoch: i64) -> Result<String, Sl20Error> {
    format_timestamp_with(epoch, DEFAULT_TIMESTAMP_FORMAT)
}

/// Render a telegram epoch with an explicit chrono format pattern.
pub fn format_timestamp_with(epoch: i64, pattern: &str) -> Result<String, Sl20Error> {
    if epoch < 0 {
        return Err(Sl20Error::InvalidTimestamp(format!(
            "negative epoch: {epoch}"
        )));
    }

    let instant = DateTime::<Utc>::from_timestamp(epoch, 0).ok_or_else(|| {
        Sl20Error::InvalidTimestamp(format!("epoch out of range: {epoch}"))
    })?;

    Ok(instant.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_zero_renders_unix_epoch() {
        assert_eq!(format_timestamp(0).unwrap(), "00:00 01 January 1970");
    }

    #[test]
    fn test_known_epoch() {
        assert_eq!(
            format_timestamp(1_000_000_000).unwrap(),
            "01:46 09 September 2001"
        );
    }

    #[test]
    fn test_custom_pattern() {
        assert_eq!(
            format_timestamp_with(0, "%Y-%m-%d %H:%M").unwrap(),
            "1970-01-01 00:00"
        );
    }

    #[test]
    fn test_negative_epoch_rejected() {
        assert!(matches!(
            format_timestamp(-1),
            Err(Sl20Error::InvalidTimestamp(_))
        ));
    }
}
