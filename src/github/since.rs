//! Lower bound on item update times, normalised for the GitHub API.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::error::CreditsError;

/// Canonical timestamp layout sent in the `since` query parameter.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Inclusive lower bound on an item's last-updated timestamp.
///
/// The bound is applied server-side on every list query. Omission is
/// modelled as `Option<SinceBound>`; `None` sends no `since` key at all,
/// which GitHub treats differently from an empty value.
///
/// # Example
///
/// ```
/// use accolade::github::since::SinceBound;
///
/// let bound = SinceBound::parse("2024-01-01").expect("date should parse");
/// assert_eq!(bound.as_str(), "2024-01-01T00:00:00.000Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinceBound(String);

impl SinceBound {
    /// Parses a date string into a canonical UTC timestamp.
    ///
    /// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which
    /// is interpreted as midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns `CreditsError::InvalidSince` when the input matches neither
    /// form.
    pub fn parse(raw: &str) -> Result<Self, CreditsError> {
        let trimmed = raw.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            let canonical = instant.with_timezone(&Utc).format(CANONICAL_FORMAT);
            return Ok(Self(canonical.to_string()));
        }

        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
            CreditsError::InvalidSince {
                value: raw.to_owned(),
            }
        })?;
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        Ok(Self(midnight.format(CANONICAL_FORMAT).to_string()))
    }

    /// Borrow the canonical timestamp string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::SinceBound;
    use crate::github::error::CreditsError;

    #[rstest]
    #[case::bare_date("2024-01-01", "2024-01-01T00:00:00.000Z")]
    #[case::bare_date_padded("  2024-01-01  ", "2024-01-01T00:00:00.000Z")]
    #[case::rfc3339_utc("2024-06-15T12:30:00Z", "2024-06-15T12:30:00.000Z")]
    #[case::rfc3339_offset("2024-06-15T12:30:00+02:00", "2024-06-15T10:30:00.000Z")]
    #[case::rfc3339_millis("2024-06-15T12:30:00.250Z", "2024-06-15T12:30:00.250Z")]
    fn normalises_supported_inputs(#[case] raw: &str, #[case] canonical: &str) {
        let bound = SinceBound::parse(raw).expect("input should parse");
        assert_eq!(bound.as_str(), canonical);
    }

    #[rstest]
    #[case::empty("")]
    #[case::words("last tuesday")]
    #[case::wrong_order("01-01-2024")]
    #[case::date_without_day("2024-01")]
    fn rejects_unparseable_inputs(#[case] raw: &str) {
        let error = SinceBound::parse(raw).expect_err("input should not parse");
        assert!(
            matches!(error, CreditsError::InvalidSince { .. }),
            "expected InvalidSince, got {error:?}"
        );
    }
}
