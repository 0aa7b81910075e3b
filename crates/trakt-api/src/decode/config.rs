//! Shared, read-only decoding configuration.

use std::sync::LazyLock;

use chrono::FixedOffset;

use super::context::DecodeContext;

/// Seconds west of UTC for the zone Trakt reports dates in (GMT-8).
const TRAKT_UTC_OFFSET_WEST_SECS: i32 = 28_800;

/// Wire format of calendar-date strings.
const TRAKT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed reference zone for Trakt dates.
#[allow(clippy::expect_used)]
static TRAKT_TIME_ZONE: LazyLock<FixedOffset> = LazyLock::new(|| {
    FixedOffset::west_opt(TRAKT_UTC_OFFSET_WEST_SECS).expect("GMT-8 is a valid UTC offset")
});

/// Process-wide default configuration, built on first use.
static SHARED: LazyLock<DecoderConfig> = LazyLock::new(DecoderConfig::default);

/// Decoding rules that are not expressed by the entity types themselves.
///
/// Built once and passed by reference into every decode call; never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct DecoderConfig {
    /// Zone used to interpret calendar-date strings.
    time_zone: FixedOffset,
    /// `chrono` format of calendar-date strings.
    date_format: &'static str,
    /// Whether non-numeric integer fields degrade to "unset".
    lenient_integers: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            time_zone: *TRAKT_TIME_ZONE,
            date_format: TRAKT_DATE_FORMAT,
            lenient_integers: true,
        }
    }
}

impl DecoderConfig {
    /// Returns the process-wide default configuration.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Overrides the reference zone.
    #[must_use]
    pub const fn with_time_zone(mut self, zone: FixedOffset) -> Self {
        self.time_zone = zone;
        self
    }

    /// Enables or disables lenient integer fields.
    #[must_use]
    pub const fn with_lenient_integers(mut self, lenient: bool) -> Self {
        self.lenient_integers = lenient;
        self
    }

    /// Reference zone for calendar dates.
    #[must_use]
    pub const fn time_zone(&self) -> FixedOffset {
        self.time_zone
    }

    /// Calendar-date format string.
    #[must_use]
    pub const fn date_format(&self) -> &'static str {
        self.date_format
    }

    /// Whether non-numeric integer fields degrade to "unset".
    #[must_use]
    pub const fn lenient_integers(&self) -> bool {
        self.lenient_integers
    }

    /// Starts a decode at the document root.
    #[must_use]
    pub const fn context(&self) -> DecodeContext<'_> {
        DecodeContext::new(self)
    }
}
