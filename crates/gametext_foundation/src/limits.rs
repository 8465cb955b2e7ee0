//! Configured bounds for info strings.

use crate::error::{Error, Result};

/// Default exclusive bound on the total length of an info string.
pub const MAX_INFO_STRING: usize = 512;

/// Default exclusive bound on the length of a single key.
pub const MAX_INFO_KEY: usize = 64;

/// Default exclusive bound on the length of a single value.
pub const MAX_INFO_VALUE: usize = 64;

/// Length bounds applied by the info string codec.
///
/// Every bound is exclusive: a key of exactly `max_info_key` bytes is
/// rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfoLimits {
    /// Bound on the total info string length.
    pub max_info_string: usize,
    /// Bound on each key.
    pub max_info_key: usize,
    /// Bound on each value.
    pub max_info_value: usize,
}

impl Default for InfoLimits {
    fn default() -> Self {
        Self::standard()
    }
}

impl InfoLimits {
    /// The limits used for userinfo and serverinfo strings.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            max_info_string: MAX_INFO_STRING,
            max_info_key: MAX_INFO_KEY,
            max_info_value: MAX_INFO_VALUE,
        }
    }

    /// Tighter limits for payloads that share a packet with other data.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            max_info_string: 256,
            max_info_key: 32,
            max_info_value: 32,
        }
    }

    /// Builder method to set the info string bound.
    #[must_use]
    pub fn with_max_info_string(mut self, max: usize) -> Self {
        self.max_info_string = max;
        self
    }

    /// Builder method to set the key bound.
    #[must_use]
    pub fn with_max_info_key(mut self, max: usize) -> Self {
        self.max_info_key = max;
        self
    }

    /// Builder method to set the value bound.
    #[must_use]
    pub fn with_max_info_value(mut self, max: usize) -> Self {
        self.max_info_value = max;
        self
    }

    /// Longest record (`\key\value`) these limits can ever produce.
    #[must_use]
    pub const fn max_record_len(&self) -> usize {
        // two delimiters plus the longest accepted key and value
        2 + self.max_info_key.saturating_sub(1) + self.max_info_value.saturating_sub(1)
    }

    /// Checks that these limits admit at least one record.
    ///
    /// The smallest record is `\k\`: one key byte, an empty value, and two
    /// delimiters. It must fit strictly below `max_info_string`. The key and
    /// value bounds must also be below `max_info_string`, since no segment
    /// can be longer than the string holding it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig)
    /// when a bound is too small to hold anything.
    pub fn validate(&self) -> Result<()> {
        if self.max_info_key < 2 {
            return Err(Error::invalid_config(format!(
                "max_info_key must be at least 2, got {}",
                self.max_info_key
            )));
        }
        if self.max_info_value < 1 {
            return Err(Error::invalid_config("max_info_value must be at least 1"));
        }
        if self.max_info_string < 4 {
            return Err(Error::invalid_config(format!(
                "max_info_string must be at least 4, got {}",
                self.max_info_string
            )));
        }
        if self.max_info_key >= self.max_info_string {
            return Err(Error::invalid_config(format!(
                "max_info_key must be below max_info_string ({}), got {}",
                self.max_info_string, self.max_info_key
            )));
        }
        if self.max_info_value >= self.max_info_string {
            return Err(Error::invalid_config(format!(
                "max_info_value must be below max_info_string ({}), got {}",
                self.max_info_string, self.max_info_value
            )));
        }
        Ok(())
    }
}
