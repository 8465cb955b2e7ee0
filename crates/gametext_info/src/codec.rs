//! The info string codec.
//!
//! An info string is a run of `\key\value` records:
//!
//! ```text
//! \name\bob\hand\2\skin\default
//! ```
//!
//! Every operation validates its inputs before doing anything. Mutators
//! work in place on a caller-owned [`InfoBuffer`] and never leave a
//! partially written record behind.

use gametext_foundation::{Error, InfoLimits, Result};

use crate::buffer::InfoBuffer;
use crate::ring::{ValueRing, ValueSlot};
use crate::validate::{
    DELIMITER, check_configstring, validate_info_string, validate_key, validate_value,
};

/// One `\key\value` record of an info string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    /// Byte offset of the leading `\`.
    pub start: usize,
    /// Byte offset just past the value.
    pub end: usize,
    /// The key.
    pub key: &'a str,
    /// The value, possibly empty.
    pub value: &'a str,
}

/// Iterator over the records of an info string, left to right.
///
/// Built by [`InfoCodec::pairs`], which validates the string first.
#[derive(Clone, Debug)]
pub struct Records<'a> {
    info: &'a str,
    position: usize,
}

impl<'a> Records<'a> {
    const fn new(info: &'a str) -> Self {
        Self { info, position: 0 }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position;
        let body = self.info.get(start..)?.strip_prefix('\\')?;

        let key_len = memchr::memchr(DELIMITER, body.as_bytes())?;
        let key = &body[..key_len];
        let tail = &body[key_len + 1..];
        let value_len = memchr::memchr(DELIMITER, tail.as_bytes()).unwrap_or(tail.len());
        let value = &tail[..value_len];

        let end = start + 1 + key_len + 1 + value_len;
        self.position = end;
        Some(Record {
            start,
            end,
            key,
            value,
        })
    }
}

/// Info string operations under a set of [`InfoLimits`].
///
/// The codec also owns the [`ValueRing`] that
/// [`value_for_key`](Self::value_for_key) copies into. Keep one codec per
/// thread; `&mut self` already stops two lookups from racing on the ring.
#[derive(Clone, Debug)]
pub struct InfoCodec {
    limits: InfoLimits,
    values: ValueRing,
}

impl Default for InfoCodec {
    fn default() -> Self {
        Self::new(InfoLimits::standard())
    }
}

impl InfoCodec {
    /// Creates a codec enforcing `limits`.
    #[must_use]
    pub fn new(limits: InfoLimits) -> Self {
        Self {
            limits,
            values: ValueRing::with_capacity(limits.max_info_value),
        }
    }

    /// Creates a codec after checking that `limits` are usable.
    ///
    /// # Errors
    ///
    /// Returns the error from [`InfoLimits::validate`].
    pub fn try_new(limits: InfoLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self::new(limits))
    }

    /// Returns the limits this codec enforces.
    #[must_use]
    pub const fn limits(&self) -> &InfoLimits {
        &self.limits
    }

    /// See [`validate_info_string`].
    ///
    /// # Errors
    ///
    /// Returns an invalid info string error.
    pub fn validate_info_string(&self, info: &str) -> Result<()> {
        validate_info_string(info, &self.limits)
    }

    /// See [`validate_key`].
    ///
    /// # Errors
    ///
    /// Returns an invalid key error.
    pub fn validate_key(&self, key: &str) -> Result<()> {
        validate_key(key, &self.limits)
    }

    /// See [`validate_value`].
    ///
    /// # Errors
    ///
    /// Returns an invalid value error.
    pub fn validate_value(&self, value: &str) -> Result<()> {
        validate_value(value, &self.limits)
    }

    /// Turns an untrusted payload into an info string.
    ///
    /// Runs the configstring parity check and then full info string
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns an unbalanced quotes or invalid info string error.
    pub fn accept_payload(&self, payload: &str) -> Result<InfoBuffer> {
        check_configstring(payload)
            .and_then(|()| self.validate_info_string(payload))
            .inspect_err(|err| tracing::warn!(error = %err, "rejecting info string payload"))?;
        Ok(InfoBuffer::from(payload))
    }

    fn check_lookup(&self, info: &str, key: &str) -> Result<()> {
        self.validate_info_string(info)
            .and_then(|()| self.validate_key(key))
            .inspect_err(|err| tracing::warn!(error = %err, key, "refusing info string lookup"))
    }

    /// Iterates over the records of `info`.
    ///
    /// # Errors
    ///
    /// Returns an invalid info string error.
    pub fn pairs<'a>(&self, info: &'a str) -> Result<Records<'a>> {
        self.validate_info_string(info)?;
        Ok(Records::new(info))
    }

    /// Finds the record for `key`, scanning left to right.
    ///
    /// Returns the byte offset of the record's leading `\`. Keys compare
    /// byte for byte, and only key segments are compared, never values.
    ///
    /// # Errors
    ///
    /// Returns an error if `info` or `key` fails validation.
    pub fn find_key(&self, info: &str, key: &str) -> Result<Option<usize>> {
        self.check_lookup(info, key)?;
        Ok(find_record(info, key).map(|record| record.start))
    }

    /// Returns the value for `key`, borrowed from `info`.
    ///
    /// # Errors
    ///
    /// Returns an error if `info` or `key` fails validation.
    pub fn find_value<'a>(&self, info: &'a str, key: &str) -> Result<Option<&'a str>> {
        self.check_lookup(info, key)?;
        Ok(find_record(info, key).map(|record| record.value))
    }

    /// Copies the value for `key` into the codec's value ring.
    ///
    /// The returned slot resolves through [`value`](Self::value) until two
    /// more values have been stored, so the results of the last two lookups
    /// can always be compared. A lookup that finds nothing stores nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if `info` or `key` fails validation.
    pub fn value_for_key(&mut self, info: &str, key: &str) -> Result<Option<ValueSlot>> {
        self.check_lookup(info, key)?;
        let Some(record) = find_record(info, key) else {
            return Ok(None);
        };
        Ok(Some(self.values.store(record.value)))
    }

    /// Resolves a slot from [`value_for_key`](Self::value_for_key).
    ///
    /// Returns `None` once the slot's buffer has been reused.
    #[must_use]
    pub fn value(&self, slot: ValueSlot) -> Option<&str> {
        self.values.get(slot)
    }

    /// Removes every record for `key` from `info`.
    ///
    /// Duplicate keys, which the codec itself never produces, are all
    /// removed. Returns how many records went; `info` is untouched when the
    /// key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if `info` or `key` fails validation.
    pub fn remove_key(&self, info: &mut InfoBuffer, key: &str) -> Result<usize> {
        self.check_lookup(info.as_str(), key)?;

        let mut removed = 0;
        while let Some(record) = find_record(info.as_str(), key) {
            if record.end == info.len() {
                info.truncate(record.start);
            } else {
                info.remove_range(record.start..record.end);
            }
            removed += 1;
        }
        Ok(removed)
    }

    /// Sets `key` to `value`, replacing any existing record.
    ///
    /// The old record is removed first and the new one appended at the end.
    /// If the new record would bring `info` to `max_info_string` bytes or
    /// more, nothing is appended and an overflow error is returned. The old
    /// record stays removed in that case: a failed call means no
    /// replacement happened, not that the old value survived.
    ///
    /// # Errors
    ///
    /// Returns an error if `info`, `key`, or `value` fails validation, or on
    /// overflow.
    pub fn set_value_for_key(&self, info: &mut InfoBuffer, key: &str, value: &str) -> Result<()> {
        self.validate_info_string(info.as_str())
            .and_then(|()| self.validate_key(key))
            .and_then(|()| self.validate_value(value))
            .inspect_err(|err| tracing::warn!(error = %err, key, "refusing info string update"))?;

        self.remove_key(info, key)?;

        let required = info.len() + 2 + key.len() + value.len();
        if required >= self.limits.max_info_string {
            tracing::debug!(
                key,
                required,
                limit = self.limits.max_info_string,
                "info string full"
            );
            return Err(Error::overflow(required, self.limits.max_info_string));
        }

        info.push_str("\\");
        info.push_str(key);
        info.push_str("\\");
        info.push_str(value);
        Ok(())
    }
}

fn find_record<'a>(info: &'a str, key: &str) -> Option<Record<'a>> {
    Records::new(info).find(|record| record.key == key)
}
