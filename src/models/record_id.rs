use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Primary key assigned by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record id: {0:?}")]
pub struct InvalidRecordId(pub String);

/// Parses the leading integer of `s`.
///
/// Leading whitespace is skipped and anything after the digits is ignored,
/// so `"42"`, `" 42"` and `"42abc"` all give 42.
impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(InvalidRecordId(s.to_string()));
        }

        let magnitude: i64 = rest[..digits_len]
            .parse()
            .map_err(|_| InvalidRecordId(s.to_string()))?;

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

/// Anything that can be coerced into a [`RecordId`] before it is sent to the store
pub trait ToRecordId {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId>;
}

impl ToRecordId for RecordId {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        Ok(*self)
    }
}

impl ToRecordId for i64 {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        Ok(RecordId(*self))
    }
}

impl ToRecordId for i32 {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        Ok(RecordId(i64::from(*self)))
    }
}

impl ToRecordId for u32 {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        Ok(RecordId(i64::from(*self)))
    }
}

impl ToRecordId for u64 {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        i64::try_from(*self)
            .map(RecordId)
            .map_err(|_| InvalidRecordId(self.to_string()))
    }
}

impl ToRecordId for str {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        self.parse()
    }
}

impl ToRecordId for String {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        self.parse()
    }
}

impl<T: ToRecordId + ?Sized> ToRecordId for &T {
    fn to_record_id(&self) -> Result<RecordId, InvalidRecordId> {
        (**self).to_record_id()
    }
}
