//! Snowflake ID - the chat platform's 64-bit identifier
//!
//! The platform issues these as unsigned integers; the database stores them
//! in `BIGINT` columns. Real IDs never use the top bit, so the conversion is
//! lossless.

use std::fmt;

/// Platform-issued snowflake, stored as the signed value kept in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Create a new Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value (the form bound into SQL parameters)
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Get the unsigned form used by the gateway client
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0 as u64
    }

    /// Check if the Snowflake is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.trim()
            .parse::<u64>()
            .map(Self::from)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id as i64)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_creation() {
        let sf = Snowflake::new(123_456_789);
        assert_eq!(sf.into_inner(), 123_456_789);
        assert_eq!(sf.as_u64(), 123_456_789);
    }

    #[test]
    fn test_snowflake_zero() {
        assert!(Snowflake::default().is_zero());
        assert!(!Snowflake::new(1).is_zero());
    }

    #[test]
    fn test_snowflake_parse() {
        let sf = Snowflake::parse("1300659373227638794").unwrap();
        assert_eq!(sf.into_inner(), 1_300_659_373_227_638_794);

        let sf = Snowflake::parse(" 42 ").unwrap();
        assert_eq!(sf.into_inner(), 42);

        assert!(Snowflake::parse("invalid").is_err());
        assert!(Snowflake::parse("-5").is_err());
        assert!(Snowflake::parse("").is_err());
    }

    #[test]
    fn test_snowflake_display() {
        let sf = Snowflake::new(1_331_177_944_244_289_598);
        assert_eq!(sf.to_string(), "1331177944244289598");
    }

    #[test]
    fn test_snowflake_u64_conversion_is_lossless() {
        let raw: u64 = 1_306_190_915_483_734_026;
        let sf = Snowflake::from(raw);
        assert_eq!(sf.as_u64(), raw);
        assert_eq!(i64::from(sf), raw as i64);
    }

    #[test]
    fn test_snowflake_ordering() {
        assert!(Snowflake::new(100) < Snowflake::new(200));
    }
}
