// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Unsigned time management
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod error;
pub use error::TimeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Time structure used everywhere.
/// Seconds since 01/01/1970. Also used for durations such as the mint delay.
#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TokenTime(u64);

impl TokenTime {
    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time: TokenTime = TokenTime::from_secs(30);
    /// ```
    pub const fn from_secs(secs: u64) -> Self {
        TokenTime(secs)
    }

    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time: TokenTime = TokenTime::from_secs(30);
    /// assert_eq!(time.to_secs(), 30);
    /// ```
    pub const fn to_secs(self) -> u64 {
        self.0
    }

    /// Smallest time increment, one second
    pub const EPSILON: TokenTime = TokenTime(1);

    /// Current time, seconds since the UNIX epoch
    pub fn now() -> Result<Self, TimeError> {
        let now: u64 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TimeError::TimeOverflowError)?
            .as_secs();
        Ok(TokenTime(now))
    }

    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time_1: TokenTime = TokenTime::from_secs(42);
    /// let time_2: TokenTime = TokenTime::from_secs(7);
    /// let res: TokenTime = time_1.checked_add(time_2).unwrap();
    /// assert_eq!(res, TokenTime::from_secs(42 + 7))
    /// ```
    pub fn checked_add(self, t: TokenTime) -> Result<Self, TimeError> {
        self.0
            .checked_add(t.0)
            .ok_or_else(|| TimeError::CheckedOperationError("addition error".to_string()))
            .map(TokenTime)
    }

    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time_1: TokenTime = TokenTime::from_secs(42);
    /// let time_2: TokenTime = TokenTime::from_secs(7);
    /// let res: TokenTime = time_1.checked_sub(time_2).unwrap();
    /// assert_eq!(res, TokenTime::from_secs(42 - 7))
    /// ```
    pub fn checked_sub(self, t: TokenTime) -> Result<Self, TimeError> {
        self.0
            .checked_sub(t.0)
            .ok_or_else(|| TimeError::CheckedOperationError("subtraction error".to_string()))
            .map(TokenTime)
    }

    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time_1: TokenTime = TokenTime::from_secs(42);
    /// let time_2: TokenTime = TokenTime::from_secs(7);
    /// let res: TokenTime = time_1.saturating_sub(time_2);
    /// assert_eq!(res, TokenTime::from_secs(42 - 7))
    /// ```
    #[must_use]
    pub fn saturating_sub(self, t: TokenTime) -> Self {
        TokenTime(self.0.saturating_sub(t.0))
    }

    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time_1: TokenTime = TokenTime::from_secs(42);
    /// let time_2: TokenTime = TokenTime::from_secs(7);
    /// let res: TokenTime = time_1.saturating_add(time_2);
    /// assert_eq!(res, TokenTime::from_secs(42 + 7))
    /// ```
    #[must_use]
    pub fn saturating_add(self, t: TokenTime) -> Self {
        TokenTime(self.0.saturating_add(t.0))
    }

    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time_1: TokenTime = TokenTime::from_secs(42);
    /// let time_2: TokenTime = TokenTime::from_secs(84);
    ///
    /// assert_eq!(time_1.abs_diff(time_2), TokenTime::from_secs(42));
    /// assert_eq!(time_2.abs_diff(time_1), TokenTime::from_secs(42));
    /// ```
    pub fn abs_diff(&self, t: TokenTime) -> TokenTime {
        TokenTime(self.0.abs_diff(t.0))
    }

    /// ```
    /// # use prototoken_time::TokenTime;
    /// let time: TokenTime = TokenTime::from_secs(1_640_995_200);
    /// assert_eq!(time.format_instant(), String::from("2022-01-01T00:00:00Z"))
    /// ```
    pub fn format_instant(&self) -> String {
        let naive = OffsetDateTime::from_unix_timestamp(self.0 as i64).unwrap();
        naive.format(&Rfc3339).unwrap()
    }
}

impl fmt::Display for TokenTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_secs())
    }
}
