// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Result alias for model-level operations
pub type ModelsResult<T, E = ModelsError> = core::result::Result<T, E>;

/// Models error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelsError {
    /// amount parse error: {0}
    AmountParseError(String),
    /// address parse error
    AddressParseError,
    /// checked operation error: {0}
    CheckedOperationError(String),
}
