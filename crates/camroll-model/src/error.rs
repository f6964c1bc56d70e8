// CamRoll - Typed Client for the Device Photo Library
// Copyright (C) 2025 CamRoll Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Error types for model parsing

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors produced while parsing model enumerations from their wire tokens
///
/// These are precondition violations: a caller passed a token outside a
/// closed enumeration. Callers are expected to fix the call site, not retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Token is not a member of the group type enumeration
    #[error("unknown group type: {0}")]
    UnknownGroupType(String),

    /// Token is not a member of the asset type enumeration
    #[error("unknown asset type: {0}")]
    UnknownAssetType(String),

    /// Token is neither 'photo' nor 'video'
    #[error("unknown media kind: {0} (expected 'photo' or 'video')")]
    UnknownMediaKind(String),
}
