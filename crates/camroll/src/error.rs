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

//! Client error types

use camroll_model::ModelError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, RollError>;

/// Errors surfaced by the photo library client
///
/// Precondition violations are raised synchronously before any delegation
/// occurs and mean the call site is wrong; fix the call, don't retry.
/// Everything the native layer fails with propagates unchanged through
/// [`RollError::Bridge`].
#[derive(Debug, Error)]
pub enum RollError {
    /// The file reference cannot name any media content
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// The media kind hint is outside the closed enumeration
    #[error(transparent)]
    InvalidMediaKind(#[from] ModelError),

    /// Failure propagated unchanged from the native bridge
    #[error(transparent)]
    Bridge(#[from] anyhow::Error),
}

impl RollError {
    /// Create an InvalidTag error with context
    pub fn invalid_tag<S: Into<String>>(msg: S) -> Self {
        RollError::InvalidTag(msg.into())
    }

    /// Check if this is a local precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            RollError::InvalidTag(_) | RollError::InvalidMediaKind(_)
        )
    }

    /// Check if this failure originated behind the bridge
    pub fn is_bridge(&self) -> bool {
        matches!(self, RollError::Bridge(_))
    }
}
