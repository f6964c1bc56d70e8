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

//! Bridge error types and utilities

use std::io;
use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors a native bridge implementation can surface
///
/// Implementations return these through `anyhow::Result` at the trait
/// boundary; the client never inspects or masks them, it only relays.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Native module not linked or the platform is unsupported
    #[error("native bridge unavailable: {0}")]
    Unavailable(String),

    /// The platform denied access to the media library
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The referenced media item does not exist
    #[error("media item not found: {0}")]
    NotFound(String),

    /// I/O error while reading or writing media content
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transparent error delegation for wrapped error types
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BridgeError {
    /// Create an Unavailable error with context
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        BridgeError::Unavailable(msg.into())
    }

    /// Create a PermissionDenied error with context
    pub fn permission_denied<S: Into<String>>(msg: S) -> Self {
        BridgeError::PermissionDenied(msg.into())
    }

    /// Create a NotFound error with the given identifier
    pub fn not_found<S: Into<String>>(uri: S) -> Self {
        BridgeError::NotFound(uri.into())
    }

    /// Check if this is an Unavailable error
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BridgeError::Unavailable(_))
    }

    /// Check if this is a PermissionDenied error
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, BridgeError::PermissionDenied(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, BridgeError::NotFound(_))
    }
}
