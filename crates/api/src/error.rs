// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;
use workforce_optimizer::CoreError;

/// API-level errors.
///
/// Parsing failures carry the user-facing message; rejected batches wrap
/// the pipeline error so that its validation report can still be rendered.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The input is neither CSV nor JSON.
    #[error("Invalid data format. Please provide data in CSV or JSON format.")]
    UnrecognizedFormat,

    /// The input looked like JSON but could not be parsed.
    #[error("Invalid JSON format.")]
    InvalidJson {
        /// Parser detail, logged but not shown to the user.
        reason: String,
    },

    /// The input looked like CSV but could not be parsed.
    #[error("Invalid CSV format. {reason}")]
    InvalidCsvFormat {
        /// Parser detail.
        reason: String,
    },

    /// A template format name was not recognized.
    #[error("Unknown template format '{format}' (expected csv, json, or both)")]
    UnknownTemplateFormat {
        /// The unrecognized name.
        format: String,
    },

    /// The parsed batch was rejected by the pipeline.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}
