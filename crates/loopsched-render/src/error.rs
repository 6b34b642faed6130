// Dweve loopsched - Loop Schedule Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for chart rendering and summary export.

use std::path::PathBuf;
use thiserror::Error;

/// Rendering errors.
///
/// The first failing chart aborts the remaining output; no partial set of
/// artifacts is reported as success.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Drawing backend failure for one chart.
    #[error("Failed to draw chart '{chart}': {message}")]
    Draw {
        /// Artifact name of the chart.
        chart: String,
        /// Backend error message.
        message: String,
    },

    /// The output directory could not be prepared.
    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// I/O error while writing an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result` with `RenderError`.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_error_display() {
        let err = RenderError::Draw {
            chart: "six_threads_loop_1".to_string(),
            message: "backend failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to draw chart 'six_threads_loop_1': backend failed"
        );
    }

    #[test]
    fn test_output_dir_display() {
        let err = RenderError::OutputDir {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/nope"));
    }
}
