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

//! Shared test fixtures for loopsched crates.
//!
//! Provides canonical measurement sets, a builder for custom sets, a sample
//! result file and malformed CSV inputs, so every crate tests against the
//! same data.
//!
//! # Quick Start
//!
//! ```rust
//! use loopsched_test::fixtures;
//! use loopsched_core::{LoopId, Schedule};
//!
//! // Complete synthetic benchmark run
//! let measurements = fixtures::full_run();
//! assert!(!measurements.is_empty());
//!
//! // Custom sets
//! use loopsched_test::fixtures::builders::MeasurementSetBuilder;
//!
//! let measurements = MeasurementSetBuilder::new()
//!     .trials(&[0.9, 1.1])
//!     .run(Schedule::Dynamic, Some(4), 6, LoopId::One, 2.0)
//!     .build();
//! assert_eq!(measurements.len(), 2);
//!
//! // Sample result file
//! let csv = loopsched_test::RESULTS_CSV;
//! assert!(csv.starts_with("schedule,chunksize,num_threads,loop,time"));
//! ```

pub mod fixtures;

use std::path::PathBuf;

/// Sample benchmark result file: two trials of every configuration on 1, 2,
/// 4, 6, 8 and 16 threads.
pub const RESULTS_CSV: &str = include_str!("../fixtures/results.csv");

/// Number of data rows in [`RESULTS_CSV`].
pub const RESULTS_CSV_ROWS: usize = 580;

/// Path of the sample result file on disk, for tests that need a real file.
pub fn results_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("results.csv")
}
