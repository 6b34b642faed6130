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

//! CSV loading of loop schedule benchmark results and summary export.
//!
//! # Input format
//!
//! One row per benchmark trial, with header columns
//! `schedule, chunksize, num_threads, loop, time` in any order:
//!
//! ```text
//! schedule,chunksize,num_threads,loop,time
//! single,nan,1,1,3.96
//! dynamic,8,6,1,0.66
//! auto,,6,1,0.87
//! ```
//!
//! - `schedule`: one of `static`, `dynamic`, `guided`, `auto`, `single`, `affinity`
//! - `chunksize`: positive integer up to 2^6 (after rounding to a power of
//!   two); blank or `nan` when the schedule has none
//! - `num_threads`: positive integer
//! - `loop`: `1` or `2`
//! - `time`: non-negative seconds
//!
//! # Examples
//!
//! ```
//! use loopsched_core::AggregateTable;
//! use loopsched_csv::{from_csv, to_csv};
//!
//! let csv = "schedule,chunksize,num_threads,loop,time\n\
//!            dynamic,8,6,1,0.5\n\
//!            dynamic,8,6,1,0.7\n";
//! let measurements = from_csv(csv).unwrap();
//! let table = AggregateTable::from_measurements(&measurements).unwrap();
//!
//! let summary = to_csv(&table).unwrap();
//! assert!(summary.contains("dynamic,8,6,1,2,0.6"));
//! ```

mod error;
mod from_csv;
mod to_csv;

// Re-export public API
pub use error::{CsvError, Result};
pub use from_csv::{
    from_csv, from_csv_reader, from_csv_reader_with_config, from_csv_with_config, FromCsvConfig,
    DEFAULT_MAX_ROWS, REQUIRED_COLUMNS,
};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig,
    SUMMARY_COLUMNS,
};
