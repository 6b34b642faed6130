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

//! Aggregation, selection and chart data model for OpenMP loop schedule
//! benchmarks.
//!
//! A benchmark run times two loops under every combination of schedule,
//! chunk size and thread count. This crate turns those raw timings into the
//! numbers the charts and the report are drawn from:
//!
//! - **Transform**: chunk sizes are mapped to their rounded base-2 exponent
//!   ([`ChunkExponent`]); absent chunk sizes stay absent.
//! - **Aggregate**: measurements are grouped by
//!   `(schedule, chunk, threads, loop)` into an ordered [`AggregateTable`]
//!   with mean, sample standard deviation and count per group.
//! - **Select**: [`best_configuration`] finds the fastest group at a thread
//!   count; [`reference_time`] and [`speedup`] normalise against the serial
//!   `single` schedule.
//! - **Chart data**: [`ChartSpec`] describes a chart as filters over the
//!   table and [`ChartSpec::build`] evaluates it into renderer-ready
//!   [`ChartData`]. [`chart_plan`] lists the full chart set.
//!
//! # Examples
//!
//! ```
//! use loopsched_core::{
//!     best_configuration, build_charts, AggregateTable, AnalysisConfig, LoopId, Measurement,
//!     Schedule,
//! };
//!
//! let mut measurements = Vec::new();
//! for loop_id in LoopId::ALL {
//!     measurements.push(Measurement::new(Schedule::Single, None, 1, loop_id, 8.0).unwrap());
//!     measurements.push(Measurement::new(Schedule::Auto, None, 6, loop_id, 2.5).unwrap());
//!     measurements.push(Measurement::new(Schedule::Static, None, 6, loop_id, 2.2).unwrap());
//!     measurements.push(Measurement::new(Schedule::Guided, Some(4), 6, loop_id, 2.0).unwrap());
//! }
//!
//! let table = AggregateTable::from_measurements(&measurements).unwrap();
//! let best = best_configuration(&table, 6, LoopId::One).unwrap();
//! assert_eq!(best.key.schedule, Schedule::Guided);
//!
//! let charts = build_charts(&table, &AnalysisConfig::default()).unwrap();
//! assert_eq!(charts.len(), 14);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the data model and chart data.

#![warn(missing_docs)]

mod aggregate;
mod chart;
mod config;
mod error;
mod filter;
mod model;
mod plan;
mod report;
mod select;
mod transform;

pub use aggregate::{aggregate, AggregateTable, GroupKey, GroupStats};
pub use chart::{
    AxisScale, ChartData, ChartFamily, ChartId, ChartSpec, Point, ReferenceLine,
    ReferenceLineSpec, Series, SeriesSpec, SeriesStyle, XAxis, YValue, CHUNKED_SCHEDULES,
};
pub use config::{AnalysisConfig, DEFAULT_BEST_THREADS};
pub use error::{AnalysisError, Result};
pub use filter::{ChunkFilter, GroupFilter};
pub use model::{LoopId, Measurement, Schedule};
pub use plan::{build_charts, chart_plan, SCALING_SCHEDULES};
pub use report::{best_config_report, BestConfigReport};
pub use select::{best_configuration, reference_time, speedup, BestConfiguration, Reference};
pub use transform::{transform, ChunkExponent, TransformedMeasurement, MAX_CHUNK_EXPONENT};
