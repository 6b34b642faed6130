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

//! Chart rendering and summary export for loop schedule benchmarks.
//!
//! Charts built by `loopsched-core` are written through a [`ChartRenderer`]:
//!
//! - [`SvgRenderer`] draws them with plotters; thread-count axes are drawn
//!   in log2 space and labelled with the original thread counts.
//! - [`JsonRenderer`] writes the chart data itself, for plotting elsewhere.
//!
//! [`render_all`] writes a whole chart set and stops at the first failure.
//! The [`summary`] functions export the aggregate table as JSON or Markdown.
//!
//! # Examples
//!
//! ```no_run
//! use loopsched_core::{build_charts, AggregateTable, AnalysisConfig};
//! use loopsched_render::{render_all, SvgRenderer};
//! use std::path::Path;
//!
//! # let measurements = Vec::new();
//! let table = AggregateTable::from_measurements(&measurements).unwrap();
//! let charts = build_charts(&table, &AnalysisConfig::default()).unwrap();
//! let written = render_all(&charts, Path::new("graphs"), &SvgRenderer::default()).unwrap();
//! println!("{} charts written", written.len());
//! ```

mod error;
mod json;
mod renderer;
pub mod style;
pub mod summary;
mod svg;

pub use error::{RenderError, Result};
pub use json::JsonRenderer;
pub use renderer::{artifact_path, render_all, ChartRenderer};
pub use summary::{
    export_json, export_markdown, report_markdown, summary_json, summary_markdown, summary_rows,
    SummaryRow,
};
pub use svg::SvgRenderer;
