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

//! loopsched CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Analysis
//!
//! - **report**: Best schedule and chunk size per loop at a thread count
//! - **charts**: Render every comparison chart (SVG or JSON chart data)
//! - **run**: Report, charts and summary table into one directory
//!
//! ## Export
//!
//! - **summary**: Per-group statistics as CSV, JSON or Markdown
//!
//! # Limits
//!
//! Input files larger than [`commands::DEFAULT_MAX_FILE_SIZE`] are rejected
//! before reading; set `LOOPSCHED_MAX_FILE_SIZE` (bytes) to change the limit.

pub mod cli;
pub mod commands;
pub mod error;
