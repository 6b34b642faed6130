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

//! Export commands.

use super::InputArgs;
use crate::commands;
use crate::error::Result;
use clap::{Subcommand, ValueEnum};

/// Summary table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// CSV with a header row
    Csv,
    /// JSON array
    Json,
    /// Markdown table
    Markdown,
}

/// Export commands.
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export per-group statistics
    ///
    /// One row per (schedule, chunk size, threads, loop) group with its
    /// count, mean and sample standard deviation.
    Summary {
        #[command(flatten)]
        input: InputArgs,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Csv)]
        format: SummaryFormat,
    },
}

impl ExportCommands {
    /// Execute the export command.
    pub fn execute(self) -> Result<()> {
        match self {
            ExportCommands::Summary {
                input,
                output,
                format,
            } => commands::summary(
                &input.file,
                input.delimiter_byte()?,
                format,
                output.as_deref(),
            ),
        }
    }
}
