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

//! Analysis commands: best-configuration report and charts.

use super::{options, InputArgs, SelectionArgs};
use crate::commands;
use crate::error::Result;
use clap::{Subcommand, ValueEnum};

/// Output format of the best-configuration report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One sentence per loop
    Text,
    /// Markdown list
    Markdown,
}

/// Chart output backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererKind {
    /// SVG images
    Svg,
    /// Chart data as JSON
    Json,
}

/// Analysis commands.
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Report the best schedule per loop
    ///
    /// Selects, for each loop, the schedule and chunk size with the lowest
    /// mean execution time at the given thread count.
    Report {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Render the comparison charts
    ///
    /// Writes one file per chart into the output directory. Stops at the
    /// first chart that fails to render.
    Charts {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory (created if missing)
        #[arg(short = 'd', long, default_value = "graphs")]
        out_dir: String,

        /// Chart backend
        #[arg(short, long, value_enum, default_value_t = RendererKind::Svg)]
        renderer: RendererKind,
    },

    /// Report, charts and summary table in one pass
    ///
    /// Prints the report and writes `report.md`, `summary.csv` and the
    /// charts into the output directory.
    Run {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory (created if missing)
        #[arg(short = 'd', long, default_value = "out")]
        out_dir: String,

        /// Chart backend
        #[arg(short, long, value_enum, default_value_t = RendererKind::Svg)]
        renderer: RendererKind,
    },
}

impl AnalysisCommands {
    /// Execute the analysis command.
    pub fn execute(self) -> Result<()> {
        match self {
            AnalysisCommands::Report {
                input,
                selection,
                output,
                format,
            } => commands::report(&options(&input, &selection)?, format, output.as_deref()),
            AnalysisCommands::Charts {
                input,
                selection,
                out_dir,
                renderer,
            } => commands::charts(&options(&input, &selection)?, &out_dir, renderer),
            AnalysisCommands::Run {
                input,
                selection,
                out_dir,
                renderer,
            } => commands::run(&options(&input, &selection)?, &out_dir, renderer),
        }
    }
}
