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

//! CLI command definitions and argument parsing.
//!
//! - [`analysis`]: report, charts, run
//! - [`export`]: summary

mod analysis;
mod export;

use crate::commands::AnalysisOptions;
use crate::error::{CliError, Result};
use clap::{Args, Subcommand};
use loopsched_core::{AnalysisConfig, LoopId, DEFAULT_BEST_THREADS};

pub use analysis::{AnalysisCommands, RendererKind, ReportFormat};
pub use export::{ExportCommands, SummaryFormat};

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Analysis (report, charts, run)
/// └── Export (summary)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Analysis commands - flattened to appear at top level
    #[command(flatten)]
    Analysis(AnalysisCommands),

    // Export commands - flattened to appear at top level
    #[command(flatten)]
    Export(ExportCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read or parsed, the analysis
    /// fails, or output cannot be written.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Analysis(cmd) => cmd.execute(),
            Commands::Export(cmd) => cmd.execute(),
        }
    }
}

/// Input file arguments shared by every command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Benchmark results CSV
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Field delimiter of the input file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

impl InputArgs {
    /// The delimiter as a byte.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for a non-ASCII delimiter.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(CliError::InvalidArgument(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )))
        }
    }
}

/// Selection arguments shared by the analysis commands.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Thread count the best configuration is selected at
    #[arg(short, long, default_value_t = DEFAULT_BEST_THREADS)]
    pub threads: u32,

    /// Loops to analyse, comma separated (default: 1,2)
    #[arg(short, long = "loop", value_name = "LOOP", value_delimiter = ',')]
    pub loops: Vec<u8>,
}

impl SelectionArgs {
    /// Builds and validates the analysis configuration.
    ///
    /// # Errors
    ///
    /// Fails for an unknown loop number or a zero thread count.
    pub fn config(&self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::default().with_best_threads(self.threads);
        if !self.loops.is_empty() {
            let loops = self
                .loops
                .iter()
                .map(|&n| LoopId::try_from(n))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            config = config.with_loops(loops);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Merges input and selection arguments into command options.
pub(crate) fn options(input: &InputArgs, selection: &SelectionArgs) -> Result<AnalysisOptions> {
    Ok(AnalysisOptions {
        file: input.file.clone(),
        delimiter: input.delimiter_byte()?,
        config: selection.config()?,
    })
}
