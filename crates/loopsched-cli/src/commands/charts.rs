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

//! Charts command

use super::{load_table, AnalysisOptions};
use crate::cli::RendererKind;
use crate::error::Result;
use loopsched_core::{build_charts, ChartData};
use loopsched_render::{render_all, ChartRenderer, JsonRenderer, SvgRenderer};
use std::path::{Path, PathBuf};

/// Builds every chart for the configured loops and renders them into
/// `out_dir`.
///
/// # Errors
///
/// Fails if a required baseline group is missing or any chart fails to
/// render; nothing after the failing chart is written.
pub fn charts(options: &AnalysisOptions, out_dir: &str, renderer: RendererKind) -> Result<()> {
    let table = load_table(&options.file, options.delimiter)?;
    let charts = build_charts(&table, &options.config)?;
    let written = render_charts(&charts, Path::new(out_dir), renderer)?;
    println!("Wrote {} charts to {}", written.len(), out_dir);
    Ok(())
}

pub(super) fn render_charts(
    charts: &[ChartData],
    out_dir: &Path,
    renderer: RendererKind,
) -> Result<Vec<PathBuf>> {
    let written = render_all(charts, out_dir, backend(renderer).as_ref())?;
    Ok(written)
}

fn backend(kind: RendererKind) -> Box<dyn ChartRenderer> {
    match kind {
        RendererKind::Svg => Box::new(SvgRenderer::default()),
        RendererKind::Json => Box::new(JsonRenderer),
    }
}
