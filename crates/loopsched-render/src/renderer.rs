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

//! Renderer abstraction and artifact layout.

use crate::error::{RenderError, Result};
use loopsched_core::{ChartData, ChartId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Turns chart data into a file.
pub trait ChartRenderer {
    /// File extension of produced artifacts, without the dot.
    fn extension(&self) -> &'static str;

    /// Writes `chart` to `path`.
    fn render(&self, chart: &ChartData, path: &Path) -> Result<()>;
}

/// Path of a chart's artifact: `<dir>/<family>[_<schedule>]_loop_<L>.<ext>`.
///
/// # Examples
///
/// ```
/// use loopsched_core::{ChartFamily, ChartId, LoopId};
/// use loopsched_render::artifact_path;
/// use std::path::Path;
///
/// let id = ChartId {
///     family: ChartFamily::AutoStatic,
///     loop_id: LoopId::One,
///     schedule: None,
/// };
/// assert_eq!(
///     artifact_path(Path::new("graphs"), &id, "svg"),
///     Path::new("graphs/auto_static_loop_1.svg")
/// );
/// ```
pub fn artifact_path(dir: &Path, id: &ChartId, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", id.file_stem(), extension))
}

/// Renders every chart into `dir`, creating it if needed.
///
/// Stops at the first failure; artifacts already written are left in place
/// but the call fails.
pub fn render_all(
    charts: &[ChartData],
    dir: &Path,
    renderer: &dyn ChartRenderer,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| RenderError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(charts.len());
    for chart in charts {
        let path = artifact_path(dir, &chart.id, renderer.extension());
        renderer.render(chart, &path)?;
        info!(path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loopsched_core::{AxisScale, ChartFamily, LoopId};
    use std::cell::Cell;

    struct FailingAfter {
        remaining: Cell<usize>,
    }

    impl ChartRenderer for FailingAfter {
        fn extension(&self) -> &'static str {
            "txt"
        }

        fn render(&self, chart: &ChartData, path: &Path) -> Result<()> {
            if self.remaining.get() == 0 {
                return Err(RenderError::Draw {
                    chart: chart.id.file_stem(),
                    message: "out of ink".to_string(),
                });
            }
            self.remaining.set(self.remaining.get() - 1);
            fs::write(path, &chart.title)?;
            Ok(())
        }
    }

    fn chart(loop_id: LoopId) -> ChartData {
        ChartData {
            id: ChartId {
                family: ChartFamily::AutoStatic,
                loop_id,
                schedule: None,
            },
            title: format!("loop {}", loop_id),
            x_label: String::new(),
            y_label: String::new(),
            x_scale: AxisScale::Log2,
            series: Vec::new(),
            reference_lines: Vec::new(),
        }
    }

    #[test]
    fn test_render_all_writes_every_chart() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = FailingAfter {
            remaining: Cell::new(2),
        };

        let written = render_all(&[chart(LoopId::One), chart(LoopId::Two)], dir.path(), &renderer)
            .unwrap();
        assert_eq!(written.len(), 2);
        assert!(dir.path().join("auto_static_loop_2.txt").is_file());
    }

    #[test]
    fn test_render_all_aborts_on_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = FailingAfter {
            remaining: Cell::new(0),
        };

        let err = render_all(&[chart(LoopId::One), chart(LoopId::Two)], dir.path(), &renderer)
            .unwrap_err();
        assert!(matches!(err, RenderError::Draw { .. }));
        assert!(!dir.path().join("auto_static_loop_2.txt").exists());
    }

    #[test]
    fn test_render_all_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("graphs").join("run-1");
        let renderer = FailingAfter {
            remaining: Cell::new(1),
        };

        render_all(&[chart(LoopId::One)], &nested, &renderer).unwrap();
        assert!(nested.join("auto_static_loop_1.txt").is_file());
    }
}
