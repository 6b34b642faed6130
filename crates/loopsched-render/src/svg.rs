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

//! SVG chart rendering with plotters.

use crate::error::{RenderError, Result};
use crate::renderer::ChartRenderer;
use crate::style::{reference_color, series_color, tick_label, to_axis};
use loopsched_core::{AxisScale, ChartData, SeriesStyle};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

// Font sizes
const TITLE_FONT_SIZE: u32 = 28;
const AXIS_LABEL_FONT_SIZE: u32 = 22;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 16;

const MARKER_SIZE: u32 = 4;
const ERROR_BAR_WIDTH: u32 = 10;
const DASH_LENGTH: u32 = 10;
const DASH_SPACING: u32 = 6;

type DrawResult<T> = std::result::Result<T, DrawingAreaErrorKind<std::io::Error>>;

/// Draws charts as SVG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    /// Image size in pixels.
    pub size: (u32, u32),
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { size: (1000, 650) }
    }
}

impl ChartRenderer for SvgRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, chart: &ChartData, path: &Path) -> Result<()> {
        draw(chart, path, self.size).map_err(|e| RenderError::Draw {
            chart: chart.id.file_stem(),
            message: e.to_string(),
        })
    }
}

// Axis ranges in drawn coordinates, padded so markers are not clipped.
fn ranges(chart: &ChartData) -> ((f64, f64), (f64, f64)) {
    let scale = chart.x_scale;
    let (x_lo, x_hi) = chart
        .x_bounds()
        .map(|(lo, hi)| (to_axis(scale, lo), to_axis(scale, hi)))
        .unwrap_or((0.0, 1.0));
    let x_pad = ((x_hi - x_lo) * 0.05).max(0.25);

    let y_hi = chart
        .y_bounds()
        .map(|(_, hi)| hi)
        .filter(|hi| *hi > 0.0)
        .unwrap_or(1.0);

    ((x_lo - x_pad, x_hi + x_pad), (0.0, y_hi * 1.1))
}

fn draw(chart: &ChartData, path: &Path, size: (u32, u32)) -> DrawResult<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let scale = chart.x_scale;
    let ((x_lo, x_hi), (y_lo, y_hi)) = ranges(chart);

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    let x_labels = match scale {
        AxisScale::Linear => ((x_hi - x_lo).ceil() as usize + 1).max(2),
        AxisScale::Log2 => ((x_hi - x_lo).ceil() as usize * 4).max(8),
    };

    ctx.configure_mesh()
        .x_labels(x_labels)
        .x_label_formatter(&|x| tick_label(scale, *x))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for series in chart.series.iter().filter(|s| !s.is_empty()) {
        let color = series_color(chart, series);
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .map(|p| (to_axis(scale, p.x), p.y))
            .collect();

        match series.style {
            SeriesStyle::Line => {
                ctx.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
            }
            SeriesStyle::Markers => {
                ctx.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled())),
                )?
                .label(series.label.as_str())
                .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_SIZE, color.filled()));
            }
        }

        ctx.draw_series(series.points.iter().filter_map(|p| {
            p.error.map(|e| {
                ErrorBar::new_vertical(
                    to_axis(scale, p.x),
                    p.y - e,
                    p.y,
                    p.y + e,
                    color.filled(),
                    ERROR_BAR_WIDTH,
                )
            })
        }))?;
    }

    for line in &chart.reference_lines {
        let color = reference_color(line.schedule);
        let ends = vec![
            (to_axis(scale, line.x_start), line.value),
            (to_axis(scale, line.x_end), line.value),
        ];
        ctx.draw_series(DashedLineSeries::new(
            ends,
            DASH_LENGTH,
            DASH_SPACING,
            color.stroke_width(2),
        ))?
        .label(line.label.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
