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

//! Colors and axis formatting shared by the drawing backends.

use loopsched_core::{
    AxisScale, ChartData, ChartFamily, ChunkExponent, Schedule, Series, MAX_CHUNK_EXPONENT,
};
use plotters::style::RGBColor;

const GREEN: RGBColor = RGBColor(0, 128, 0);
const BLUE: RGBColor = RGBColor(0, 0, 255);
const RED: RGBColor = RGBColor(255, 0, 0);
const BLACK: RGBColor = RGBColor(0, 0, 0);
const GREY: RGBColor = RGBColor(128, 128, 128);
const YELLOW: RGBColor = RGBColor(230, 190, 0);

/// Color of a schedule's series.
pub fn schedule_color(schedule: Schedule) -> RGBColor {
    match schedule {
        Schedule::Static => GREEN,
        Schedule::Guided => BLUE,
        Schedule::Dynamic => RED,
        Schedule::Auto | Schedule::Affinity => BLACK,
        Schedule::Single => GREY,
    }
}

/// Color of a chunk-size series: blue for chunk size 1 shading to red for 64.
pub fn chunk_color(chunk: ChunkExponent) -> RGBColor {
    let t = f64::from(chunk.value()) / f64::from(MAX_CHUNK_EXPONENT);
    RGBColor((255.0 * t).round() as u8, 0, (255.0 * (1.0 - t)).round() as u8)
}

/// Color of a series within a chart.
///
/// Thread-scaling charts color by chunk size; everything else by schedule.
pub fn series_color(chart: &ChartData, series: &Series) -> RGBColor {
    match (chart.id.family, series.chunk) {
        (ChartFamily::ThreadScaling, Some(chunk)) => chunk_color(chunk),
        _ => series.schedule.map_or(GREY, schedule_color),
    }
}

/// Color of a constant reference line.
pub fn reference_color(schedule: Option<Schedule>) -> RGBColor {
    match schedule {
        Some(Schedule::Static) => YELLOW,
        _ => BLACK,
    }
}

/// Maps a data x coordinate onto the drawn axis.
pub fn to_axis(scale: AxisScale, x: f64) -> f64 {
    match scale {
        AxisScale::Linear => x,
        AxisScale::Log2 => x.log2(),
    }
}

/// Tick label for a drawn x coordinate.
///
/// Log2 axes label only whole powers of two, with the original value.
pub fn tick_label(scale: AxisScale, axis_x: f64) -> String {
    let nearest = axis_x.round();
    if (axis_x - nearest).abs() > 1e-6 {
        return String::new();
    }
    match scale {
        AxisScale::Linear => format!("{}", nearest),
        AxisScale::Log2 => format!("{}", 2f64.powf(nearest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_color_endpoints() {
        assert_eq!(chunk_color(ChunkExponent::new(0).unwrap()), RGBColor(0, 0, 255));
        assert_eq!(chunk_color(ChunkExponent::new(6).unwrap()), RGBColor(255, 0, 0));
    }

    #[test]
    fn test_reference_colors() {
        assert_eq!(reference_color(Some(Schedule::Static)), YELLOW);
        assert_eq!(reference_color(Some(Schedule::Auto)), BLACK);
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(AxisScale::Log2, 3.0), "8");
        assert_eq!(tick_label(AxisScale::Log2, 0.0), "1");
        assert_eq!(tick_label(AxisScale::Log2, 2.5), "");
        assert_eq!(tick_label(AxisScale::Linear, 4.0), "4");
    }

    #[test]
    fn test_to_axis() {
        assert_eq!(to_axis(AxisScale::Log2, 16.0), 4.0);
        assert_eq!(to_axis(AxisScale::Linear, 16.0), 16.0);
    }
}
