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

//! Chart data builder.
//!
//! Every chart is described by a [`ChartSpec`]: a list of series, each a
//! [`GroupFilter`] plus the axis projection to apply, and a list of constant
//! reference lines. [`ChartSpec::build`] evaluates the spec against an
//! [`AggregateTable`] and yields the [`ChartData`] handed to a renderer.
//!
//! The five chart families are plain constructors of specs:
//!
//! | family | constructor |
//! |--------|-------------|
//! | runtimes per chunk size on the best-thread count | [`ChartSpec::six_threads`] |
//! | thread scaling of one schedule, one series per chunk size | [`ChartSpec::thread_scaling`] |
//! | `auto` against chunkless `static` | [`ChartSpec::auto_static`] |
//! | speedup of the best configuration | [`ChartSpec::best_speedup`] |
//! | `affinity` against the best configuration | [`ChartSpec::affinity_vs_best`] |
//!
//! An empty series is not an error; a missing reference line is.

use crate::aggregate::{AggregateTable, GroupKey, GroupStats};
use crate::error::{AnalysisError, Result};
use crate::filter::{ChunkFilter, GroupFilter};
use crate::model::{LoopId, Schedule};
use crate::select::{BestConfiguration, Reference};
use crate::transform::{ChunkExponent, MAX_CHUNK_EXPONENT};
use std::fmt;
use tracing::debug;

/// Schedules compared chunk size by chunk size.
pub const CHUNKED_SCHEDULES: [Schedule; 3] =
    [Schedule::Static, Schedule::Guided, Schedule::Dynamic];

/// The kinds of chart produced for each loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChartFamily {
    /// Runtime against chunk size at a fixed thread count.
    SixThreads,
    /// Runtime against thread count for one schedule.
    ThreadScaling,
    /// `auto` against chunkless `static`.
    AutoStatic,
    /// Speedup of the best configuration.
    BestSpeedup,
    /// `affinity` against the best configuration.
    AffinityVsBest,
}

impl ChartFamily {
    /// File name component for this family.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartFamily::SixThreads => "six_threads",
            ChartFamily::ThreadScaling => "thread_scaling",
            ChartFamily::AutoStatic => "auto_static",
            ChartFamily::BestSpeedup => "best_speedup",
            ChartFamily::AffinityVsBest => "affinity",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ChartFamily::SixThreads => "six threads",
            ChartFamily::ThreadScaling => "thread scaling",
            ChartFamily::AutoStatic => "auto vs static",
            ChartFamily::BestSpeedup => "best speedup",
            ChartFamily::AffinityVsBest => "affinity vs best",
        }
    }
}

impl fmt::Display for ChartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of one chart artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartId {
    /// Chart family.
    pub family: ChartFamily,
    /// Loop the chart describes.
    pub loop_id: LoopId,
    /// Schedule, for families drawn once per schedule.
    pub schedule: Option<Schedule>,
}

impl ChartId {
    /// Artifact name without extension: `<family>[_<schedule>]_loop_<L>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopsched_core::{ChartFamily, ChartId, LoopId, Schedule};
    ///
    /// let id = ChartId {
    ///     family: ChartFamily::ThreadScaling,
    ///     loop_id: LoopId::Two,
    ///     schedule: Some(Schedule::Guided),
    /// };
    /// assert_eq!(id.file_stem(), "thread_scaling_guided_loop_2");
    /// ```
    pub fn file_stem(&self) -> String {
        match self.schedule {
            Some(schedule) => format!("{}_{}_loop_{}", self.family.slug(), schedule, self.loop_id),
            None => format!("{}_loop_{}", self.family.slug(), self.loop_id),
        }
    }
}

/// Quantity plotted on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum XAxis {
    /// Rounded log2 of the chunk size.
    ChunkExponent,
    /// Thread count.
    Threads,
}

impl XAxis {
    fn value(&self, key: &GroupKey) -> Option<f64> {
        match self {
            XAxis::ChunkExponent => key.chunk.map(|exponent| f64::from(exponent.value())),
            XAxis::Threads => Some(f64::from(key.num_threads)),
        }
    }
}

/// Scale a renderer should use for the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxisScale {
    /// Linear axis.
    Linear,
    /// Base-2 logarithmic axis.
    Log2,
}

/// Quantity plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YValue {
    /// Mean time of the group.
    Mean,
    /// Reference mean divided by the group mean.
    Speedup(Reference),
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeriesStyle {
    /// Individual markers.
    Markers,
    /// Connected line.
    Line,
}

/// Declarative description of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    /// Legend label.
    pub label: String,
    /// Groups that contribute points.
    pub filter: GroupFilter,
    /// X projection.
    pub x: XAxis,
    /// Y projection.
    pub y: YValue,
    /// Attach standard deviations as error bars.
    pub error_bars: bool,
    /// Drawing style.
    pub style: SeriesStyle,
}

impl SeriesSpec {
    /// Markers of mean time against `x`, without error bars.
    pub fn means(label: impl Into<String>, filter: GroupFilter, x: XAxis) -> Self {
        Self {
            label: label.into(),
            filter,
            x,
            y: YValue::Mean,
            error_bars: false,
            style: SeriesStyle::Markers,
        }
    }

    /// Attaches standard-deviation error bars.
    pub fn with_error_bars(mut self) -> Self {
        self.error_bars = true;
        self
    }

    /// Draws the series as a connected line.
    pub fn as_line(mut self) -> Self {
        self.style = SeriesStyle::Line;
        self
    }

    /// Plots speedup against `reference` instead of mean time.
    pub fn speedup(mut self, reference: Reference) -> Self {
        self.y = YValue::Speedup(reference);
        self
    }

    fn point(&self, key: &GroupKey, stats: &GroupStats) -> Result<Option<Point>> {
        let Some(x) = self.x.value(key) else {
            return Ok(None);
        };
        let y = match &self.y {
            YValue::Mean => stats.mean,
            YValue::Speedup(reference) => reference.speedup_of(key, stats)?,
        };
        let error = if self.error_bars { stats.std_dev } else { None };
        Ok(Some(Point { x, y, error }))
    }

    fn build(&self, table: &AggregateTable) -> Result<Series> {
        let mut points = Vec::new();
        for (key, stats) in table.matching(&self.filter) {
            if let Some(point) = self.point(key, stats)? {
                points.push(point);
            }
        }
        points.sort_by(|a, b| a.x.total_cmp(&b.x));

        let chunk = match self.filter.chunk {
            ChunkFilter::Exactly(exponent) => Some(exponent),
            _ => None,
        };

        Ok(Series {
            label: self.label.clone(),
            style: self.style,
            schedule: self.filter.schedule,
            chunk,
            points,
        })
    }
}

/// A horizontal line at the mean of exactly one group.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLineSpec {
    /// Legend label.
    pub label: String,
    /// Must match exactly one group.
    pub filter: GroupFilter,
    /// Horizontal extent of the line.
    pub x_span: (f64, f64),
}

impl ReferenceLineSpec {
    fn build(&self, table: &AggregateTable, loop_id: LoopId) -> Result<ReferenceLine> {
        let matches: Vec<(&GroupKey, &GroupStats)> = table.matching(&self.filter).collect();
        let what = format!("{} baseline", self.label);
        match matches.as_slice() {
            [] => Err(AnalysisError::missing_reference(what, loop_id)),
            [(_, stats)] => Ok(ReferenceLine {
                label: self.label.clone(),
                schedule: self.filter.schedule,
                value: stats.mean,
                x_start: self.x_span.0,
                x_end: self.x_span.1,
            }),
            several => Err(AnalysisError::AmbiguousReference {
                what,
                loop_id,
                count: several.len(),
            }),
        }
    }
}

/// Declarative description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Artifact identity.
    pub id: ChartId,
    /// Chart title.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// X axis scale.
    pub x_scale: AxisScale,
    /// Data series.
    pub series: Vec<SeriesSpec>,
    /// Constant reference lines.
    pub reference_lines: Vec<ReferenceLineSpec>,
}

impl ChartSpec {
    /// Runtime against chunk size at `threads` for `static`, `guided` and
    /// `dynamic`, with `auto` and chunkless `static` as reference lines.
    pub fn six_threads(loop_id: LoopId, threads: u32) -> Self {
        let at_threads = GroupFilter::new().threads(threads).loop_id(loop_id);

        let series = CHUNKED_SCHEDULES
            .iter()
            .map(|&schedule| {
                SeriesSpec::means(
                    schedule.as_str(),
                    at_threads.schedule(schedule).chunk(ChunkFilter::Present),
                    XAxis::ChunkExponent,
                )
                .with_error_bars()
            })
            .collect();

        let span = (0.0, f64::from(MAX_CHUNK_EXPONENT));
        let reference_lines = vec![
            ReferenceLineSpec {
                label: Schedule::Auto.as_str().to_string(),
                filter: at_threads.schedule(Schedule::Auto),
                x_span: span,
            },
            ReferenceLineSpec {
                label: Schedule::Static.as_str().to_string(),
                filter: at_threads
                    .schedule(Schedule::Static)
                    .chunk(ChunkFilter::Absent),
                x_span: span,
            },
        ];

        Self {
            id: ChartId {
                family: ChartFamily::SixThreads,
                loop_id,
                schedule: None,
            },
            title: format!(
                "Runtimes of different schedules running on {} threads for loop {}",
                threads, loop_id
            ),
            x_label: "log2(chunksize)".to_string(),
            y_label: "time/s".to_string(),
            x_scale: AxisScale::Linear,
            series,
            reference_lines,
        }
    }

    /// Runtime against thread count for one chunked schedule, one series per
    /// chunk size, overlaid with the `affinity` schedule.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnsupportedSchedule`] unless `schedule` is one
    /// of [`CHUNKED_SCHEDULES`].
    pub fn thread_scaling(loop_id: LoopId, schedule: Schedule) -> Result<Self> {
        if !CHUNKED_SCHEDULES.contains(&schedule) {
            return Err(AnalysisError::UnsupportedSchedule {
                schedule,
                family: ChartFamily::ThreadScaling.name(),
            });
        }

        let in_loop = GroupFilter::new().loop_id(loop_id);
        let mut series: Vec<SeriesSpec> = ChunkExponent::all()
            .map(|exponent| {
                SeriesSpec::means(
                    format!("chunksize {}", exponent.chunksize()),
                    in_loop
                        .schedule(schedule)
                        .chunk(ChunkFilter::Exactly(exponent)),
                    XAxis::Threads,
                )
                .with_error_bars()
            })
            .collect();
        series.push(
            SeriesSpec::means(
                Schedule::Affinity.as_str(),
                in_loop.schedule(Schedule::Affinity),
                XAxis::Threads,
            )
            .as_line(),
        );

        Ok(Self {
            id: ChartId {
                family: ChartFamily::ThreadScaling,
                loop_id,
                schedule: Some(schedule),
            },
            title: format!("Runtimes for {} schedule running loop {}", schedule, loop_id),
            x_label: "Number of threads".to_string(),
            y_label: "time/s".to_string(),
            x_scale: AxisScale::Log2,
            series,
            reference_lines: Vec::new(),
        })
    }

    /// `auto` against chunkless `static`, across thread counts.
    pub fn auto_static(loop_id: LoopId) -> Self {
        let in_loop = GroupFilter::new().loop_id(loop_id);

        Self {
            id: ChartId {
                family: ChartFamily::AutoStatic,
                loop_id,
                schedule: None,
            },
            title: format!(
                "Runtimes for auto and static schedules running loop {}",
                loop_id
            ),
            x_label: "Number of threads".to_string(),
            y_label: "time/s".to_string(),
            x_scale: AxisScale::Log2,
            series: vec![
                SeriesSpec::means(
                    Schedule::Auto.as_str(),
                    in_loop.schedule(Schedule::Auto),
                    XAxis::Threads,
                ),
                SeriesSpec::means(
                    Schedule::Static.as_str(),
                    in_loop.schedule(Schedule::Static).chunk(ChunkFilter::Absent),
                    XAxis::Threads,
                ),
            ],
            reference_lines: Vec::new(),
        }
    }

    /// Speedup of the best configuration's schedule and chunk size across
    /// thread counts, relative to the loop's serial reference.
    pub fn best_speedup(best: &BestConfiguration, reference: Reference) -> Self {
        let loop_id = best.key.loop_id;
        let chunk = match best.key.chunk {
            Some(exponent) => format!("a chunksize of {}", exponent.chunksize()),
            None => "no chunksize".to_string(),
        };

        Self {
            id: ChartId {
                family: ChartFamily::BestSpeedup,
                loop_id,
                schedule: None,
            },
            title: format!(
                "Performance of {} using {} for loop {}",
                best.key.schedule, chunk, loop_id
            ),
            x_label: "Number of threads".to_string(),
            y_label: "Speedup T1/Tp".to_string(),
            x_scale: AxisScale::Log2,
            series: vec![
                SeriesSpec::means(best.label(), best.across_threads(), XAxis::Threads)
                    .speedup(reference),
            ],
            reference_lines: Vec::new(),
        }
    }

    /// `affinity` against the best configuration across thread counts, both
    /// with error bars.
    pub fn affinity_vs_best(best: &BestConfiguration) -> Self {
        let loop_id = best.key.loop_id;

        Self {
            id: ChartId {
                family: ChartFamily::AffinityVsBest,
                loop_id,
                schedule: None,
            },
            title: format!(
                "Performance of the affinity scheduling algorithm for loop {}",
                loop_id
            ),
            x_label: "Number of threads".to_string(),
            y_label: "time/s".to_string(),
            x_scale: AxisScale::Log2,
            series: vec![
                SeriesSpec::means(
                    Schedule::Affinity.as_str(),
                    GroupFilter::new()
                        .schedule(Schedule::Affinity)
                        .loop_id(loop_id),
                    XAxis::Threads,
                )
                .with_error_bars(),
                SeriesSpec::means(best.label(), best.across_threads(), XAxis::Threads)
                    .with_error_bars(),
            ],
            reference_lines: Vec::new(),
        }
    }

    /// Evaluates this chart description against `table`.
    ///
    /// # Errors
    ///
    /// Fails if a reference line does not resolve to exactly one group or a
    /// speedup hits a zero mean time. Empty series are returned as-is.
    pub fn build(&self, table: &AggregateTable) -> Result<ChartData> {
        let series = self
            .series
            .iter()
            .map(|spec| spec.build(table))
            .collect::<Result<Vec<_>>>()?;
        let reference_lines = self
            .reference_lines
            .iter()
            .map(|spec| spec.build(table, self.id.loop_id))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            chart = %self.id.file_stem(),
            series = series.len(),
            points = series.iter().map(|s| s.points.len()).sum::<usize>(),
            "built chart data"
        );

        Ok(ChartData {
            id: self.id,
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            x_scale: self.x_scale,
            series,
            reference_lines,
        })
    }
}

/// One plotted point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Standard deviation, if error bars were requested and defined.
    pub error: Option<f64>,
}

/// Evaluated series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Drawing style.
    pub style: SeriesStyle,
    /// Schedule the series is restricted to, if any.
    pub schedule: Option<Schedule>,
    /// Chunk exponent the series is restricted to, if any.
    pub chunk: Option<ChunkExponent>,
    /// Points sorted by x.
    pub points: Vec<Point>,
}

impl Series {
    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Evaluated constant line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceLine {
    /// Legend label.
    pub label: String,
    /// Schedule of the group the value came from.
    pub schedule: Option<Schedule>,
    /// Mean time of that group.
    pub value: f64,
    /// Left end.
    pub x_start: f64,
    /// Right end.
    pub x_end: f64,
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartData {
    /// Artifact identity.
    pub id: ChartId,
    /// Chart title.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// X axis scale.
    pub x_scale: AxisScale,
    /// Data series.
    pub series: Vec<Series>,
    /// Constant reference lines.
    pub reference_lines: Vec<ReferenceLine>,
}

impl ChartData {
    /// Smallest and largest x over all points and reference lines.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let xs = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .chain(
                self.reference_lines
                    .iter()
                    .flat_map(|line| [line.x_start, line.x_end]),
            );
        bounds(xs)
    }

    /// Smallest and largest y over all points (error bars included) and
    /// reference lines.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        let ys = self
            .series
            .iter()
            .flat_map(|s| {
                s.points.iter().flat_map(|p| {
                    let e = p.error.unwrap_or(0.0);
                    [p.y - e, p.y + e]
                })
            })
            .chain(self.reference_lines.iter().map(|line| line.value));
        bounds(ys)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Measurement;
    use crate::select::{best_configuration, reference_time};

    fn table(rows: &[(Schedule, Option<u32>, u32, LoopId, f64)]) -> AggregateTable {
        let measurements: Vec<Measurement> = rows
            .iter()
            .map(|&(s, c, t, l, time)| Measurement::new(s, c, t, l, time).unwrap())
            .collect();
        AggregateTable::from_measurements(&measurements).unwrap()
    }

    fn six_thread_rows() -> Vec<(Schedule, Option<u32>, u32, LoopId, f64)> {
        vec![
            (Schedule::Static, Some(1), 6, LoopId::One, 3.0),
            (Schedule::Static, Some(1), 6, LoopId::One, 5.0),
            (Schedule::Static, Some(4), 6, LoopId::One, 2.0),
            (Schedule::Dynamic, Some(2), 6, LoopId::One, 1.0),
            (Schedule::Static, None, 6, LoopId::One, 2.5),
            (Schedule::Auto, None, 6, LoopId::One, 1.5),
            // Other thread count, must not leak in.
            (Schedule::Static, Some(1), 4, LoopId::One, 9.0),
        ]
    }

    #[test]
    fn test_six_threads_series_and_baselines() {
        let table = table(&six_thread_rows());
        let chart = ChartSpec::six_threads(LoopId::One, 6).build(&table).unwrap();

        assert_eq!(chart.id.file_stem(), "six_threads_loop_1");
        assert_eq!(chart.series.len(), 3);

        let stat = &chart.series[0];
        assert_eq!(stat.label, "static");
        assert_eq!(stat.points.len(), 2);
        assert_eq!(stat.points[0].x, 0.0);
        assert_eq!(stat.points[0].y, 4.0);
        assert!(stat.points[0].error.is_some());
        assert_eq!(stat.points[1].x, 2.0);
        // Single trial: no error bar.
        assert_eq!(stat.points[1].error, None);

        // Guided has no rows: empty, not an error.
        assert_eq!(chart.series[1].label, "guided");
        assert!(chart.series[1].is_empty());

        assert_eq!(chart.reference_lines.len(), 2);
        assert_eq!(chart.reference_lines[0].label, "auto");
        assert_eq!(chart.reference_lines[0].value, 1.5);
        assert_eq!(chart.reference_lines[1].value, 2.5);
        assert_eq!(chart.reference_lines[1].x_end, 6.0);
    }

    #[test]
    fn test_six_threads_missing_auto_is_fatal() {
        let rows: Vec<_> = six_thread_rows()
            .into_iter()
            .filter(|row| row.0 != Schedule::Auto)
            .collect();
        let table = table(&rows);

        let err = ChartSpec::six_threads(LoopId::One, 6)
            .build(&table)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MissingReference { .. }));
        assert!(err.to_string().contains("auto"));
    }

    #[test]
    fn test_thread_scaling_one_series_per_chunk_plus_affinity() {
        let table = table(&[
            (Schedule::Guided, Some(2), 1, LoopId::Two, 8.0),
            (Schedule::Guided, Some(2), 4, LoopId::Two, 2.0),
            (Schedule::Guided, Some(64), 2, LoopId::Two, 5.0),
            (Schedule::Affinity, None, 4, LoopId::Two, 1.8),
            (Schedule::Affinity, None, 1, LoopId::Two, 7.0),
        ]);

        let chart = ChartSpec::thread_scaling(LoopId::Two, Schedule::Guided)
            .unwrap()
            .build(&table)
            .unwrap();

        assert_eq!(chart.id.file_stem(), "thread_scaling_guided_loop_2");
        assert_eq!(chart.x_scale, AxisScale::Log2);
        assert_eq!(chart.series.len(), 8);
        assert_eq!(chart.series[1].label, "chunksize 2");
        assert_eq!(chart.series[1].points.len(), 2);
        assert_eq!(chart.series[1].points[0].x, 1.0);
        assert_eq!(chart.series[6].points.len(), 1);
        assert!(chart.series[0].is_empty());

        let affinity = chart.series.last().unwrap();
        assert_eq!(affinity.style, SeriesStyle::Line);
        let xs: Vec<f64> = affinity.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 4.0]);
    }

    #[test]
    fn test_thread_scaling_rejects_unchunked_schedules() {
        assert!(matches!(
            ChartSpec::thread_scaling(LoopId::One, Schedule::Auto),
            Err(AnalysisError::UnsupportedSchedule { .. })
        ));
    }

    #[test]
    fn test_auto_static_excludes_chunked_static() {
        let table = table(&[
            (Schedule::Auto, None, 2, LoopId::One, 1.0),
            (Schedule::Static, None, 2, LoopId::One, 1.1),
            (Schedule::Static, Some(8), 2, LoopId::One, 0.9),
        ]);

        let chart = ChartSpec::auto_static(LoopId::One).build(&table).unwrap();
        assert_eq!(chart.series[0].points.len(), 1);
        assert_eq!(chart.series[1].points.len(), 1);
        assert_eq!(chart.series[1].points[0].y, 1.1);
    }

    #[test]
    fn test_best_speedup_series() {
        let table = table(&[
            (Schedule::Single, None, 1, LoopId::One, 10.0),
            (Schedule::Dynamic, Some(8), 6, LoopId::One, 2.0),
            (Schedule::Dynamic, Some(8), 4, LoopId::One, 2.5),
            (Schedule::Dynamic, Some(8), 1, LoopId::One, 10.0),
            (Schedule::Static, Some(8), 6, LoopId::One, 3.0),
        ]);

        let best = best_configuration(&table, 6, LoopId::One).unwrap();
        let reference = reference_time(&table, LoopId::One).unwrap();
        let chart = ChartSpec::best_speedup(&best, reference)
            .build(&table)
            .unwrap();

        assert_eq!(chart.id.file_stem(), "best_speedup_loop_1");
        assert_eq!(chart.title, "Performance of dynamic using a chunksize of 8 for loop 1");
        let ys: Vec<f64> = chart.series[0].points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1.0, 4.0, 5.0]);
    }

    #[test]
    fn test_best_speedup_zero_time_is_flagged() {
        let table = table(&[
            (Schedule::Single, None, 1, LoopId::One, 10.0),
            (Schedule::Dynamic, Some(8), 6, LoopId::One, 0.0),
        ]);

        let best = best_configuration(&table, 6, LoopId::One).unwrap();
        let reference = reference_time(&table, LoopId::One).unwrap();
        let err = ChartSpec::best_speedup(&best, reference)
            .build(&table)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::ZeroTime { .. }));
    }

    #[test]
    fn test_affinity_vs_best() {
        let table = table(&[
            (Schedule::Affinity, None, 6, LoopId::One, 1.0),
            (Schedule::Affinity, None, 6, LoopId::One, 1.2),
            (Schedule::Guided, Some(1), 6, LoopId::One, 0.8),
        ]);

        let best = best_configuration(&table, 6, LoopId::One).unwrap();
        let chart = ChartSpec::affinity_vs_best(&best).build(&table).unwrap();

        assert_eq!(chart.id.file_stem(), "affinity_loop_1");
        assert_eq!(chart.series[0].label, "affinity");
        assert!(chart.series[0].points[0].error.is_some());
        assert_eq!(chart.series[1].label, "guided, 1");
        assert_eq!(chart.series[1].points[0].y, 0.8);
    }

    #[test]
    fn test_bounds() {
        let table = table(&six_thread_rows());
        let chart = ChartSpec::six_threads(LoopId::One, 6).build(&table).unwrap();

        let (x_min, x_max) = chart.x_bounds().unwrap();
        assert_eq!(x_min, 0.0);
        assert_eq!(x_max, 6.0);

        let (y_min, y_max) = chart.y_bounds().unwrap();
        assert!(y_min <= 1.0);
        assert!(y_max >= 4.0);
    }
}
