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

//! The fixed set of charts produced for a benchmark run.

use crate::aggregate::AggregateTable;
use crate::chart::{ChartData, ChartSpec};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::model::Schedule;
use crate::select::{best_configuration, reference_time};
use tracing::debug;

/// Schedules that get a thread-scaling chart, in output order.
pub const SCALING_SCHEDULES: [Schedule; 3] =
    [Schedule::Static, Schedule::Dynamic, Schedule::Guided];

/// Lists every chart for the configured loops.
///
/// Per loop, in order: the per-chunk comparison at the configured thread
/// count, one thread-scaling chart per entry of [`SCALING_SCHEDULES`], auto
/// against static, the best configuration's speedup, and affinity against
/// the best configuration.
///
/// # Errors
///
/// Fails if the configuration is invalid, a loop has no measurements at the
/// configured thread count, or a loop lacks its `single` reference.
pub fn chart_plan(table: &AggregateTable, config: &AnalysisConfig) -> Result<Vec<ChartSpec>> {
    config.validate()?;

    let mut specs = Vec::with_capacity(config.loops.len() * (4 + SCALING_SCHEDULES.len()));
    for &loop_id in &config.loops {
        let best = best_configuration(table, config.best_threads, loop_id)?;
        let reference = reference_time(table, loop_id)?;

        specs.push(ChartSpec::six_threads(loop_id, config.best_threads));
        for schedule in SCALING_SCHEDULES {
            specs.push(ChartSpec::thread_scaling(loop_id, schedule)?);
        }
        specs.push(ChartSpec::auto_static(loop_id));
        specs.push(ChartSpec::best_speedup(&best, reference));
        specs.push(ChartSpec::affinity_vs_best(&best));
    }

    debug!(charts = specs.len(), "planned charts");
    Ok(specs)
}

/// Plans and builds every chart, stopping at the first failure.
pub fn build_charts(table: &AggregateTable, config: &AnalysisConfig) -> Result<Vec<ChartData>> {
    chart_plan(table, config)?
        .iter()
        .map(|spec| spec.build(table))
        .collect()
}
