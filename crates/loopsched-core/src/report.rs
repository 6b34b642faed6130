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

//! Best-configuration report lines.

use crate::aggregate::AggregateTable;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::model::LoopId;
use crate::select::{best_configuration, BestConfiguration};
use std::fmt;

/// The best configuration of one loop, formatted as a report sentence.
///
/// # Examples
///
/// ```
/// use loopsched_core::{AggregateTable, BestConfigReport, LoopId, Measurement, Schedule};
///
/// let measurements = vec![
///     Measurement::new(Schedule::Dynamic, Some(8), 6, LoopId::One, 4.0).unwrap(),
/// ];
/// let table = AggregateTable::from_measurements(&measurements).unwrap();
/// let line = BestConfigReport::for_loop(&table, 6, LoopId::One).unwrap();
///
/// assert_eq!(
///     line.to_string(),
///     "The best performance for loop 1 on 6 threads is achieved with dynamic schedule \
///      with a chunksize of 8 and an average execution time of 4.0."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestConfigReport {
    /// Thread count the selection was made at.
    pub threads: u32,
    /// The selected configuration.
    pub best: BestConfiguration,
}

impl BestConfigReport {
    /// Selects the best configuration of `loop_id` at `threads`.
    pub fn for_loop(table: &AggregateTable, threads: u32, loop_id: LoopId) -> Result<Self> {
        let best = best_configuration(table, threads, loop_id)?;
        Ok(Self { threads, best })
    }
}

impl fmt::Display for BestConfigReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = &self.best.key;
        write!(
            f,
            "The best performance for loop {} on {} threads is achieved with {} schedule ",
            key.loop_id, self.threads, key.schedule
        )?;
        match key.chunk {
            Some(exponent) => write!(f, "with a chunksize of {}", exponent.chunksize())?,
            None => f.write_str("with no chunksize")?,
        }
        write!(
            f,
            " and an average execution time of {:?}.",
            self.best.stats.mean
        )
    }
}

/// One report line per configured loop, in configuration order.
///
/// # Errors
///
/// Fails on an invalid configuration or when a loop has no measurements at
/// the configured thread count.
pub fn best_config_report(
    table: &AggregateTable,
    config: &AnalysisConfig,
) -> Result<Vec<BestConfigReport>> {
    config.validate()?;
    config
        .loops
        .iter()
        .map(|&loop_id| BestConfigReport::for_loop(table, config.best_threads, loop_id))
        .collect()
}
