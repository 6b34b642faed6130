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

//! Declarative group filters.

use crate::aggregate::GroupKey;
use crate::model::{LoopId, Schedule};
use crate::transform::ChunkExponent;

/// Constraint on the chunk dimension of a group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkFilter {
    /// Any chunk, including none.
    #[default]
    Any,
    /// Only groups without a chunk size.
    Absent,
    /// Only groups with some chunk size.
    Present,
    /// Only groups with exactly this chunk exponent.
    Exactly(ChunkExponent),
}

impl ChunkFilter {
    /// Filter matching a group's chunk dimension exactly, absent included.
    pub fn same_as(chunk: Option<ChunkExponent>) -> Self {
        match chunk {
            Some(exponent) => ChunkFilter::Exactly(exponent),
            None => ChunkFilter::Absent,
        }
    }

    /// Whether `chunk` satisfies the constraint.
    pub fn matches(&self, chunk: Option<ChunkExponent>) -> bool {
        match self {
            ChunkFilter::Any => true,
            ChunkFilter::Absent => chunk.is_none(),
            ChunkFilter::Present => chunk.is_some(),
            ChunkFilter::Exactly(expected) => chunk == Some(*expected),
        }
    }
}

/// Predicate over group keys. Unset dimensions match everything.
///
/// # Examples
///
/// ```
/// use loopsched_core::{ChunkFilter, GroupFilter, GroupKey, LoopId, Schedule};
///
/// let filter = GroupFilter::new()
///     .schedule(Schedule::Static)
///     .chunk(ChunkFilter::Absent)
///     .loop_id(LoopId::One);
///
/// assert!(filter.matches(&GroupKey::new(Schedule::Static, None, 4, LoopId::One)));
/// assert!(!filter.matches(&GroupKey::new(Schedule::Static, None, 4, LoopId::Two)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupFilter {
    /// Required schedule.
    pub schedule: Option<Schedule>,
    /// Chunk constraint.
    pub chunk: ChunkFilter,
    /// Required thread count.
    pub num_threads: Option<u32>,
    /// Required loop.
    pub loop_id: Option<LoopId>,
}

impl GroupFilter {
    /// A filter matching every group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one schedule.
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Restricts the chunk dimension.
    pub fn chunk(mut self, chunk: ChunkFilter) -> Self {
        self.chunk = chunk;
        self
    }

    /// Restricts to one thread count.
    pub fn threads(mut self, num_threads: u32) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Restricts to one loop.
    pub fn loop_id(mut self, loop_id: LoopId) -> Self {
        self.loop_id = Some(loop_id);
        self
    }

    /// Whether `key` satisfies every set constraint.
    pub fn matches(&self, key: &GroupKey) -> bool {
        self.schedule.map_or(true, |s| s == key.schedule)
            && self.chunk.matches(key.chunk)
            && self.num_threads.map_or(true, |t| t == key.num_threads)
            && self.loop_id.map_or(true, |l| l == key.loop_id)
    }
}
