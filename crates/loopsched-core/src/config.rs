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

//! Analysis configuration.

use crate::error::{AnalysisError, Result};
use crate::model::LoopId;

/// Thread count the best configuration is selected at by default.
pub const DEFAULT_BEST_THREADS: u32 = 6;

/// Parameters shared by the report and the chart plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Thread count used for the best-configuration selection and the
    /// per-chunk comparison chart (default: 6).
    pub best_threads: u32,

    /// Loops to analyse, in output order (default: both).
    pub loops: Vec<LoopId>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            best_threads: DEFAULT_BEST_THREADS,
            loops: LoopId::ALL.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Overrides the best-configuration thread count.
    pub fn with_best_threads(mut self, threads: u32) -> Self {
        self.best_threads = threads;
        self
    }

    /// Restricts the analysis to the given loops.
    pub fn with_loops(mut self, loops: impl IntoIterator<Item = LoopId>) -> Self {
        self.loops = loops.into_iter().collect();
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] for a zero thread count or an
    /// empty loop list.
    pub fn validate(&self) -> Result<()> {
        if self.best_threads == 0 {
            return Err(AnalysisError::InvalidConfig {
                parameter: "best_threads".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.loops.is_empty() {
            return Err(AnalysisError::InvalidConfig {
                parameter: "loops".to_string(),
                reason: "at least one loop is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.best_threads, 6);
        assert_eq!(config.loops, vec![LoopId::One, LoopId::Two]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let config = AnalysisConfig::default().with_best_threads(0);
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig { ref parameter, .. }) if parameter == "best_threads"
        ));
    }

    #[test]
    fn test_validate_rejects_no_loops() {
        let config = AnalysisConfig::default().with_loops([]);
        assert!(config.validate().is_err());
    }
}
