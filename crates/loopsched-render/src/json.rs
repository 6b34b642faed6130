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

//! JSON chart export.

use crate::error::Result;
use crate::renderer::ChartRenderer;
use loopsched_core::ChartData;
use std::fs;
use std::path::Path;

/// Writes chart data as pretty-printed JSON, for plotting elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer;

impl ChartRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, chart: &ChartData, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(chart)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loopsched_core::{AggregateTable, ChartSpec, LoopId, Measurement, Schedule};
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_chart_json() {
        let measurements = vec![
            Measurement::new(Schedule::Auto, None, 2, LoopId::Two, 1.0).unwrap(),
            Measurement::new(Schedule::Static, None, 2, LoopId::Two, 1.5).unwrap(),
        ];
        let table = AggregateTable::from_measurements(&measurements).unwrap();
        let chart = ChartSpec::auto_static(LoopId::Two).build(&table).unwrap();
        let temp = NamedTempFile::new().unwrap();

        JsonRenderer.render(&chart, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["id"]["family"], "auto_static");
        assert_eq!(value["id"]["loop_id"], 2);
        assert_eq!(value["x_scale"], "log2");
        assert_eq!(value["series"][1]["label"], "static");
        assert_eq!(value["series"][1]["points"][0]["y"], 1.5);
        assert!(value["series"][1]["points"][0]["error"].is_null());
    }
}
