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

//! Canonical measurement fixtures.
//!
//! - **runs**: complete and partial benchmark runs
//! - **builders**: builder for custom measurement sets
//! - **errors**: malformed result files

pub mod builders;
pub mod errors;
mod runs;

pub use runs::*;

use loopsched_core::Measurement;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Vec<Measurement>)>;

/// Returns all measurement fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("full_run", full_run),
        ("minimal_run", minimal_run),
        ("tied_run", tied_run),
        ("without_reference", without_reference),
    ]
}
