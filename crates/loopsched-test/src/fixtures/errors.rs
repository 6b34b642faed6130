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

//! Malformed result files.

/// Invalid CSV inputs, as `(name, csv_text)` pairs. Each must fail to load.
pub fn invalid_csv_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("missing_time_column", "schedule,chunksize,num_threads,loop\nstatic,1,6,1\n"),
        ("too_few_fields", "schedule,chunksize,num_threads,loop,time\nstatic,1,6\n"),
        ("too_many_fields", "schedule,chunksize,num_threads,loop,time\nstatic,1,6,1,0.5,9\n"),
        ("unknown_schedule", "schedule,chunksize,num_threads,loop,time\nruntime,1,6,1,0.5\n"),
        ("bad_loop", "schedule,chunksize,num_threads,loop,time\nstatic,1,6,3,0.5\n"),
        ("non_numeric_time", "schedule,chunksize,num_threads,loop,time\nstatic,1,6,1,fast\n"),
        ("negative_time", "schedule,chunksize,num_threads,loop,time\nstatic,1,6,1,-0.5\n"),
        ("zero_threads", "schedule,chunksize,num_threads,loop,time\nstatic,1,0,1,0.5\n"),
        ("chunk_on_auto", "schedule,chunksize,num_threads,loop,time\nauto,4,6,1,0.5\n"),
        ("chunk_out_of_range", "schedule,chunksize,num_threads,loop,time\ndynamic,1024,6,1,0.5\n"),
        ("fractional_chunk", "schedule,chunksize,num_threads,loop,time\ndynamic,2.5,6,1,0.5\n"),
    ]
}
