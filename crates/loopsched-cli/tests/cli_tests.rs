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

//! End-to-end tests of the loopsched binary.

use assert_cmd::Command;
use loopsched_test::fixtures::errors::invalid_csv_samples;
use loopsched_test::results_csv_path;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn loopsched_cmd() -> Command {
    Command::cargo_bin("loopsched").expect("Failed to find loopsched binary")
}

fn results() -> String {
    results_csv_path().to_string_lossy().into_owned()
}

fn write_csv(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_report_default_threads() {
    loopsched_cmd()
        .arg("report")
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The best performance for loop 1 on 6 threads is achieved with dynamic schedule \
             with a chunksize of 8 and an average execution time of",
        ))
        .stdout(predicate::str::contains(
            "loop 2 on 6 threads is achieved with guided schedule with a chunksize of 4",
        ));
}

#[test]
fn test_report_single_loop_markdown() {
    loopsched_cmd()
        .args(["report", "--loop", "2", "--format", "markdown"])
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Best configurations"))
        .stdout(predicate::str::contains("loop 2").and(predicate::str::contains("loop 1").not()));
}

#[test]
fn test_report_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.txt");

    loopsched_cmd()
        .args(["report", "--threads", "4", "-o"])
        .arg(&output)
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = fs::read_to_string(output).unwrap();
    assert_eq!(report.lines().count(), 2);
    assert!(report.contains("on 4 threads"));
}

#[test]
fn test_report_unknown_thread_count() {
    loopsched_cmd()
        .args(["report", "--threads", "3"])
        .arg(results())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: No measurements for loop 1 on 3 threads",
        ));
}

#[test]
fn test_charts_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("graphs");

    loopsched_cmd()
        .args(["charts", "--renderer", "json", "--out-dir"])
        .arg(&out)
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 14 charts"));

    assert_eq!(fs::read_dir(&out).unwrap().count(), 14);
    let best = fs::read_to_string(out.join("best_speedup_loop_1.json")).unwrap();
    assert!(best.contains("Performance of dynamic using a chunksize of 8 for loop 1"));
}

#[test]
fn test_charts_svg_single_loop() {
    let dir = TempDir::new().unwrap();

    loopsched_cmd()
        .args(["charts", "--loop", "1", "-d"])
        .arg(dir.path())
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 7 charts"));

    assert!(dir.path().join("six_threads_loop_1.svg").exists());
    assert!(!dir.path().join("six_threads_loop_2.svg").exists());
}

#[test]
fn test_charts_without_reference_fails() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "no_single.csv",
        "schedule,chunksize,num_threads,loop,time\n\
         dynamic,4,6,1,1.0\n\
         auto,nan,6,1,1.2\n\
         static,nan,6,1,1.3\n",
    );
    let out = dir.path().join("graphs");

    loopsched_cmd()
        .args(["charts", "--loop", "1", "-d"])
        .arg(&out)
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing reference data for loop 1"));

    assert!(!out.exists());
}

#[test]
fn test_summary_csv() {
    loopsched_cmd()
        .arg("summary")
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "schedule,chunksize,num_threads,loop,count,mean,std\n",
        ))
        .stdout(predicate::str::contains("\nsingle,,1,1,2,"));
}

#[test]
fn test_summary_json_and_markdown() {
    loopsched_cmd()
        .args(["summary", "--format", "json"])
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"loop\": 2"));

    loopsched_cmd()
        .args(["summary", "--format", "markdown"])
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::contains("|"));
}

#[test]
fn test_run_writes_everything() {
    let dir = TempDir::new().unwrap();

    loopsched_cmd()
        .args(["run", "--renderer", "json", "-d"])
        .arg(dir.path())
        .arg(results())
        .assert()
        .success()
        .stdout(predicate::str::contains("The best performance for loop 1"))
        .stdout(predicate::str::contains("Wrote 14 charts"));

    assert!(dir.path().join("report.md").exists());
    assert!(dir.path().join("summary.csv").exists());
    assert_eq!(fs::read_dir(dir.path().join("charts")).unwrap().count(), 14);
}

#[test]
fn test_missing_input_file() {
    loopsched_cmd()
        .args(["report", "/nonexistent/results.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error for '/nonexistent/results.csv'"));
}

#[test]
fn test_input_size_limit() {
    loopsched_cmd()
        .env("LOOPSCHED_MAX_FILE_SIZE", "16")
        .arg("report")
        .arg(results())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too large"))
        .stderr(predicate::str::contains("LOOPSCHED_MAX_FILE_SIZE"));
}

#[test]
fn test_invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    for (name, content) in invalid_csv_samples() {
        let csv = write_csv(&dir, &format!("{}.csv", name), content);
        loopsched_cmd()
            .args(["summary", &csv])
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("Error: "));
    }
}

#[test]
fn test_semicolon_delimiter() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "results.csv",
        "schedule;chunksize;num_threads;loop;time\nguided;2;6;1;0.5\n",
    );

    loopsched_cmd()
        .args(["summary", "--delimiter", ";"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("guided,2,6,1,1,0.5"));
}

#[test]
fn test_unknown_loop_argument() {
    loopsched_cmd()
        .args(["report", "--loop", "3"])
        .arg(results())
        .assert()
        .failure()
        .stderr(predicate::str::contains("loop must be 1 or 2"));
}
