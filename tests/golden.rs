//! Golden file integration tests.
//!
//! Reads tests/testdata/rotation_golden.json and verifies both strategies
//! produce the expected rotations for every worker count, and that
//! partitioning matches the documented layouts.

use serde::Deserialize;

use rotbench_core::engine::RotationEngine;
use rotbench_core::partition::{active_partitions, partition, Partition, WorkerCount};
use rotbench_core::sequence::Sequence;
use rotbench_orchestration::driver::verify_strategies;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    rotations: Vec<RotationCase>,
    partitions: Vec<PartitionCase>,
}

#[derive(Deserialize)]
struct RotationCase {
    name: String,
    input: Sequence,
    shift: i64,
    expected: Sequence,
}

#[derive(Deserialize)]
struct PartitionCase {
    len: usize,
    workers: i64,
    expected: Vec<Partition>,
}

fn load_golden() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/rotation_golden.json");
    let raw = std::fs::read_to_string(path).expect("golden file missing");
    serde_json::from_str(&raw).expect("golden file malformed")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_sequential() {
    let engine = RotationEngine::new();
    for case in load_golden().rotations {
        let actual = case.input.rotated_sequential(&engine, case.shift);
        assert_eq!(actual, case.expected, "case {}", case.name);
    }
}

#[test]
fn golden_parallel_all_worker_counts() {
    let engine = RotationEngine::new();
    for case in load_golden().rotations {
        for k in 1..=(case.input.len() as i64 + 2) {
            let workers = WorkerCount::new(k).unwrap();
            let actual = case.input.rotated_parallel(&engine, case.shift, workers);
            assert_eq!(actual, case.expected, "case {} with {k} workers", case.name);
        }
    }
}

#[test]
fn golden_dedicated_pool() {
    let engine = RotationEngine::with_threads(WorkerCount::new(3).unwrap()).unwrap();
    for case in load_golden().rotations {
        let actual = case
            .input
            .rotated_parallel(&engine, case.shift, WorkerCount::new(3).unwrap());
        assert_eq!(actual, case.expected, "case {}", case.name);
        let single = WorkerCount::new(1).unwrap();
        verify_strategies(&engine, &case.input, case.shift, single).unwrap();
    }
}

#[test]
fn golden_partitions() {
    for case in load_golden().partitions {
        let workers = WorkerCount::new(case.workers).unwrap();
        let actual: Vec<Partition> = (0..workers.get())
            .map(|i| partition(case.len, workers, i))
            .collect();
        assert_eq!(
            actual, case.expected,
            "len={} workers={}",
            case.len, case.workers
        );

        let active: Vec<Partition> = active_partitions(case.len, workers)
            .into_iter()
            .map(|(_, p)| p)
            .collect();
        let non_empty: Vec<Partition> = case
            .expected
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        assert_eq!(active, non_empty);
    }
}

#[test]
fn golden_round_trip_restores_input() {
    let engine = RotationEngine::new();
    for case in load_golden().rotations {
        let Some(back) = case.shift.checked_neg() else {
            continue;
        };
        let restored = case.expected.rotated_sequential(&engine, back);
        assert_eq!(restored, case.input, "case {}", case.name);
    }
}
