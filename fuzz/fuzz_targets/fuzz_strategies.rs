#![no_main]

use libfuzzer_sys::fuzz_target;

use rotbench_core::engine::RotationEngine;
use rotbench_core::partition::WorkerCount;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    // First 8 bytes: shift. Next byte: worker count. Rest: elements.
    let shift = i64::from_le_bytes(data[..8].try_into().unwrap());
    let workers = WorkerCount::new(i64::from(data[8]) % 64 + 1).unwrap();
    let elements: Vec<i32> = data[9..].iter().map(|&b| i32::from(b)).collect();

    let engine = RotationEngine::new();
    let mut sequential = elements.clone();
    let mut parallel = elements.clone();
    engine.rotate_sequential(&mut sequential, shift);
    engine.rotate_parallel(&mut parallel, shift, workers);
    assert_eq!(sequential, parallel);

    if let Some(back) = shift.checked_neg() {
        engine.rotate_sequential(&mut sequential, back);
        assert_eq!(sequential, elements);
    }
});
