//! Multi-threaded demo driver: one shared container, many query workers.

use std::thread;
use std::time::Instant;

use anyhow::{Result, ensure};
use payrange_index::{ContainerFactory, PayrollContainerFactory, RangeContainer};

pub fn run(
    records: usize,
    min_value: i64,
    max_value: i64,
    workers: usize,
    iterations: usize,
) -> Result<()> {
    ensure!(workers > 0, "at least one worker is required");
    ensure!(
        0 < min_value && min_value < max_value / 2 && min_value * 2 < max_value,
        "value range too narrow: need 0 < min-value and min-value * 2 < max-value"
    );

    let values = random_values(records, min_value, max_value);
    let container = PayrollContainerFactory::default().create_container(&values)?;
    println!(
        "container ready: {} record(s), values in {min_value}..{max_value}",
        container.record_count()
    );

    let started = Instant::now();
    thread::scope(|scope| {
        for worker in 0..workers {
            let container = container.as_ref();
            thread::Builder::new()
                .name(format!("payrange-worker-{worker}"))
                .spawn_scoped(scope, move || {
                    worker_loop(worker, container, min_value, max_value, iterations);
                })
                .expect("spawn worker");
        }
    });
    println!(
        "{workers} worker(s) x {iterations} queries done in {:?}",
        started.elapsed()
    );
    Ok(())
}

fn worker_loop(
    worker: usize,
    container: &dyn RangeContainer,
    min_value: i64,
    max_value: i64,
    iterations: usize,
) {
    println!("starting worker {worker} ...");
    let started = Instant::now();
    let mut total_ids = 0usize;
    for _ in 0..iterations {
        let from = fastrand::i64(min_value..max_value / 2);
        let to = fastrand::i64(min_value * 2..max_value);
        let ids = container.find_ids_in_range(from, to, true, true);
        total_ids += ids.count();
    }
    println!(
        "worker {worker}: {iterations} queries, {total_ids} id(s) drained, {:?}",
        started.elapsed()
    );
}

fn random_values(records: usize, min_value: i64, max_value: i64) -> Vec<i64> {
    (0..records)
        .map(|_| fastrand::i64(min_value..max_value))
        .collect()
}
