//! Single-threaded comparison of the two storage strategies.

use std::time::Instant;

use anyhow::{Result, ensure};
use payrange_index::{ContainerFactory, PayrollContainerFactory, RangeContainer, StoreStrategy};

const MIN_VALUE: i64 = 1000;
const MAX_VALUE: i64 = 75000;

pub fn run(records: usize, queries: usize) -> Result<()> {
    ensure!(queries > 0, "at least one query is required");

    let values: Vec<i64> = (0..records)
        .map(|_| fastrand::i64(MIN_VALUE..MAX_VALUE))
        .collect();
    let batch: Vec<(i64, i64)> = (0..queries)
        .map(|_| {
            (
                fastrand::i64(0..MAX_VALUE + 1000),
                fastrand::i64(0..MAX_VALUE + 1000),
            )
        })
        .collect();

    let mut totals = Vec::new();
    for strategy in [StoreStrategy::PackedArray, StoreStrategy::SortedMap] {
        let container = PayrollContainerFactory::new(strategy).create_container(&values)?;

        let started = Instant::now();
        let total: usize = batch
            .iter()
            .map(|&(from, to)| {
                container
                    .find_ids_in_range(from, to, true, true)
                    .len()
            })
            .sum();
        println!(
            "{strategy:?}: {queries} queries, {total} id(s) matched, {:?}",
            started.elapsed()
        );
        totals.push(total);
    }

    ensure!(
        totals.windows(2).all(|w| w[0] == w[1]),
        "storage strategies disagree on match counts"
    );
    println!("strategies agree");
    Ok(())
}
