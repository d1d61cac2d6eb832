//! Wall-clock comparison of `UnorderedSet` against the standard-library sets
//! on a small-cardinality churn workload: add every value, try to add every
//! value again, then remove every value.

use std::{
    collections::{BTreeSet, HashSet},
    hint::black_box,
    time::Instant,
};

use crate::unorderedset::UnorderedSet;

const WORKLOAD: [&str; 5] = ["a", "b", "c", "d", "e"];

pub fn run(cycles: usize) {
    println!("{cycles} cycles over {} values", WORKLOAD.len());

    let mut set = UnorderedSet::with_capacity(WORKLOAD.len());
    let start = Instant::now();
    for _ in 0..cycles {
        for value in WORKLOAD {
            set.add(value);
        }
        for value in WORKLOAD {
            set.add(value);
        }
        for value in &WORKLOAD {
            set.remove(value);
        }
    }
    black_box(&set);
    report("UnorderedSet", start);

    let mut set = HashSet::new();
    let start = Instant::now();
    for _ in 0..cycles {
        for value in WORKLOAD {
            set.insert(value);
        }
        for value in WORKLOAD {
            set.insert(value);
        }
        for value in &WORKLOAD {
            set.remove(value);
        }
    }
    black_box(&set);
    report("HashSet", start);

    let mut set = BTreeSet::new();
    let start = Instant::now();
    for _ in 0..cycles {
        for value in WORKLOAD {
            set.insert(value);
        }
        for value in WORKLOAD {
            set.insert(value);
        }
        for value in &WORKLOAD {
            set.remove(value);
        }
    }
    black_box(&set);
    report("BTreeSet", start);
}

fn report(name: &str, start: Instant) {
    let elapsed = start.elapsed();
    println!("{name:>12}: {ms:>10.3} ms", ms = elapsed.as_secs_f64() * 1000.0);
}
