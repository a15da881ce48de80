//! Racing callers against one activator.

use std::sync::Barrier;
use std::thread;

use crate::common::{constructible_handles, Inventory};
use activator::{Activator, TypeHandle};
use rayon::prelude::*;

const THREADS: usize = 16;

#[test]
fn racing_first_use_leaves_one_entry() {
    let activator = Activator::default();
    let ty = TypeHandle::of::<Inventory>();
    let barrier = Barrier::new(THREADS);

    let built: usize = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let instance = activator.create_instance(ty).unwrap();
                    usize::from(instance.is::<Inventory>())
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).sum()
    });

    assert_eq!(built, THREADS);
    assert_eq!(activator.cache().len(), 1);

    // Redundant compilation is allowed, but only on first use.
    let compiled = activator.cache().compilations();
    assert!((1..=THREADS).contains(&compiled), "compiled {compiled} times");

    activator.create_instance(ty).unwrap();
    assert_eq!(activator.cache().compilations(), compiled);
}

#[test]
fn parallel_mixed_types() {
    let activator = Activator::default();
    let handles = constructible_handles();

    let mismatches = (0..2_000)
        .into_par_iter()
        .filter(|i| {
            let ty = handles[i % handles.len()];
            let instance = activator.create_instance(ty).unwrap();
            Some(instance.type_id()) != ty.type_id()
        })
        .count();

    assert_eq!(mismatches, 0);
    assert_eq!(activator.cache().len(), handles.len());
}

#[test]
fn generic_entry_point_from_many_threads() {
    let activator = Activator::default();
    let total: u32 = (0..256)
        .into_par_iter()
        .map(|_| activator.create::<Inventory>().revision)
        .sum();
    assert_eq!(total, 0);
    assert!(activator.cache().is_empty());
}
