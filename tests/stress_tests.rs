//! Stress tests that push the heap through many growth steps and
//! long interleaved operation sequences

use std::cmp::Reverse;
use std::collections::BinaryHeap as StdBinaryHeap;

use min_priority_queue::ordering::Reversed;
use min_priority_queue::{BinaryHeap, NaturalOrder, PriorityQueue};

/// Test massive numbers of adds and polls
fn test_massive_operations<Q: PriorityQueue<i32>>(mut queue: Q) {
    for i in 0..10_000 {
        queue.add(i).unwrap();
    }
    assert_eq!(queue.size(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.poll(), Some(i));
    }
    assert!(queue.is_empty());
}

/// Test alternating add and poll
fn test_alternating_ops<Q: PriorityQueue<i32>>(mut queue: Q) {
    for i in 0..2_000 {
        queue.add(i * 2).unwrap();
        queue.add(i * 2 + 1).unwrap();
        assert!(queue.poll().is_some());
    }
    assert_eq!(queue.size(), 2_000);

    let mut last = i32::MIN;
    while let Some(value) = queue.poll() {
        assert!(value >= last);
        last = value;
    }
}

/// Scrambled input compared element by element with the reference heap
fn test_matches_reference<Q: PriorityQueue<u64>>(mut queue: Q) {
    let mut reference = StdBinaryHeap::new();
    // simple LCG so the sequence is reproducible
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    for round in 0..20_000u64 {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let value = state >> 48;
        if round % 5 == 4 {
            assert_eq!(queue.poll(), reference.pop().map(|Reverse(v)| v));
        } else {
            queue.add(value).unwrap();
            reference.push(Reverse(value));
        }
        assert_eq!(queue.size(), reference.len());
    }
}

#[test]
fn test_massive_operations_binary() {
    test_massive_operations(BinaryHeap::with_capacity(1).unwrap());
}

#[test]
fn test_massive_operations_reversed_input() {
    let mut heap = BinaryHeap::new();
    for i in (0..10_000).rev() {
        heap.add(i).unwrap();
    }
    assert!(heap.is_heap());
    assert_eq!(heap.into_sorted_vec(), (0..10_000).collect::<Vec<_>>());
}

#[test]
fn test_alternating_ops_binary() {
    test_alternating_ops(BinaryHeap::new());
}

#[test]
fn test_matches_reference_binary() {
    test_matches_reference(BinaryHeap::new());
}

#[test]
fn test_max_heap_stress() {
    let mut heap = BinaryHeap::with_comparator(Reversed(NaturalOrder));
    for i in 0..5_000 {
        heap.add((i * 7919) % 5_000).unwrap();
    }
    for expected in (0..5_000).rev() {
        assert_eq!(heap.poll(), Some(expected));
    }
}

#[test]
fn test_drain_and_refill() {
    let mut heap = BinaryHeap::with_capacity(3).unwrap();
    for cycle in 0..10 {
        for i in 0..500 {
            heap.add(cycle * 1_000 + (499 - i)).unwrap();
        }
        for i in 0..500 {
            assert_eq!(heap.poll(), Some(cycle * 1_000 + i));
        }
        assert!(heap.is_empty());
    }
}
