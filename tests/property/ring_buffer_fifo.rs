//! FIFO order and occupancy accounting under arbitrary insert/remove
//! interleavings, for every counter width.

use std::collections::VecDeque;

use proptest::prelude::*;

use ringfifo::{Counter, RingBuffer};

/// `true` = insert the next value, `false` = remove one.
fn schedule() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..600)
}

fn run_schedule<const N: usize, I: Counter>(steps: &[bool]) -> Result<(), TestCaseError> {
    let mut rb: RingBuffer<u32, N, I> = RingBuffer::new();
    let mut model = VecDeque::new();
    let mut next = 0u32;

    for &insert in steps {
        let before = (rb.read_available(), rb.write_available());
        if insert {
            let accepted = rb.insert(next);
            prop_assert_eq!(accepted, model.len() < N);
            if accepted {
                model.push_back(next);
            } else {
                prop_assert_eq!((rb.read_available(), rb.write_available()), before);
            }
            next += 1;
        } else {
            let mut out = u32::MAX;
            let removed = rb.remove_into(&mut out);
            match model.pop_front() {
                Some(expected) => {
                    prop_assert!(removed);
                    prop_assert_eq!(out, expected);
                }
                None => {
                    prop_assert!(!removed);
                    prop_assert_eq!(out, u32::MAX);
                    prop_assert_eq!((rb.read_available(), rb.write_available()), before);
                }
            }
        }

        prop_assert_eq!(rb.read_available() + rb.write_available(), N);
        prop_assert_eq!(rb.is_empty(), rb.read_available() == 0);
        prop_assert_eq!(rb.is_full(), rb.write_available() == 0);
        for (i, expected) in model.iter().enumerate() {
            prop_assert_eq!(rb.at(i), Some(expected));
        }
        prop_assert_eq!(rb.at(model.len()), None);
    }
    Ok(())
}

proptest! {
    #[test]
    fn fifo_u8_counters(steps in schedule()) {
        run_schedule::<4, u8>(&steps)?;
    }

    #[test]
    fn fifo_u16_counters(steps in schedule()) {
        run_schedule::<8, u16>(&steps)?;
    }

    #[test]
    fn fifo_usize_counters(steps in schedule()) {
        run_schedule::<16, usize>(&steps)?;
    }

    /// Inserts without intervening removes come back out in insertion order.
    #[test]
    fn burst_then_drain(values in prop::collection::vec(any::<i64>(), 0..=32)) {
        let mut rb: RingBuffer<i64, 32, u8> = RingBuffer::new();
        for v in &values {
            prop_assert!(rb.insert_ref(v));
        }
        let mut drained = Vec::new();
        while let Some(v) = rb.pop() {
            drained.push(v);
        }
        prop_assert_eq!(drained, values);
        prop_assert!(rb.is_empty());
    }
}
