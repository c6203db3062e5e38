//! Bulk copy paths: `write_slice`, `read_slice` and `remove_n` at every
//! starting offset, so both the one-span and two-span copies are hit.

use proptest::prelude::*;

use ringfifo::RingBuffer;

const CAP: usize = 16;

/// A ring whose counters were advanced by `offset` and which then holds
/// `prefill` elements `1000..`.
fn positioned(offset: usize, prefill: usize) -> RingBuffer<u32, CAP, u8> {
    let mut rb = RingBuffer::new();
    for _ in 0..offset {
        rb.insert(0);
        rb.remove();
    }
    for v in 0..prefill as u32 {
        rb.insert(1000 + v);
    }
    rb
}

proptest! {
    #[test]
    fn write_then_read_round_trips(
        offset in 0usize..300,
        prefill in 0usize..=CAP,
        values in prop::collection::vec(any::<u32>(), 0..40),
    ) {
        let mut rb = positioned(offset, prefill);
        let room = rb.write_available();

        let written = rb.write_slice(&values);
        prop_assert_eq!(written, values.len().min(room));
        prop_assert_eq!(rb.read_available(), prefill + written);

        prop_assert_eq!(rb.remove_n(prefill), prefill);
        let mut out = vec![0u32; values.len()];
        prop_assert_eq!(rb.read_slice(&mut out), written);
        prop_assert_eq!(&out[..written], &values[..written]);
        prop_assert!(out[written..].iter().all(|&v| v == 0));
        prop_assert!(rb.is_empty());
    }

    #[test]
    fn remove_n_clamps_to_available(
        offset in 0usize..300,
        prefill in 0usize..=CAP,
        count in 0usize..64,
    ) {
        let mut rb = positioned(offset, prefill);
        let removed = rb.remove_n(count);
        prop_assert_eq!(removed, count.min(prefill));
        prop_assert_eq!(rb.read_available(), prefill - removed);
        if count >= prefill {
            prop_assert!(rb.is_empty());
        } else {
            prop_assert_eq!(rb.peek(), Some(&(1000 + removed as u32)));
        }
    }

    #[test]
    fn slices_concatenate_to_fifo_order(offset in 0usize..300, prefill in 0usize..=CAP) {
        let rb = positioned(offset, prefill);
        let (front, back) = rb.as_slices();
        let joined: Vec<u32> = front.iter().chain(back).copied().collect();
        let expected: Vec<u32> = (0..prefill as u32).map(|v| 1000 + v).collect();
        prop_assert_eq!(&joined, &expected);
        prop_assert_eq!(rb.iter().copied().collect::<Vec<_>>(), expected);
    }
}
