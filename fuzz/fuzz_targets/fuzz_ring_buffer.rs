#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;

use ringfifo::RingBuffer;

const CAP: usize = 16;

// Interprets a byte stream as an operation sequence against `RingBuffer`,
// checking every result against a `VecDeque` bounded at `CAP`.
//
// Byte layout:
// - Byte 0 → starting value for both `u8` counters, so short inputs still
//   cross the counter overflow boundary.
// - Remaining bytes as `(opcode, operand)` pairs:
//   - 0 → `insert(operand)`
//   - 1 → `pop()`
//   - 2 → `remove_n(operand % 20)`
//   - 3 → `write_slice` of `operand % 20` values
//   - 4 → `read_slice` into `operand % 20` slots
//   - 5 → `at(operand % 20)`
//   - 6 → `clear()`
//   - 7 → `remove()`
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut rb: RingBuffer<u8, CAP, u8> = RingBuffer::new();
    // Advance both counters to the requested origin through the public API.
    let origin = data[0] as usize;
    for _ in 0..origin / CAP {
        rb.write_slice(&[0; CAP]);
        rb.clear();
    }
    rb.write_slice(&[0; CAP][..origin % CAP]);
    rb.clear();

    let mut model: VecDeque<u8> = VecDeque::with_capacity(CAP);

    let ops = &data[1..];
    let mut i = 0;
    while i + 1 < ops.len() {
        let opcode = ops[i];
        let operand = ops[i + 1];
        let n = operand as usize % 20;
        i += 2;

        match opcode % 8 {
            0 => {
                let expected = model.len() < CAP;
                if expected {
                    model.push_back(operand);
                }
                assert_eq!(rb.insert(operand), expected, "insert({operand})");
            }
            1 => {
                assert_eq!(rb.pop(), model.pop_front(), "pop");
            }
            2 => {
                let expected = n.min(model.len());
                model.drain(..expected).for_each(drop);
                assert_eq!(rb.remove_n(n), expected, "remove_n({n})");
            }
            3 => {
                let values: Vec<u8> = (0..n as u8).map(|k| operand.wrapping_add(k)).collect();
                let expected = n.min(CAP - model.len());
                model.extend(&values[..expected]);
                assert_eq!(rb.write_slice(&values), expected, "write_slice({n})");
            }
            4 => {
                let mut out = vec![0u8; n];
                let expected: Vec<u8> = model.drain(..n.min(model.len())).collect();
                assert_eq!(rb.read_slice(&mut out), expected.len(), "read_slice({n})");
                assert_eq!(&out[..expected.len()], &expected[..]);
            }
            5 => {
                assert_eq!(rb.at(n), model.get(n), "at({n})");
            }
            6 => {
                rb.clear();
                model.clear();
            }
            _ => {
                assert_eq!(rb.remove(), model.pop_front().is_some(), "remove");
            }
        }

        assert_eq!(rb.read_available(), model.len());
        assert_eq!(rb.read_available() + rb.write_available(), CAP);
        assert_eq!(rb.peek(), model.front());
    }

    assert!(rb.iter().eq(model.iter()));
});
