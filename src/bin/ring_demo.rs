//! Ring buffer demo.
//!
//! Streams `DataPoint` records through a 32-slot `RingBuffer` with `u8`
//! counters. When the ring is full the oldest record is evicted before the
//! next insert; after the last insert the ring is drained. The 8-bit counters
//! overflow several times over a default run, which exercises the masking
//! scheme end to end.
//!
//! # Output
//!
//! Every insert and removal is logged through `tracing`. Set `RUST_LOG`
//! (for example `RUST_LOG=ring_demo=debug`) to change verbosity; the default
//! is `info`.
//!
//! # Exit Codes
//!
//! - `0`: Success
//! - `2`: Invalid arguments

use ringfifo::RingBuffer;
use std::env;
use std::io;
use tracing::{debug, info, warn};

const DATA_LEN: usize = 64;
const NAME_LEN: usize = 32;
const RING_SLOTS: usize = 32;
const DEFAULT_ITERATIONS: i32 = 100;

type DemoRing = RingBuffer<DataPoint, RING_SLOTS, u8>;

/// Fixed-size record, large enough that copies are not free.
#[derive(Clone, Copy)]
struct DataPoint {
    value: i32,
    parity: i32,
    name: [u8; NAME_LEN],
    data: [i32; DATA_LEN],
}

impl DataPoint {
    fn named(name: &str) -> Self {
        let mut buf = [0u8; NAME_LEN];
        let len = name.len().min(NAME_LEN);
        buf[..len].copy_from_slice(&name.as_bytes()[..len]);
        Self {
            value: 0,
            parity: 0,
            name: buf,
            data: [0; DATA_LEN],
        }
    }

    fn name(&self) -> &str {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        std::str::from_utf8(&self.name[..end]).unwrap_or("?")
    }

    fn fill(&mut self, i: i32) {
        self.value = i;
        self.parity = i.rem_euclid(2);
        self.data = [i; DATA_LEN];
    }

    /// True when every sample still matches `value`; a torn copy would not.
    fn is_consistent(&self) -> bool {
        self.data.iter().all(|&d| d == self.value)
            && self.parity == self.value.rem_euclid(2)
    }
}

fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [OPTIONS]

OPTIONS:
    --iterations=<N>        Number of records to stream, at most 2147483647 (default: {})
    --help, -h              Show this help message",
        exe.to_string_lossy(),
        DEFAULT_ITERATIONS
    );
}

fn log_removed(kind: &str, dp: &DataPoint, ring: &DemoRing) {
    info!(
        kind,
        name = dp.name(),
        value = dp.value,
        parity = dp.parity,
        sample = dp.data[0],
        pending = ring.read_available(),
        "<== removed"
    );
    if !dp.is_consistent() {
        warn!(value = dp.value, "record contents do not match its value");
    }
}

fn run(iterations: i32) -> usize {
    let mut ring = DemoRing::new();
    let mut written = DataPoint::named("sensor");
    let mut read = DataPoint::named("");
    let mut removed = 0usize;

    for i in 1..iterations {
        written.fill(i);

        if ring.is_full() {
            let ok = ring.remove_into(&mut read);
            debug!(ok, "evicting oldest record");
            if ok {
                removed += 1;
                log_removed("evict", &read, &ring);
            }
        }

        let ok = ring.insert_ref(&written);
        info!(
            i,
            ok,
            value = written.value,
            parity = written.parity,
            pending = ring.read_available(),
            "--> inserted"
        );
    }

    while ring.read_available() > 0 {
        match ring.pop() {
            Some(dp) => {
                removed += 1;
                log_removed("drain", &dp, &ring);
            }
            None => break,
        }
    }

    debug_assert!(ring.is_empty());
    removed
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = env::args_os();
    let exe = args.next().unwrap_or_else(|| "ring_demo".into());
    let mut iterations = DEFAULT_ITERATIONS;

    for arg in args {
        let Some(flag) = arg.to_str() else {
            eprintln!("non-UTF-8 argument: {}", arg.to_string_lossy());
            print_usage(&exe);
            std::process::exit(2);
        };
        if let Some(value) = flag.strip_prefix("--iterations=") {
            iterations = value.parse().unwrap_or_else(|_| {
                eprintln!("invalid --iterations value: {}", value);
                std::process::exit(2);
            });
        } else if flag == "--help" || flag == "-h" {
            print_usage(&exe);
            return Ok(());
        } else {
            eprintln!("unknown argument: {}", flag);
            print_usage(&exe);
            std::process::exit(2);
        }
    }

    let removed = run(iterations);
    info!(iterations, removed, "done");
    Ok(())
}
