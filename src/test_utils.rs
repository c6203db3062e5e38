//! Case-count knobs for the ring buffer property tests.
//!
//! Model-based runs are cheap per case but sweep many operation sequences,
//! so local `cargo test` keeps them short and CI runs the full count.

pub fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
}

/// `PROPTEST_CASES` wins when set; otherwise CI gets `default` and local
/// runs are capped at 4.
pub fn proptest_cases(default: u32) -> u32 {
    if let Some(value) = env_u32("PROPTEST_CASES") {
        return value.max(1);
    }
    if is_ci() {
        return default.max(1);
    }
    default.clamp(1, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cases_never_zero() {
        assert!(proptest_cases(0) >= 1);
        assert!(proptest_cases(16) >= 1);
    }
}
