//! Viewport breakpoint classification.

/// Width (logical pixels) at which the layout switches to the wide variant.
pub const DEFAULT_BREAKPOINT_PX: f64 = 640.0;

/// `true` when `width` reaches the wide layout threshold.
pub fn is_wide(width: f64, threshold: f64) -> bool {
    width >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(is_wide(640.0, DEFAULT_BREAKPOINT_PX));
        assert!(is_wide(1920.0, DEFAULT_BREAKPOINT_PX));
        assert!(!is_wide(639.5, DEFAULT_BREAKPOINT_PX));
    }

    #[test]
    fn custom_threshold() {
        assert!(!is_wide(800.0, 1024.0));
        assert!(is_wide(1024.0, 1024.0));
    }
}
