//! Powered-device pass-through: what a device re-injects downstream.

use poe_core::{Real, clamp_non_negative};

/// Output a device passes on after taking its own draw and losing the
/// conversion inefficiency on the remainder.
///
/// A device whose draw meets or exceeds its input passes on nothing; that is
/// an ordinary underpowered state, not an error.
pub fn device_pass_through_output(input_w: Real, draw_w: Real, efficiency_percent: Real) -> Real {
    let remaining = clamp_non_negative(input_w - draw_w);
    remaining * (efficiency_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_minus_draw_times_efficiency() {
        assert_eq!(device_pass_through_output(30.0, 5.0, 100.0), 25.0);
        assert_eq!(device_pass_through_output(30.0, 5.0, 80.0), 20.0);
    }

    #[test]
    fn draw_above_input_passes_nothing() {
        assert_eq!(device_pass_through_output(10.0, 15.0, 90.0), 0.0);
    }

    #[test]
    fn draw_equal_to_input_passes_nothing() {
        assert_eq!(device_pass_through_output(10.0, 10.0, 80.0), 0.0);
    }
}
