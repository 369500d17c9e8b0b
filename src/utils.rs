// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::constants::{MOTOR_MAX, STICK_MAX, TRIGGER_MAX};

/// Returns true if any of `mask` bits is set in `bits`.
pub fn test_bit(mask: u16, bits: u16) -> bool {
    bits & mask != 0
}

/// Scales raw stick value. Not clamped, so `i16::MIN` gives slightly less than -1.0.
pub fn normalize_stick(raw: i16) -> f32 {
    f32::from(raw) / STICK_MAX
}

pub fn normalize_trigger(raw: u8) -> f32 {
    f32::from(raw) / TRIGGER_MAX
}

/// Converts motor intensity in range [0.0, 1.0] to motor speed. Values outside of this range are
/// clamped, NaN is treated as 0.
pub fn motor_speed(intensity: f32) -> u16 {
    // `as` truncates toward zero and maps NaN to 0
    (intensity.clamp(0.0, 1.0) * MOTOR_MAX) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_test_bit() {
        let bits = 0b1001_0000_0000_0001u16;
        assert!(test_bit(0x0001, bits));
        assert!(!test_bit(0x0002, bits));
        assert!(test_bit(0x1000, bits));
        assert!(test_bit(0x8000, bits));
        assert!(!test_bit(0x4000, bits));
    }

    #[test]
    fn stick_range() {
        assert_eq!(normalize_stick(0), 0.0);
        assert_eq!(normalize_stick(32767), 1.0);
        assert_eq!(normalize_stick(-32767), -1.0);

        let min = normalize_stick(-32768);
        assert!(min < -1.0);
        assert!((min + 1.000_030_5).abs() < 1e-6);
    }

    #[test]
    fn trigger_range() {
        assert_eq!(normalize_trigger(0), 0.0);
        assert_eq!(normalize_trigger(255), 1.0);
        assert!((normalize_trigger(128) - 0.501_960_8).abs() < 1e-6);
    }

    #[test]
    fn motor() {
        assert_eq!(motor_speed(1.0), 65535);
        assert_eq!(motor_speed(0.5), 32767);
        assert_eq!(motor_speed(0.0), 0);
        assert_eq!(motor_speed(2.0), 65535);
        assert_eq!(motor_speed(-0.3), 0);
        assert_eq!(motor_speed(f32::NAN), 0);
    }
}
