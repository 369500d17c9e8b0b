// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::constants::*;
use crate::platform::RawState;
use crate::utils;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Last known state of controller in one player slot.
///
/// Disconnected slot has all values set to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ControllerState {
    connected: bool,
    packet_number: u32,
    left_stick: (f32, f32),
    right_stick: (f32, f32),
    left_trigger: f32,
    right_trigger: f32,
    buttons: u16,
}

impl ControllerState {
    /// Returns state of empty slot.
    pub fn disconnected() -> Self {
        ControllerState::default()
    }

    /// Returns `true` if controller responded during last refresh.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Packet number of raw state from which current values were computed.
    pub fn packet_number(&self) -> u32 {
        self.packet_number
    }

    /// Position of left stick as `(x, y)`, each in range [-1.0, 1.0].
    pub fn left_stick(&self) -> (f32, f32) {
        self.left_stick
    }

    /// Position of right stick as `(x, y)`, each in range [-1.0, 1.0].
    pub fn right_stick(&self) -> (f32, f32) {
        self.right_stick
    }

    /// Value in range [0.0, 1.0].
    pub fn left_trigger(&self) -> f32 {
        self.left_trigger
    }

    /// Value in range [0.0, 1.0].
    pub fn right_trigger(&self) -> f32 {
        self.right_trigger
    }

    /// Raw button bitmask. See [`Button`] for meaning of bits.
    pub fn buttons(&self) -> u16 {
        self.buttons
    }

    pub fn is_pressed(&self, btn: Button) -> bool {
        utils::test_bit(btn.mask(), self.buttons)
    }

    /// Updates state with values from platform. Normalization is skipped if packet number did not
    /// change.
    pub(crate) fn update(&mut self, raw: &RawState) {
        self.connected = true;

        if self.packet_number == raw.packet_number {
            return;
        }

        self.packet_number = raw.packet_number;
        self.left_stick = (
            utils::normalize_stick(raw.left_stick.0),
            utils::normalize_stick(raw.left_stick.1),
        );
        self.right_stick = (
            utils::normalize_stick(raw.right_stick.0),
            utils::normalize_stick(raw.right_stick.1),
        );
        self.left_trigger = utils::normalize_trigger(raw.left_trigger);
        self.right_trigger = utils::normalize_trigger(raw.right_trigger);
        self.buttons = raw.buttons;
    }

    pub(crate) fn reset(&mut self) {
        *self = ControllerState::disconnected();
    }
}

/// Buttons reported by XInput compatible controllers.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Button {
    // Action Pad
    /// XBox - A
    South = BTN_SOUTH,
    /// XBox - B
    East = BTN_EAST,
    /// XBox - Y
    North = BTN_NORTH,
    /// XBox - X
    West = BTN_WEST,
    // Shoulder buttons
    LeftTrigger = BTN_LT,
    RightTrigger = BTN_RT,
    // Menu Pad
    /// XBox - Back
    Select = BTN_SELECT,
    Start = BTN_START,
    // Sticks
    LeftThumb = BTN_LTHUMB,
    RightThumb = BTN_RTHUMB,
    // D-Pad
    DPadUp = BTN_DPAD_UP,
    DPadDown = BTN_DPAD_DOWN,
    DPadLeft = BTN_DPAD_LEFT,
    DPadRight = BTN_DPAD_RIGHT,
}

impl Button {
    /// Bit of `ControllerState::buttons()` that represents this button.
    pub fn mask(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(packet_number: u32) -> RawState {
        RawState {
            packet_number,
            left_stick: (32767, -32768),
            right_stick: (0, 16384),
            left_trigger: 255,
            right_trigger: 0,
            buttons: BTN_SOUTH | BTN_DPAD_LEFT,
        }
    }

    #[test]
    fn default_is_disconnected() {
        let state = ControllerState::default();
        assert!(!state.is_connected());
        assert_eq!(state.packet_number(), 0);
        assert_eq!(state.left_stick(), (0.0, 0.0));
        assert_eq!(state.right_stick(), (0.0, 0.0));
        assert_eq!(state.left_trigger(), 0.0);
        assert_eq!(state.right_trigger(), 0.0);
        assert_eq!(state.buttons(), 0);
    }

    #[test]
    fn update_normalizes() {
        let mut state = ControllerState::default();
        state.update(&raw(1));

        assert!(state.is_connected());
        assert_eq!(state.packet_number(), 1);
        assert_eq!(state.left_stick().0, 1.0);
        assert!(state.left_stick().1 < -1.0);
        assert_eq!(state.right_stick().0, 0.0);
        assert!((state.right_stick().1 - 0.500_015_3).abs() < 1e-6);
        assert_eq!(state.left_trigger(), 1.0);
        assert_eq!(state.right_trigger(), 0.0);
        assert_eq!(state.buttons(), BTN_SOUTH | BTN_DPAD_LEFT);
    }

    #[test]
    fn same_packet_is_skipped() {
        let mut state = ControllerState::default();
        state.update(&raw(7));
        let before = state;

        let mut changed = raw(7);
        changed.left_stick = (0, 0);
        changed.buttons = 0;
        state.update(&changed);

        assert_eq!(state, before);
    }

    #[test]
    fn buttons() {
        let mut state = ControllerState::default();
        state.update(&raw(1));

        assert!(state.is_pressed(Button::South));
        assert!(state.is_pressed(Button::DPadLeft));
        assert!(!state.is_pressed(Button::North));
        assert!(!state.is_pressed(Button::Start));
        assert_eq!(Button::North.mask(), 0x8000);
    }

    #[test]
    fn reset() {
        let mut state = ControllerState::default();
        state.update(&raw(3));
        state.reset();
        assert_eq!(state, ControllerState::disconnected());
    }
}
