// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::{Platform, RawState};

use std::mem;
use winapi::shared::winerror::{ERROR_DEVICE_NOT_CONNECTED, ERROR_SUCCESS};
use winapi::um::xinput::{self, XINPUT_STATE as XState, XINPUT_VIBRATION as XInputVibration};

pub const NAME: &str = "Windows (XInput)";

/// XInput backend.
#[derive(Debug, Default)]
pub struct DefaultPlatform {
    _priv: (),
}

impl DefaultPlatform {
    pub fn new() -> Self {
        DefaultPlatform { _priv: () }
    }
}

impl Platform for DefaultPlatform {
    fn query_state(&mut self, slot: u32) -> Option<RawState> {
        let mut state: XState = unsafe { mem::zeroed() };
        let err = unsafe { xinput::XInputGetState(slot, &mut state) };

        match err {
            ERROR_SUCCESS => {
                let gp = &state.Gamepad;
                Some(RawState {
                    packet_number: state.dwPacketNumber,
                    left_stick: (gp.sThumbLX, gp.sThumbLY),
                    right_stick: (gp.sThumbRX, gp.sThumbRY),
                    left_trigger: gp.bLeftTrigger,
                    right_trigger: gp.bRightTrigger,
                    buttons: gp.wButtons,
                })
            }
            ERROR_DEVICE_NOT_CONNECTED => None,
            _ => {
                error!(
                    "Failed to get gamepad state – unknown error. Slot = {}, error code = {}.",
                    slot, err
                );
                None
            }
        }
    }

    fn set_vibration(&mut self, slot: u32, left: u16, right: u16) {
        let mut vibration = XInputVibration {
            wLeftMotorSpeed: left,
            wRightMotorSpeed: right,
        };

        let err = unsafe { xinput::XInputSetState(slot, &mut vibration) };
        match err {
            ERROR_SUCCESS => (),
            ERROR_DEVICE_NOT_CONNECTED => {
                debug!(
                    "Ignoring vibration request – there is no gamepad in slot {}.",
                    slot
                );
            }
            _ => {
                error!(
                    "Failed to change vibration – unknown error. Slot = {}, error code = {}.",
                    slot, err
                );
            }
        }
    }
}
