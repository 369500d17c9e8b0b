// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

// Bits of XINPUT_GAMEPAD::wButtons.
pub const BTN_DPAD_UP: u16 = 0x0001;
pub const BTN_DPAD_DOWN: u16 = 0x0002;
pub const BTN_DPAD_LEFT: u16 = 0x0004;
pub const BTN_DPAD_RIGHT: u16 = 0x0008;
pub const BTN_START: u16 = 0x0010;
pub const BTN_SELECT: u16 = 0x0020;
pub const BTN_LTHUMB: u16 = 0x0040;
pub const BTN_RTHUMB: u16 = 0x0080;
pub const BTN_LT: u16 = 0x0100;
pub const BTN_RT: u16 = 0x0200;
pub const BTN_SOUTH: u16 = 0x1000;
pub const BTN_EAST: u16 = 0x2000;
pub const BTN_WEST: u16 = 0x4000;
pub const BTN_NORTH: u16 = 0x8000;

pub const STICK_MAX: f32 = 32767.0;
pub const TRIGGER_MAX: f32 = 255.0;
pub const MOTOR_MAX: f32 = 65535.0;
