// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
#![allow(unused_variables)]

use super::{Platform, RawState};

pub const NAME: &str = "Unknown";

/// Backend for platforms without controller support. No slot is ever connected.
#[derive(Debug, Default)]
pub struct DefaultPlatform {
    _priv: (),
}

impl DefaultPlatform {
    pub fn new() -> Self {
        warn!("Current platform is not supported, gamepads will never be connected.");
        DefaultPlatform { _priv: () }
    }
}

impl Platform for DefaultPlatform {
    fn query_state(&mut self, slot: u32) -> Option<RawState> {
        None
    }

    fn set_vibration(&mut self, slot: u32, left: u16, right: u16) {}
}
