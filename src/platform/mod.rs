// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Platform backends.
//!
//! Each backend has to provide:
//!
//! * A `DefaultPlatform` struct implementing [`Platform`]
//! * A static `str` called `NAME` with the name of the backend

#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

pub use self::platform::*;

#[cfg(target_os = "windows")]
#[path = "windows/mod.rs"]
mod platform;

#[cfg(not(target_os = "windows"))]
#[path = "default/mod.rs"]
mod platform;

/// Unprocessed controller state, as reported by the platform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RawState {
    /// Changes only when new physical input was registered.
    pub packet_number: u32,
    pub left_stick: (i16, i16),
    pub right_stick: (i16, i16),
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub buttons: u16,
}

/// Source of controller state and sink for vibration requests.
///
/// `slot` is always smaller than [`PLAYER_SLOT_COUNT`](crate::PLAYER_SLOT_COUNT).
pub trait Platform {
    /// Returns current state of controller in `slot` or `None` if there is no controller.
    fn query_state(&mut self, slot: u32) -> Option<RawState>;

    /// Sets speed of left (low frequency) and right (high frequency) motor. Requests for slots
    /// without controller are ignored.
    fn set_vibration(&mut self, slot: u32, left: u16, right: u16);
}

impl<P: Platform + ?Sized> Platform for Box<P> {
    fn query_state(&mut self, slot: u32) -> Option<RawState> {
        (**self).query_state(slot)
    }

    fn set_vibration(&mut self, slot: u32, left: u16, right: u16) {
        (**self).set_vibration(slot, left, right)
    }
}
