// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! PadHub - polled controller state
//! ================================
//!
//! PadHub keeps the last known state of a fixed number of player slots and refreshes it from the
//! platform controller API once per tick. There are no events: call `refresh()` from your main
//! loop and read whatever you need.
//!
//! Example
//! -------
//!
//! ```
//! use padhub::{Button, ControllerHub, PlayerIndex};
//!
//! let mut hub = ControllerHub::new();
//!
//! // Main loop
//! loop {
//!     hub.refresh();
//!
//!     let mut rumble = Vec::new();
//!     for (player, state) in hub.connected() {
//!         println!("{}: left stick {:?}", player, state.left_stick());
//!
//!         if state.is_pressed(Button::South) {
//!             rumble.push(player);
//!         }
//!     }
//!
//!     for player in rumble {
//!         hub.set_vibration(player.index(), 1.0, 0.5).unwrap();
//!     }
//!
//!     let _ = hub.player(PlayerIndex::One).right_trigger();
//!     # break;
//! }
//! ```
//!
//! Values
//! ------
//!
//! Stick axes are raw value divided by 32767, so the most negative raw value gives slightly less
//! than -1.0. Triggers are in range [0.0, 1.0]. Buttons are passed as raw bitmask, use
//! [`ControllerState::is_pressed`] to test single button.
//!
//! Supported platforms
//! -------------------
//!
//! |                  | Input | Vibration |
//! |------------------|:-----:|:---------:|
//! | Windows (XInput) |   ✓   |     ✓     |
//! | Other            |   ✕   |     ✕     |
//!
//! On other platforms every slot is always disconnected. Custom backend can be used by
//! implementing [`Platform`] and passing it to [`ControllerHub::with_platform`].

#[macro_use]
extern crate log;

#[cfg(target_os = "windows")]
extern crate winapi;

mod constants;
mod hub;
mod state;
mod utils;

pub mod platform;

pub use crate::hub::{ControllerHub, Error, PlayerIndex, StatesIter};
pub use crate::platform::{Platform, RawState};
pub use crate::state::{Button, ControllerState};

/// Number of player slots. Same as the number of controllers supported by XInput.
pub const PLAYER_SLOT_COUNT: usize = 4;
