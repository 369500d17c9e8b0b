// Copyright 2024 PadHub Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::platform::{self, DefaultPlatform, Platform};
use crate::state::ControllerState;
use crate::utils;
use crate::PLAYER_SLOT_COUNT;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::iter::Zip;
use std::slice::Iter;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Main object responsible of polling controllers.
///
/// `ControllerHub` owns state of every player slot. Call [`refresh()`](Self::refresh) once per
/// tick and read the results with [`state()`](Self::state) or [`player()`](Self::player).
///
/// ```
/// use padhub::{ControllerHub, PlayerIndex};
///
/// let mut hub = ControllerHub::new();
/// hub.refresh();
///
/// let state = hub.player(PlayerIndex::One);
/// if state.is_connected() {
///     println!("Left stick: {:?}", state.left_stick());
/// }
/// ```
#[derive(Debug)]
pub struct ControllerHub<P: Platform = DefaultPlatform> {
    platform: P,
    states: [ControllerState; PLAYER_SLOT_COUNT],
}

impl ControllerHub<DefaultPlatform> {
    /// Creates hub using backend for current platform. All slots start disconnected.
    pub fn new() -> Self {
        info!("Using {} backend", platform::NAME);
        ControllerHub::with_platform(DefaultPlatform::new())
    }
}

impl Default for ControllerHub<DefaultPlatform> {
    fn default() -> Self {
        ControllerHub::new()
    }
}

impl<P: Platform> ControllerHub<P> {
    /// Creates hub that queries `platform`. All slots start disconnected.
    pub fn with_platform(platform: P) -> Self {
        ControllerHub {
            platform,
            states: [ControllerState::disconnected(); PLAYER_SLOT_COUNT],
        }
    }

    /// Queries platform for state of every slot and updates stored values.
    ///
    /// Missing controller is not an error, its slot is reset to disconnected state.
    pub fn refresh(&mut self) {
        for (player, state) in PlayerIndex::all().iter().zip(self.states.iter_mut()) {
            let was_connected = state.is_connected();

            match self.platform.query_state(player.index() as u32) {
                Some(raw) => {
                    state.update(&raw);
                    if !was_connected {
                        info!("Gamepad connected in slot {}", player.index());
                    }
                }
                None => {
                    state.reset();
                    if was_connected {
                        info!("Gamepad disconnected from slot {}", player.index());
                    }
                }
            }
        }
    }

    /// Returns state of given slot.
    ///
    /// Fails with [`Error::InvalidSlot`] if `slot >= PLAYER_SLOT_COUNT`.
    pub fn state(&self, slot: usize) -> Result<&ControllerState, Error> {
        self.states.get(slot).ok_or(Error::InvalidSlot(slot))
    }

    /// Returns state of given player.
    pub fn player(&self, player: PlayerIndex) -> &ControllerState {
        &self.states[player.index()]
    }

    /// Iterator over state of all slots, connected or not.
    pub fn states(&self) -> StatesIter<'_> {
        StatesIter(PlayerIndex::all().iter().zip(self.states.iter()))
    }

    /// Iterator over slots with connected controller.
    pub fn connected(&self) -> impl Iterator<Item = (PlayerIndex, &ControllerState)> + '_ {
        self.states().filter(|(_, state)| state.is_connected())
    }

    /// Sets intensity of left (low frequency) and right (high frequency) motor of controller in
    /// `slot`.
    ///
    /// Intensities are clamped to [0.0, 1.0]. Request for slot without controller is silently
    /// ignored, but `slot` itself must be valid.
    pub fn set_vibration(&mut self, slot: usize, left: f32, right: f32) -> Result<(), Error> {
        if slot >= PLAYER_SLOT_COUNT {
            return Err(Error::InvalidSlot(slot));
        }

        let (left, right) = (utils::motor_speed(left), utils::motor_speed(right));
        debug!("Setting vibration of slot {} to ({}, {})", slot, left, right);
        self.platform.set_vibration(slot as u32, left, right);

        Ok(())
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

/// Iterator over all player slots and their state.
pub struct StatesIter<'a>(Zip<Iter<'static, PlayerIndex>, Iter<'a, ControllerState>>);

impl<'a> Iterator for StatesIter<'a> {
    type Item = (PlayerIndex, &'a ControllerState);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(player, state)| (*player, state))
    }
}

/// Player slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PlayerIndex {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
}

impl PlayerIndex {
    /// All slots in order.
    pub fn all() -> &'static [PlayerIndex; PLAYER_SLOT_COUNT] {
        &[
            PlayerIndex::One,
            PlayerIndex::Two,
            PlayerIndex::Three,
            PlayerIndex::Four,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for PlayerIndex {
    type Error = Error;

    fn try_from(slot: usize) -> Result<Self, Error> {
        PlayerIndex::all()
            .get(slot)
            .copied()
            .ok_or(Error::InvalidSlot(slot))
    }
}

impl From<PlayerIndex> for usize {
    fn from(player: PlayerIndex) -> usize {
        player.index()
    }
}

impl Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("player {}", self.index() + 1))
    }
}

/// Error type which can be returned when accessing player slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Slot index is not smaller than `PLAYER_SLOT_COUNT`.
    InvalidSlot(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidSlot(slot) => f.write_fmt(format_args!(
                "invalid player slot {} (expected 0..{})",
                slot, PLAYER_SLOT_COUNT
            )),
        }
    }
}

impl StdError for Error {}
