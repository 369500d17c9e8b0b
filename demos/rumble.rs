extern crate env_logger;
extern crate padhub;

use padhub::{ControllerHub, PlayerIndex};
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    let mut hub = ControllerHub::new();
    hub.refresh();

    let players: Vec<PlayerIndex> = hub.connected().map(|(player, _)| player).collect();
    if players.is_empty() {
        println!("No gamepads connected.");
        return;
    }

    // Strong motor, then weak motor, then both
    for &(left, right) in &[(1.0, 0.0), (0.0, 1.0), (0.6, 0.6)] {
        for player in &players {
            hub.set_vibration(player.index(), left, right).unwrap();
        }
        thread::sleep(Duration::from_millis(500));
    }

    for player in &players {
        hub.set_vibration(player.index(), 0.0, 0.0).unwrap();
    }
}
