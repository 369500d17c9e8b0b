extern crate env_logger;
extern crate padhub;

use padhub::ControllerHub;

fn main() {
    env_logger::init();
    let mut hub = ControllerHub::new();

    loop {
        hub.refresh();
        // Clear
        print!("{}[2J", 27 as char);
        for (player, state) in hub.states() {
            println!("{}: {:#?}", player, state);
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
}
