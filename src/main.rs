//! ftracker main entrypoint.

use freelance_tracker::run;
use freelance_tracker::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
