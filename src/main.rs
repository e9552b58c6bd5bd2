//! hourtracker main entrypoint.

use hourtracker::run;
use hourtracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
