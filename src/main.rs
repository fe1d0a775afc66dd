//! studiosched main entrypoint.

use studiosched::run;
use studiosched::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
