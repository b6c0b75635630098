//! lessonlog main entrypoint.

use lessonlog::run;
use lessonlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
