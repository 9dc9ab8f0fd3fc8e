//! siteflow main entrypoint.

use siteflow::run;
use siteflow::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
