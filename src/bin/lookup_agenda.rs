//! `lookup_agenda` entrypoint.

use agenda_import::run_lookup;
use agenda_import::ui::messages::error;

fn main() {
    if let Err(e) = run_lookup() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
