//! `import_agenda` entrypoint.

use agenda_import::run_import;
use agenda_import::ui::messages::error;

fn main() {
    if let Err(e) = run_import() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
