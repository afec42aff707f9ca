use crate::cli::parser::ImportCli;
use crate::config::Config;
use crate::core::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::source;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle `import_agenda <FILE>`
pub fn handle(cli: &ImportCli, cfg: &Config) -> AppResult<()> {
    let path = Path::new(&cli.file);

    info(format!(
        "Importing {} into {}",
        path.display(),
        cfg.database_path().display()
    ));

    // read the whole sheet first: an unreadable file must not create the database
    let rows = source::read_rows(path, cfg.start_row)?;
    info(format!(
        "Read {} rows from {} (starting at row {})",
        rows.len(),
        path.display(),
        cfg.start_row
    ));

    let pool = DbPool::from_config(cfg)?;
    let report = ImportLogic::apply(&pool, path, &rows)?;
    let total = pool.agendas()?.count()?;

    if report.failed > 0 {
        warning(format!("Import finished with errors: {}", report.summary()));
    } else {
        success(format!("Import completed: {}", report.summary()));
    }
    info(format!("The agenda table now holds {total} entries"));

    Ok(())
}
