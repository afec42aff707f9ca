use crate::cli::parser::LookupCli;
use crate::config::Config;
use crate::core::LookupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Column;
use crate::ui::messages::warning;
use crate::utils::formatting::format_entry;

/// Handle `lookup_agenda <COLUMN> <VALUE>...`
pub fn handle(cli: &LookupCli, cfg: &Config) -> AppResult<()> {
    // validate before touching the database
    let column = Column::from_name(&cli.column)?;
    let value = cli.joined_value();

    let pool = DbPool::from_config(cfg)?;
    let table = pool.agendas()?;
    let entries = LookupLogic::collect(&table, column, &value)?;

    if entries.is_empty() {
        warning(format!("No agenda entries match {} '{}'", column.name(), value));
        return Ok(());
    }

    for entry in &entries {
        println!("{}", format_entry(entry));
    }

    Ok(())
}
