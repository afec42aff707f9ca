use crate::db::queries::{AgendaTable, Filter};
use crate::errors::AppResult;
use crate::models::{AgendaEntry, Column};

pub struct LookupLogic;

impl LookupLogic {
    /// Entries matching `column`/`value`, each session immediately followed
    /// by its subsessions, in output order.
    ///
    /// The column must already be validated; no query runs before that.
    pub fn collect(table: &AgendaTable, column: Column, value: &str) -> AppResult<Vec<AgendaEntry>> {
        let mut out = Vec::new();
        Self::expand(table, &Filter::for_lookup(column, value), &mut out)?;
        Ok(out)
    }

    /// Depth is bounded: only sessions expand, and subsessions are never
    /// flagged as sessions.
    fn expand(table: &AgendaTable, filter: &Filter, out: &mut Vec<AgendaEntry>) -> AppResult<()> {
        for entry in table.select(filter)? {
            let children = entry.is_session().then(|| Filter::ChildrenOf(entry.id));
            out.push(entry);

            if let Some(children) = children {
                Self::expand(table, &children, out)?;
            }
        }
        Ok(())
    }
}
