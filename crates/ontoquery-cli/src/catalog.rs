use anyhow::Result;
use clap::Parser;
use ontoquery::Db;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct CatalogCommand {}

impl CatalogCommand {
    pub(crate) fn run(self, db: &Db, out: &mut impl Write) -> Result<()> {
        let catalog = db.catalog();

        for (name, table) in catalog.tables() {
            let mapping = table.mapping();
            writeln!(
                out,
                "{name}\t{}\t{}\t{}",
                mapping.connection_id,
                table.kind(),
                mapping.table
            )?;
        }

        for (id, err) in catalog.failures() {
            writeln!(out, "unavailable\t{id}\t{err}")?;
        }

        Ok(())
    }
}
