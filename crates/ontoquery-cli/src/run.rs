use anyhow::Result;
use clap::Parser;
use ontoquery::Db;
use std::{io::Write, path::PathBuf};

#[derive(Parser, Debug)]
pub struct RunCommand {
    /// Query file (JSON), or `-` for stdin
    query: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl RunCommand {
    pub(crate) async fn run(self, db: &Db, out: &mut impl Write) -> Result<()> {
        let query = super::read_query(&self.query)?;
        let result = db.query(&query).await?;

        tracing::debug!(rows = result.len(), "query complete");

        let json = result.to_json();
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &json)?;
        } else {
            serde_json::to_writer(&mut *out, &json)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
