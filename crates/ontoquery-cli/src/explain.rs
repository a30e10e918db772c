use anyhow::Result;
use clap::Parser;
use ontoquery::Db;
use std::{io::Write, path::PathBuf};

#[derive(Parser, Debug)]
pub struct ExplainCommand {
    /// Query file (JSON), or `-` for stdin
    query: PathBuf,

    /// Also print the relational plan
    #[arg(long)]
    plan: bool,
}

impl ExplainCommand {
    pub(crate) fn run(self, db: &Db, out: &mut impl Write) -> Result<()> {
        let query = super::read_query(&self.query)?;

        if self.plan {
            let plan = db.plan(&query)?;
            writeln!(out, "{plan}")?;
        }

        writeln!(out, "{}", db.explain(&query)?)?;
        Ok(())
    }
}
