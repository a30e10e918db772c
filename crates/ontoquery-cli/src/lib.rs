mod catalog;
mod explain;
mod run;

use anyhow::{Context, Result};
use clap::Parser;
use ontoquery::{Db, OntologyQuery, Schema};
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Query object types of an ontology schema against their data sources
#[derive(Parser, Debug)]
#[command(name = "ontoquery")]
#[command(version)]
pub struct Cli {
    /// Path to the schema configuration (JSON)
    #[arg(long, short, env = "ONTOQUERY_SCHEMA")]
    schema: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the SQL a query runs as, with literals inlined
    Explain(explain::ExplainCommand),

    /// Run a query and print its rows as JSON
    Run(run::RunCommand),

    /// List the queryable object types and the unavailable data sources
    Catalog(catalog::CatalogCommand),
}

impl Cli {
    /// Loads the schema, connects to its data sources and runs the command,
    /// writing its output to `out`.
    pub async fn run(self, out: &mut impl Write) -> Result<()> {
        let schema = Schema::from_path(&self.schema)
            .with_context(|| format!("loading schema from `{}`", self.schema.display()))?;

        let db = Db::connect(schema).await;

        let ret = match self.command {
            Command::Explain(cmd) => cmd.run(&db, out),
            Command::Run(cmd) => cmd.run(&db, out).await,
            Command::Catalog(cmd) => cmd.run(&db, out),
        };

        db.close().await;
        ret
    }
}

/// Reads a query from `path`, or from stdin when it is `-`.
fn read_query(path: &Path) -> Result<OntologyQuery> {
    let src = if path == Path::new("-") {
        let mut src = String::new();
        std::io::stdin()
            .read_to_string(&mut src)
            .context("reading query from stdin")?;
        src
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading query from `{}`", path.display()))?
    };

    Ok(OntologyQuery::from_json(&src)?)
}
