mod value;
pub(crate) use value::Value;

use ontoquery_core::{
    async_trait,
    driver::{Driver, Rows},
    stmt, Error, Result,
};
use postgres::types::ToSql;
use tokio_postgres::{Client, Config, NoTls};
use url::Url;

#[derive(Debug)]
pub struct PostgreSQL {
    config: Config,
}

impl PostgreSQL {
    /// Create a PostgreSQL driver from a `postgresql://` (or `postgres://`)
    /// connection URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)?;

        if !matches!(url.scheme(), "postgresql" | "postgres") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `postgresql` scheme; url={url_str}"
            )));
        }

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| {
                Error::invalid_connection_url(format!(
                    "missing host in connection URL; url={url_str}"
                ))
            })?;

        let dbname = url.path().trim_start_matches('/');
        if dbname.is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        for (key, value) in url.query_pairs() {
            match &*key {
                "application_name" => {
                    config.application_name(&*value);
                }
                "options" => {
                    config.options(&*value);
                }
                _ => {}
            }
        }

        Ok(Self { config })
    }

    /// Overrides the user and password of the connection URL.
    pub fn credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        if let Some(username) = username {
            self.config.user(&username);
        }

        if let Some(password) = password {
            self.config.password(password);
        }

        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl From<Config> for PostgreSQL {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Driver for PostgreSQL {
    async fn connect(&self) -> Result<Box<dyn ontoquery_core::Connection>> {
        let (client, connection) = self
            .config
            .connect(NoTls)
            .await
            .map_err(Error::driver_operation_failed)?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::warn!(error = %err, "postgresql connection error");
            }
        });

        Ok(Box::new(Connection::from(client)))
    }
}

#[derive(Debug)]
pub struct Connection {
    client: Client,
}

impl From<Client> for Connection {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ontoquery_core::driver::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        // Preparing first gives the parameter types the server inferred, which
        // the bound values are converted to.
        let statement = self
            .client
            .prepare(sql)
            .await
            .map_err(Error::driver_operation_failed)?;

        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        let rows = self
            .client
            .query(&statement, &args)
            .await
            .map_err(Error::driver_operation_failed)?;

        let mut ret = Rows::new(
            statement
                .columns()
                .iter()
                .map(|column| column.name().to_string())
                .collect(),
        );

        for row in &rows {
            let mut items = Vec::with_capacity(row.len());
            for (index, column) in row.columns().iter().enumerate() {
                items.push(Value::from_sql(row, index, column.type_())?.into_inner());
            }
            ret.push(items);
        }

        Ok(ret)
    }
}
