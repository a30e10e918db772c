mod value;
pub(crate) use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Opts, OptsBuilder,
};
use ontoquery_core::{
    async_trait,
    driver::{Driver, Rows},
    stmt, Error, Result,
};
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    opts: OptsBuilder,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={url_str}"
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url_str}"
            )));
        }

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let opts = Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        Ok(Self {
            opts: OptsBuilder::from_opts(opts),
        })
    }

    /// Overrides the user and password of the connection URL.
    pub fn credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        if let Some(username) = username {
            self.opts = self.opts.user(Some(username));
        }

        if let Some(password) = password {
            self.opts = self.opts.pass(Some(password));
        }

        self
    }

    pub fn opts(&self) -> Opts {
        Opts::from(self.opts.clone())
    }
}

#[async_trait]
impl Driver for MySQL {
    async fn connect(&self) -> Result<Box<dyn ontoquery_core::Connection>> {
        let conn = Conn::new(self.opts.clone())
            .await
            .map_err(Error::driver_operation_failed)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ontoquery_core::driver::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param.to_value())
            .collect::<Vec<_>>();

        let args = if args.is_empty() {
            mysql_async::Params::Empty
        } else {
            mysql_async::Params::Positional(args)
        };

        let mut result = self
            .conn
            .exec_iter(sql, args)
            .await
            .map_err(Error::driver_operation_failed)?;

        let columns = result
            .columns_ref()
            .iter()
            .map(|column| column.name_str().into_owned())
            .collect();

        let rows: Vec<mysql_async::Row> = result
            .collect_and_drop()
            .await
            .map_err(Error::driver_operation_failed)?;

        let mut ret = Rows::new(columns);

        for mut row in rows {
            let items = (0..row.len())
                .map(|index| {
                    let value = row.take(index).unwrap_or(mysql_async::Value::NULL);
                    Value::from_sql(value).into_inner()
                })
                .collect();
            ret.push(items);
        }

        Ok(ret)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn
            .disconnect()
            .await
            .map_err(Error::driver_operation_failed)
    }
}
