mod value;
pub(crate) use value::Value;

use ontoquery_core::{
    async_trait,
    driver::{Driver, Rows},
    stmt, Error, Result,
};
use percent_encoding::percent_decode_str;
use rusqlite::{Connection as RusqliteConnection, OpenFlags};
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:<path>` or `sqlite::memory:`
    /// connection URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        match url.path() {
            "" => Err(Error::invalid_connection_url(format!(
                "missing database path in connection URL; url={url_str}"
            ))),
            ":memory:" => Ok(Self::InMemory),
            path => {
                let path = percent_decode_str(path).decode_utf8().map_err(|_| {
                    Error::invalid_connection_url(format!(
                        "database path is not valid UTF-8; url={url_str}"
                    ))
                })?;
                Ok(Self::File(PathBuf::from(&*path)))
            }
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open an existing SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn connect(&self) -> Result<Box<dyn ontoquery_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    /// Opens an existing database file. A missing file is an error rather
    /// than an empty database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let connection = RusqliteConnection::open_with_flags(path, flags)
            .map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

impl From<RusqliteConnection> for Connection {
    fn from(connection: RusqliteConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl ontoquery_core::driver::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();
        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = Rows::new(columns);

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                items.push(Value::from_sql(row, index)?.into_inner());
            }

            ret.push(items);
        }

        Ok(ret)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, err)| Error::driver_operation_failed(err))
    }
}
