use crate::{Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Connection parameters of one external relational data source.
///
/// A connection URL is either given explicitly through `jdbc_url` or
/// synthesized from `host`, `port`, `database` and `params`. Credentials may
/// be `${NAME}` tokens, which are resolved against the process environment
/// when the connection is opened.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataSourceConfig {
    /// Unique id, referenced by `DataSourceMapping::connection_id`
    pub id: String,

    /// Database kind, as written in the configuration
    #[serde(rename = "type")]
    pub ty: String,

    /// Explicit connection URL. A leading `jdbc:` is ignored.
    #[serde(default, alias = "url")]
    pub jdbc_url: Option<String>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub database: Option<String>,

    /// Extra URL query parameters, appended in declaration order
    #[serde(default)]
    pub params: IndexMap<String, String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Case applied to physical identifiers in generated SQL
    #[serde(default)]
    pub identifier_case: IdentCase,
}

/// Database kinds with a native driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseKind {
    Postgresql,
    Mysql,
    Sqlite,
}

/// How physical identifiers are cased before they are quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentCase {
    #[default]
    Upper,
    Lower,
    Preserve,
}

impl DataSourceConfig {
    pub fn new(id: impl Into<String>, ty: impl Into<String>) -> DataSourceConfig {
        DataSourceConfig {
            id: id.into(),
            ty: ty.into(),
            ..DataSourceConfig::default()
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.jdbc_url = Some(url.into());
        self
    }

    /// Resolves the declared type to a supported database kind.
    pub fn kind(&self) -> Result<DatabaseKind> {
        self.ty
            .parse()
            .map_err(|_| Error::unsupported_data_source_type(&self.id, &self.ty))
    }

    /// Returns the connection URL, synthesizing one when no explicit URL is
    /// configured.
    pub fn connection_url(&self) -> Result<String> {
        if let Some(url) = self.jdbc_url.as_deref().filter(|url| !url.is_empty()) {
            return Ok(url.strip_prefix("jdbc:").unwrap_or(url).to_string());
        }

        let kind = self.kind()?;

        if kind == DatabaseKind::Sqlite {
            return Ok(match self.database.as_deref() {
                Some(path) if !path.is_empty() && path != ":memory:" => format!("sqlite:{path}"),
                _ => "sqlite::memory:".to_string(),
            });
        }

        let Some(host) = self.host.as_deref().filter(|host| !host.is_empty()) else {
            return Err(Error::invalid_connection_url(format!(
                "data source `{}` has neither a url nor a host",
                self.id
            )));
        };

        let port = self.port.unwrap_or(kind.default_port());
        let mut url = format!("{}://{host}:{port}", kind.scheme());

        if let Some(database) = &self.database {
            url.push('/');
            url.push_str(database);
        }

        for (i, (key, value)) in self.params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }

        Ok(url)
    }

    /// Username with `${NAME}` indirection resolved.
    pub fn username(&self) -> Option<String> {
        self.username.as_deref().map(resolve_env)
    }

    /// Password with `${NAME}` indirection resolved.
    pub fn password(&self) -> Option<String> {
        self.password.as_deref().map(resolve_env)
    }
}

impl DatabaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DatabaseKind::Postgresql => "postgresql",
            DatabaseKind::Mysql => "mysql",
            DatabaseKind::Sqlite => "sqlite",
        }
    }

    fn scheme(self) -> &'static str {
        self.as_str()
    }

    fn default_port(self) -> u16 {
        match self {
            DatabaseKind::Postgresql => 5432,
            DatabaseKind::Mysql => 3306,
            DatabaseKind::Sqlite => 0,
        }
    }
}

impl FromStr for DatabaseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match &*s.trim().to_ascii_lowercase() {
            "postgresql" | "postgres" => DatabaseKind::Postgresql,
            "mysql" => DatabaseKind::Mysql,
            "sqlite" => DatabaseKind::Sqlite,
            _ => return Err(crate::err!("unknown database kind `{s}`")),
        })
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IdentCase {
    /// Applies the case convention to a physical identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            IdentCase::Upper => ident.to_uppercase(),
            IdentCase::Lower => ident.to_lowercase(),
            IdentCase::Preserve => ident.to_string(),
        }
    }
}

/// Resolves a `${NAME}` token against the process environment.
///
/// Anything that is not a token, and tokens naming an unset variable, come
/// back unchanged.
pub fn resolve_env(value: &str) -> String {
    resolve_env_with(value, |name| std::env::var(name).ok())
}

/// Like [`resolve_env`], with a caller-supplied variable lookup.
pub fn resolve_env_with(value: &str, lookup: impl FnOnce(&str) -> Option<String>) -> String {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .and_then(lookup)
        .unwrap_or_else(|| value.to_string())
}
