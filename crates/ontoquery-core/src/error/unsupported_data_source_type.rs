use super::Error;

/// Error when a data source declares a database kind with no known driver.
///
/// Confined to that data source: the catalog leaves it out and keeps going.
#[derive(Debug)]
pub(super) struct UnsupportedDataSourceType {
    source_id: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnsupportedDataSourceType {}

impl core::fmt::Display for UnsupportedDataSourceType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported data source type `{}` for data source `{}`",
            self.ty, self.source_id
        )
    }
}

impl Error {
    pub fn unsupported_data_source_type(
        source_id: impl Into<String>,
        ty: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedDataSourceType(
            UnsupportedDataSourceType {
                source_id: source_id.into().into(),
                ty: ty.into().into(),
            },
        ))
    }

    pub fn is_unsupported_data_source_type(&self) -> bool {
        self.any_in_chain(|kind| {
            matches!(kind, super::ErrorKind::UnsupportedDataSourceType(_))
        })
    }
}
