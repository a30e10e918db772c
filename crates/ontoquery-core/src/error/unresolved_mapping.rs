use super::Error;

/// Error when SQL would have to reference a logical name because no physical
/// name is known for it.
///
/// Raised at render time, either for a whole object type (no configured
/// mapping, or its data source is absent from the catalog) or for a single
/// property without a column mapping.
#[derive(Debug)]
pub(super) struct UnresolvedMapping {
    object_type: Box<str>,
    property: Option<Box<str>>,
}

impl std::error::Error for UnresolvedMapping {}

impl core::fmt::Display for UnresolvedMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.property {
            Some(property) => write!(
                f,
                "property '{}' of object type '{}' has no column mapping",
                property, self.object_type
            ),
            None => write!(
                f,
                "object type '{}' has no configured data source mapping",
                self.object_type
            ),
        }
    }
}

impl Error {
    pub fn unresolved_mapping(object_type: impl Into<String>, property: Option<&str>) -> Error {
        Error::from(super::ErrorKind::UnresolvedMapping(UnresolvedMapping {
            object_type: object_type.into().into(),
            property: property.map(Into::into),
        }))
    }

    pub fn is_unresolved_mapping(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::UnresolvedMapping(_)))
    }
}
