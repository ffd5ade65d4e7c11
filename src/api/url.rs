//! Request path parsing

use thiserror::Error;

use crate::types::RowId;

/// Resource name and primary key addressed by a request path.
///
/// `pk` is `0` when the path names only the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub requested_resource: String,
    pub pk: RowId,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Unrecognised path: {0}")]
    UnknownPath(String),
}

impl ParsedUrl {
    /// Parse `/<resource>[/<id>]`. Any query string is ignored, as are
    /// leading and trailing slashes.
    pub fn parse(path: &str) -> Result<Self, UrlError> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let mut segments = path.trim_matches('/').split('/');

        let requested_resource = segments.next().unwrap_or_default().to_string();
        let pk = match segments.next() {
            None => 0,
            Some(id) => id
                .parse::<RowId>()
                .map_err(|_| UrlError::InvalidId(id.to_string()))?,
        };

        if segments.next().is_some() {
            return Err(UrlError::UnknownPath(path.to_string()));
        }

        Ok(Self {
            requested_resource,
            pk,
        })
    }
}
