use std::fmt::{Debug, Display, Formatter};

use serde::Serialize;

use crate::model::mongodb::Id;

/// An API-friendly ID that serialises to a hex string rather than a nested
/// struct. This is needed for any struct that gets serialised into an API
/// *response*. API *requests* carry IDs in the path and parse `Id` directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ApiId(Id);

impl Debug for ApiId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for ApiId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ApiId> for String {
    fn from(id: ApiId) -> Self {
        id.to_string()
    }
}

impl From<Id> for ApiId {
    fn from(id: Id) -> Self {
        Self(id)
    }
}
