//! Paginated location-area listing

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of `/location-area`.
///
/// `next` and `previous` are `None` when the server sends `null`, i.e. on
/// the last and first page respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl LocationPage {
    /// Area names in server order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}
