use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::domain::sheets::ranges;

/// One normalized catalog row.
///
/// Fields are declared in alphabetical order so the serialized form always
/// reads `category`, `director`, `title` regardless of the source header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: String,
    pub director: String,
    pub title: String,
}

impl CatalogEntry {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            director: director.into(),
            title: title.into(),
        }
    }
}

/// The lists exported on every run, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CatalogList {
    Collection,
    Wantlist,
}

impl CatalogList {
    pub fn range(&self) -> &'static str {
        match &self {
            CatalogList::Collection => ranges::collection::RO_ENTRIES,
            CatalogList::Wantlist => ranges::wantlist::RO_ENTRIES,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self)
    }
}
