//! Category Entity
//!
//! A recipe category as listed by the API. Only its name matters to the
//! app: it is the value the catalog filter matches against.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory", default)]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: None,
            description: None,
        }
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.name.clone()
    }
}
