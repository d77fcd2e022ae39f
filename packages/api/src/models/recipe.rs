//! # Recipe projection from `GET /recipes`
//!
//! [`Recipe`] mirrors the JSON the backend sends for each recipe. Only the
//! fields this client renders or searches are kept. The backend is a document
//! store, so the id arrives as `_id`; plain `id` is accepted too, alone or
//! alongside `_id`. Text and list fields sent as `null` read as empty, so one
//! sparse document does not fail the whole listing.
//!
//! The `author` field is either the author's id or an embedded user document,
//! depending on whether the backend populated it. [`Author`] accepts both, and
//! [`Recipe::is_authored_by`] compares ids regardless of shape.

use serde::{Deserialize, Serialize};
use store::models::{document_id, null_as_default};

/// A recipe as returned by the public listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RecipeWire")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cuisine_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u64>,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeWire {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    cuisine_type: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    views: Option<u64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    likes_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    ingredients: Vec<String>,
    #[serde(default)]
    author: Option<Author>,
}

impl TryFrom<RecipeWire> for Recipe {
    type Error = String;

    fn try_from(wire: RecipeWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document_id(wire.mongo_id, wire.id)?,
            title: wire.title,
            description: wire.description,
            cuisine_type: wire.cuisine_type,
            image: wire.image,
            views: wire.views,
            rating: wire.rating,
            likes_count: wire.likes_count,
            ingredients: wire.ingredients,
            author: wire.author,
        })
    }
}

/// Recipe author: a bare id, or the populated user document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "AuthorWire")]
pub enum Author {
    Id(String),
    Embedded {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        username: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorWire {
    Id(String),
    Embedded {
        #[serde(rename = "_id", default)]
        mongo_id: Option<String>,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        username: Option<String>,
    },
}

impl TryFrom<AuthorWire> for Author {
    type Error = String;

    fn try_from(wire: AuthorWire) -> Result<Self, Self::Error> {
        match wire {
            AuthorWire::Id(id) => Ok(Author::Id(id)),
            AuthorWire::Embedded {
                mongo_id,
                id,
                username,
            } => Ok(Author::Embedded {
                id: document_id(mongo_id, id)?,
                username,
            }),
        }
    }
}

impl Author {
    pub fn id(&self) -> &str {
        match self {
            Author::Id(id) => id,
            Author::Embedded { id, .. } => id,
        }
    }
}

impl Recipe {
    pub fn views(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    pub fn likes(&self) -> u64 {
        self.likes_count.unwrap_or(0)
    }

    /// Whether `user_id` wrote this recipe, whichever way the author is encoded.
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author.as_ref().is_some_and(|a| a.id() == user_id)
    }
}
