//! Shared DTOs for the client/server boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Default edge length for photos without explicit dimensions.
pub const DEFAULT_PHOTO_SIZE: u32 = 500;

/// Read-only projection of the identity provider's user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Email address the account was registered with.
    pub email: String,
    /// Provider-side account identifier (`localId` for Firebase).
    pub provider_id: String,
}

/// A photo attached to a review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub alt: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_photo_size")]
    pub width: u32,
    #[serde(default = "default_photo_size")]
    pub height: u32,
}

/// A single dining review. Display-only; every field but `id` is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub meal: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

fn default_photo_size() -> u32 {
    DEFAULT_PHOTO_SIZE
}
