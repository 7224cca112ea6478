//! User profiles keyed by wallet account
//!
//! Avatar uploads are restricted to a small set of image content types
//! under a fixed size ceiling.

use minnie_core::{Error, Result};
use serde::{Deserialize, Serialize};

pub const ALLOWED_AVATAR_TYPES: [&str; 4] =
    ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// 2 MiB ceiling on avatar uploads.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub favorite_artist: Option<String>,
}

/// Partial update; only present fields are applied.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub favorite_artist: Option<String>,
}

impl Profile {
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.display_name {
            self.display_name = Some(name);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(artist) = update.favorite_artist {
            self.favorite_artist = Some(artist);
        }
    }
}

pub fn validate_avatar(content_type: &str, size: usize) -> Result<()> {
    if !ALLOWED_AVATAR_TYPES.contains(&content_type) {
        return Err(Error::validation(format!(
            "unsupported avatar type: {}",
            content_type
        )));
    }
    if size > MAX_AVATAR_BYTES {
        return Err(Error::validation(format!(
            "avatar too large: {} bytes (max {})",
            size, MAX_AVATAR_BYTES
        )));
    }
    Ok(())
}

/// File extension for a validated avatar content type.
pub fn avatar_extension(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}
