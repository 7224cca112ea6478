//! Contact form submissions
//!
//! Validation mirrors the public form: short names, malformed emails,
//! and one-line messages are rejected before anything is stored.

use chrono::{DateTime, Utc};
use minnie_core::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub fandom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_team: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().len() < 2 {
            return Err(Error::validation("Name must be at least 2 characters."));
        }
        if !is_plausible_email(&self.email) {
            return Err(Error::validation("Invalid email address."));
        }
        if self.fandom.trim().len() < 2 {
            return Err(Error::validation("Please specify your fandom."));
        }
        if self.message.trim().len() < 10 {
            return Err(Error::validation("Message must be at least 10 characters."));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
