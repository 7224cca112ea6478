//! Domain records - missions, users, fandoms, meetups
//!
//! Wire casing matches the original JSON payloads: camelCase fields,
//! lowercase enum variants.

use chrono::{DateTime, NaiveDate, Utc};
use minnie_core::{AccountId, MeetupId, MissionId, UserId};
use serde::{Deserialize, Serialize};

/// How many active missions the featured slice shows.
pub const FEATURED_MISSION_COUNT: usize = 3;

/// Organizer's fixed opening stake on a freshly created meetup.
pub const INITIAL_MEETUP_STAKE: u64 = 100;

/// Smallest staking goal a meetup may be created with.
pub const MIN_STAKING_GOAL: u64 = 100;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissionCategory {
    Social,
    Event,
    Content,
    Referral,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Expired,
    Completed,
}

/// A definable task with a fixed point reward.
///
/// Invariants: `reward > 0`; a given user id appears at most once in
/// `completed_by`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub reward: u64,
    pub category: MissionCategory,
    pub completed_by: Vec<UserId>,
    pub status: MissionStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Mission {
    /// A mission with no expiry timestamp never expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|t| t < now).unwrap_or(false)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub address: AccountId,
    pub name: String,
    pub vibe_points: u64,
    pub completed_missions: Vec<MissionId>,
    pub referral_count: u64,
    pub referral_code: String,
    pub joined_at: DateTime<Utc>,
    pub is_admin: bool,
}

/// Static reference lookup, no lifecycle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fandom {
    pub name: String,
    pub fanbase: String,
    pub artist: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeetupStatus {
    Upcoming,
    Active,
    Completed,
}

/// A community-organized, point-funded event.
///
/// `current_staked` only ever grows via stake actions; `status` is set at
/// creation and never recomputed from the staked amount.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meetup {
    pub id: MeetupId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub fandom: String,
    pub organizer: String,
    pub staking_goal: u64,
    pub current_staked: u64,
    pub participants: u64,
    pub status: MeetupStatus,
}

impl Meetup {
    /// Funding progress as a ratio of the goal; reaches exactly 1.0 when
    /// the staked amount meets the goal.
    pub fn progress(&self) -> f64 {
        self.current_staked as f64 / self.staking_goal as f64
    }
}

/// Fields a verified organizer submits to create a meetup.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetupDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub fandom: String,
    pub staking_goal: u64,
}
