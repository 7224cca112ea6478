//! The store - single owner of the in-memory domain collections
//!
//! Every query and mutation rule lives here. Collections sit behind
//! `RwLock`s so handlers can share one `Store` across tasks; each
//! mutation acquires its locks, applies atomically, and releases -
//! there is no cross-call transaction discipline.

use crate::catalog;
use crate::contact::ContactSubmission;
use crate::profile::{self, Profile, ProfileUpdate};
use crate::referral::{ReferralScan, REFERRAL_BONUS};
use crate::types::{
    Fandom, Meetup, MeetupDraft, MeetupStatus, Mission, MissionStatus, User,
    FEATURED_MISSION_COUNT, INITIAL_MEETUP_STAKE, MIN_STAKING_GOAL,
};
use chrono::Utc;
use minnie_core::{AccountId, Error, MeetupId, MissionId, Result, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Outcome of a successful mission completion.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReceipt {
    pub reward: u64,
    pub new_balance: u64,
    /// Referrer credited by this completion, if it was the user's first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_credited: Option<UserId>,
}

pub struct Store {
    missions: RwLock<Vec<Mission>>,
    users: RwLock<Vec<User>>,
    fandoms: Vec<Fandom>,
    meetups: RwLock<Vec<Meetup>>,
    scans: RwLock<Vec<ReferralScan>>,
    /// referred user -> referrer, consumed on first completion
    pending_referrals: RwLock<HashMap<UserId, UserId>>,
    profiles: RwLock<HashMap<AccountId, Profile>>,
    submissions: RwLock<Vec<ContactSubmission>>,
}

impl Store {
    pub fn new(
        missions: Vec<Mission>,
        users: Vec<User>,
        fandoms: Vec<Fandom>,
        meetups: Vec<Meetup>,
    ) -> Self {
        Self {
            missions: RwLock::new(missions),
            users: RwLock::new(users),
            fandoms,
            meetups: RwLock::new(meetups),
            scans: RwLock::new(Vec::new()),
            pending_referrals: RwLock::new(HashMap::new()),
            profiles: RwLock::new(HashMap::new()),
            submissions: RwLock::new(Vec::new()),
        }
    }

    /// Store loaded with the standard catalogs.
    pub fn seeded() -> Self {
        Self::new(
            catalog::seed_missions(),
            catalog::seed_users(),
            catalog::seed_fandoms(),
            catalog::seed_meetups(),
        )
    }

    // -----------------------------------------------------------------
    // Mission queries
    // -----------------------------------------------------------------

    pub async fn missions(&self) -> Vec<Mission> {
        self.missions.read().await.clone()
    }

    pub async fn mission(&self, id: &MissionId) -> Option<Mission> {
        self.missions.read().await.iter().find(|m| &m.id == id).cloned()
    }

    /// All missions whose status is ACTIVE, in catalog order.
    pub async fn active_missions(&self) -> Vec<Mission> {
        self.missions
            .read()
            .await
            .iter()
            .filter(|m| m.status == MissionStatus::Active)
            .cloned()
            .collect()
    }

    /// First slice of the active list; simple slicing, not a ranking.
    pub async fn featured_missions(&self) -> Vec<Mission> {
        let mut active = self.active_missions().await;
        active.truncate(FEATURED_MISSION_COUNT);
        active
    }

    /// Missions relevant to a user: everything they completed plus
    /// everything currently active. Unknown user yields an empty list.
    ///
    /// Lock order is missions then users, same as `complete_mission`.
    pub async fn user_missions(&self, user_id: &UserId) -> Vec<Mission> {
        let missions = self.missions.read().await;
        let users = self.users.read().await;
        let Some(user) = users.iter().find(|u| &u.id == user_id) else {
            return Vec::new();
        };
        missions
            .iter()
            .filter(|m| {
                user.completed_missions.contains(&m.id) || m.status == MissionStatus::Active
            })
            .cloned()
            .collect()
    }

    // -----------------------------------------------------------------
    // User queries
    // -----------------------------------------------------------------

    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn user(&self, id: &UserId) -> Option<User> {
        self.users.read().await.iter().find(|u| &u.id == id).cloned()
    }

    pub async fn user_by_address(&self, address: &AccountId) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| &u.address == address)
            .cloned()
    }

    /// Non-admin users ordered by descending point balance. Ties keep
    /// the underlying collection order (stable sort).
    pub async fn leaderboard(&self) -> Vec<User> {
        let mut board: Vec<User> = self
            .users
            .read()
            .await
            .iter()
            .filter(|u| !u.is_admin)
            .cloned()
            .collect();
        board.sort_by(|a, b| b.vibe_points.cmp(&a.vibe_points));
        board
    }

    /// Look up a user record for a wallet address, creating one on first
    /// connection. `referred_by` attributes the signup to a referrer;
    /// crediting waits for the user's first mission completion.
    pub async fn register_user(
        &self,
        name: &str,
        address: &AccountId,
        referred_by: Option<&UserId>,
    ) -> Result<User> {
        let mut users = self.users.write().await;
        if let Some(existing) = users.iter().find(|u| &u.address == address) {
            return Ok(existing.clone());
        }

        let joined_at = Utc::now();
        let user = User {
            id: UserId::new(uuid::Uuid::new_v4().to_string()),
            address: address.clone(),
            name: name.to_string(),
            vibe_points: 0,
            completed_missions: Vec::new(),
            referral_count: 0,
            referral_code: format!(
                "{}{}",
                name.to_uppercase().replace(' ', ""),
                joined_at.format("%Y")
            ),
            joined_at,
            is_admin: false,
        };
        let referrer_exists =
            referred_by.map(|r| users.iter().any(|u| &u.id == r)).unwrap_or(false);
        users.push(user.clone());
        drop(users);

        if let (Some(referrer), true) = (referred_by, referrer_exists) {
            self.pending_referrals
                .write()
                .await
                .insert(user.id.clone(), referrer.clone());
            info!("user {} joined via referral from {}", user.id, referrer);
        } else {
            info!("user {} joined", user.id);
        }
        Ok(user)
    }

    // -----------------------------------------------------------------
    // Mission completion
    // -----------------------------------------------------------------

    /// Credit a mission to a user. Idempotent per (user, mission): the
    /// second call fails without touching balances. Expired missions
    /// are rejected. The first completion of a referred user also
    /// credits the referrer.
    pub async fn complete_mission(
        &self,
        user_id: &UserId,
        mission_id: &MissionId,
    ) -> Result<CompletionReceipt> {
        let mut missions = self.missions.write().await;
        let mut users = self.users.write().await;

        let mission = missions
            .iter_mut()
            .find(|m| &m.id == mission_id)
            .ok_or_else(|| Error::not_found("mission", mission_id.as_str()))?;
        let user_idx = users
            .iter()
            .position(|u| &u.id == user_id)
            .ok_or_else(|| Error::not_found("user", user_id.as_str()))?;

        if users[user_idx].completed_missions.contains(mission_id) {
            return Err(Error::validation("mission already completed"));
        }
        if mission.is_expired_at(Utc::now()) {
            return Err(Error::validation("mission has expired"));
        }

        users[user_idx].completed_missions.push(mission_id.clone());
        users[user_idx].vibe_points += mission.reward;
        mission.completed_by.push(user_id.clone());

        let reward = mission.reward;
        let new_balance = users[user_idx].vibe_points;
        let first_completion = users[user_idx].completed_missions.len() == 1;
        info!(
            "mission {} completed by {} (+{} VP, balance {})",
            mission_id, user_id, reward, new_balance
        );

        let mut referral_credited = None;
        if first_completion {
            if let Some(referrer_id) = self.pending_referrals.write().await.remove(user_id) {
                if let Some(referrer) = users.iter_mut().find(|u| u.id == referrer_id) {
                    referrer.vibe_points += REFERRAL_BONUS;
                    referrer.referral_count += 1;
                    info!(
                        "referral credited: {} +{} VP for referring {}",
                        referrer_id, REFERRAL_BONUS, user_id
                    );
                    referral_credited = Some(referrer_id);
                }
            }
        }

        Ok(CompletionReceipt {
            reward,
            new_balance,
            referral_credited,
        })
    }

    // -----------------------------------------------------------------
    // Referral scans
    // -----------------------------------------------------------------

    /// Record a QR scan against a referrer. Reports failure for an
    /// unknown referrer and never mutates referral counts.
    pub async fn record_referral_scan(
        &self,
        referrer: &UserId,
        mission: Option<MissionId>,
    ) -> Result<ReferralScan> {
        if self.user(referrer).await.is_none() {
            return Err(Error::not_found("user", referrer.as_str()));
        }
        let scan = ReferralScan {
            referrer: referrer.clone(),
            mission,
            scanned_at: Utc::now(),
        };
        debug!("qr scan recorded for {}", referrer);
        self.scans.write().await.push(scan.clone());
        Ok(scan)
    }

    pub async fn referral_scans(&self) -> Vec<ReferralScan> {
        self.scans.read().await.clone()
    }

    // -----------------------------------------------------------------
    // Fandoms
    // -----------------------------------------------------------------

    pub fn fandoms(&self) -> &[Fandom] {
        &self.fandoms
    }

    pub fn fandom(&self, name: &str) -> Option<&Fandom> {
        self.fandoms.iter().find(|f| f.name == name)
    }

    // -----------------------------------------------------------------
    // Meetups
    // -----------------------------------------------------------------

    pub async fn meetups(&self) -> Vec<Meetup> {
        self.meetups.read().await.clone()
    }

    pub async fn meetup(&self, id: &MeetupId) -> Option<Meetup> {
        self.meetups.read().await.iter().find(|m| &m.id == id).cloned()
    }

    /// Insert a new meetup from a verified organizer. The organizer
    /// contributes the fixed opening stake and counts as the first
    /// participant; newest meetups list first.
    pub async fn create_meetup(&self, draft: MeetupDraft, organizer: &str) -> Result<Meetup> {
        if draft.title.trim().is_empty() {
            return Err(Error::validation("meetup title is required"));
        }
        if draft.fandom.trim().is_empty() {
            return Err(Error::validation("meetup fandom is required"));
        }
        if draft.location.trim().is_empty() {
            return Err(Error::validation("meetup location is required"));
        }
        if draft.staking_goal < MIN_STAKING_GOAL {
            return Err(Error::validation(format!(
                "staking goal must be at least {} VP",
                MIN_STAKING_GOAL
            )));
        }

        let meetup = Meetup {
            id: MeetupId::generate(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            date: draft.date,
            fandom: draft.fandom,
            organizer: organizer.to_string(),
            staking_goal: draft.staking_goal,
            current_staked: INITIAL_MEETUP_STAKE,
            participants: 1,
            status: MeetupStatus::Upcoming,
        };
        info!("meetup {} created by {}", meetup.id, organizer);
        self.meetups.write().await.insert(0, meetup.clone());
        Ok(meetup)
    }

    /// Apply a confirmed stake to a meetup: grow the pool and count one
    /// more participant (repeat staking by one user counts again).
    /// Status is never recomputed here.
    pub async fn commit_stake(&self, meetup_id: &MeetupId, amount: u64) -> Result<Meetup> {
        if amount == 0 {
            return Err(Error::validation("stake amount must be positive"));
        }
        let mut meetups = self.meetups.write().await;
        let meetup = meetups
            .iter_mut()
            .find(|m| &m.id == meetup_id)
            .ok_or_else(|| Error::not_found("meetup", meetup_id.as_str()))?;
        if meetup.status == MeetupStatus::Completed {
            return Err(Error::validation("meetup is already completed"));
        }

        meetup.current_staked += amount;
        meetup.participants += 1;
        info!(
            "stake of {} VP committed to meetup {} ({}/{} VP)",
            amount, meetup_id, meetup.current_staked, meetup.staking_goal
        );
        Ok(meetup.clone())
    }

    // -----------------------------------------------------------------
    // Profiles
    // -----------------------------------------------------------------

    pub async fn profile(&self, account: &AccountId) -> Profile {
        self.profiles.read().await.get(account).cloned().unwrap_or_default()
    }

    pub async fn update_profile(&self, account: &AccountId, update: ProfileUpdate) -> Profile {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.entry(account.clone()).or_default();
        profile.apply(update);
        profile.clone()
    }

    /// Accept an avatar upload after content-type and size checks; only
    /// the resulting reference is kept.
    pub async fn set_avatar(
        &self,
        account: &AccountId,
        content_type: &str,
        size: usize,
    ) -> Result<String> {
        profile::validate_avatar(content_type, size)?;
        let url = format!(
            "/profile-pictures/{}/{}.{}",
            account,
            uuid::Uuid::new_v4(),
            profile::avatar_extension(content_type)
        );
        let mut profiles = self.profiles.write().await;
        profiles.entry(account.clone()).or_default().avatar_url = Some(url.clone());
        Ok(url)
    }

    // -----------------------------------------------------------------
    // Contact submissions
    // -----------------------------------------------------------------

    /// Validate and append a contact submission. No read path beyond
    /// the full dump used by tests.
    pub async fn submit_contact(&self, submission: ContactSubmission) -> Result<()> {
        submission.validate()?;
        info!("contact submission from {}", submission.email);
        self.submissions.write().await.push(submission);
        Ok(())
    }

    pub async fn contact_submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.read().await.clone()
    }
}
