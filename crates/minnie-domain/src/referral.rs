//! Referral tracking
//!
//! A QR scan records an event against the referrer without touching
//! referral counts. Crediting happens later, on the referred user's
//! first mission completion, once per referred user.

use chrono::{DateTime, Utc};
use minnie_core::{MissionId, UserId};
use serde::{Deserialize, Serialize};

/// Points credited to a referrer when their referred user completes a
/// first mission.
pub const REFERRAL_BONUS: u64 = 25;

/// One recorded QR scan against a referrer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralScan {
    pub referrer: UserId,
    pub mission: Option<MissionId>,
    pub scanned_at: DateTime<Utc>,
}

/// The URL embedded in a referral QR code:
/// `<origin>/qr/<userId>` or `<origin>/qr/<userId>/<missionId>`.
pub fn referral_url(origin: &str, user: &UserId, mission: Option<&MissionId>) -> String {
    match mission {
        Some(m) => format!("{}/qr/{}/{}", origin, user, m),
        None => format!("{}/qr/{}", origin, user),
    }
}
