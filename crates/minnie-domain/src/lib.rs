//! Minniemissions Domain - records, seeded catalogs, and the store that
//! owns every mutation rule
//!
//! The collections live behind a single [`Store`] service object; callers
//! only see the query/mutation contracts, never the collections
//! themselves.

pub mod catalog;
pub mod contact;
pub mod profile;
pub mod referral;
pub mod store;
pub mod types;

pub use contact::ContactSubmission;
pub use profile::{Profile, ProfileUpdate};
pub use referral::{referral_url, ReferralScan, REFERRAL_BONUS};
pub use store::{CompletionReceipt, Store};
pub use types::*;
