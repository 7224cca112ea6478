//! Route handlers, one module per resource

pub mod contact;
pub mod fandoms;
pub mod meetups;
pub mod missions;
pub mod profiles;
pub mod referral;
pub mod session;
pub mod users;
