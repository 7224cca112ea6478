//! Seeded catalogs
//!
//! The mission, user, fandom, and meetup catalogs the store starts with.
//! Missions and fandoms never change shape at runtime; users and meetups
//! are mutated through the store's contracts.

use crate::types::{
    Fandom, Meetup, MeetupStatus, Mission, MissionCategory, MissionStatus, User,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

pub fn seed_missions() -> Vec<Mission> {
    vec![
        Mission {
            id: "m1".into(),
            title: "Share on Twitter".into(),
            description: "Share our latest post on Twitter and tag us".into(),
            image_url: "https://images.unsplash.com/photo-1611605698335-8b1569810432?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80".into(),
            reward: 50,
            category: MissionCategory::Social,
            completed_by: vec!["u1".into(), "u3".into()],
            status: MissionStatus::Active,
            created_at: day(2025, 3, 15),
            expires_at: Some(day(2025, 5, 15)),
        },
        Mission {
            id: "m2".into(),
            title: "Attend Virtual Concert".into(),
            description: "Join our virtual concert and check in with your wallet".into(),
            image_url: "https://images.unsplash.com/photo-1501281668745-f7f57925c3b4?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80".into(),
            reward: 100,
            category: MissionCategory::Event,
            completed_by: vec!["u2".into()],
            status: MissionStatus::Active,
            created_at: day(2025, 3, 20),
            expires_at: Some(day(2025, 4, 1)),
        },
        Mission {
            id: "m3".into(),
            title: "Create Fan Art".into(),
            description: "Create and share fan art on Instagram with our hashtag".into(),
            image_url: "https://images.unsplash.com/photo-1579762715118-a6f1d4b934f1?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80".into(),
            reward: 75,
            category: MissionCategory::Content,
            completed_by: vec!["u1".into()],
            status: MissionStatus::Active,
            created_at: day(2025, 3, 10),
            expires_at: None,
        },
        Mission {
            id: "m4".into(),
            title: "Distribute Posters".into(),
            description: "Print posters and distribute them in your neighborhood".into(),
            image_url: "https://images.unsplash.com/photo-1588497859490-85d1c17db96d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80".into(),
            reward: 150,
            category: MissionCategory::Referral,
            completed_by: vec![],
            status: MissionStatus::Active,
            created_at: day(2025, 3, 18),
            expires_at: Some(day(2025, 6, 18)),
        },
        Mission {
            id: "m5".into(),
            title: "Join Discord Community".into(),
            description: "Join our Discord server and introduce yourself".into(),
            image_url: "https://images.unsplash.com/photo-1614680376408-81e91ffe3db7?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80".into(),
            reward: 25,
            category: MissionCategory::Social,
            completed_by: vec!["u1".into(), "u2".into(), "u3".into()],
            status: MissionStatus::Active,
            created_at: day(2025, 2, 1),
            expires_at: None,
        },
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            address: "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY".into(),
            name: "Alice".into(),
            vibe_points: 250,
            completed_missions: vec!["m1".into(), "m3".into(), "m5".into()],
            referral_count: 5,
            referral_code: "ALICE2025".into(),
            joined_at: day(2025, 1, 15),
            is_admin: false,
        },
        User {
            id: "u2".into(),
            address: "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty".into(),
            name: "Bob".into(),
            vibe_points: 125,
            completed_missions: vec!["m2".into(), "m5".into()],
            referral_count: 2,
            referral_code: "BOB2025".into(),
            joined_at: day(2025, 2, 10),
            is_admin: false,
        },
        User {
            id: "u3".into(),
            address: "5FLSigC9HGRKVhB9FiEo4Y3koPsNmBmLJbpXg2mp1hXcS59Y".into(),
            name: "Charlie".into(),
            vibe_points: 75,
            completed_missions: vec!["m1".into(), "m5".into()],
            referral_count: 1,
            referral_code: "CHARLIE2025".into(),
            joined_at: day(2025, 3, 1),
            is_admin: false,
        },
        User {
            id: "u4".into(),
            address: "5DAAnrj7VHTznn2AWBemMuyBwZWs6FNFjdyVXUeYum3PTXFy".into(),
            name: "Admin".into(),
            vibe_points: 0,
            completed_missions: vec![],
            referral_count: 0,
            referral_code: "ADMIN2025".into(),
            joined_at: day(2025, 1, 1),
            is_admin: true,
        },
    ]
}

pub fn seed_fandoms() -> Vec<Fandom> {
    [
        ("BeyHive", "BeyHive", "Beyoncé"),
        ("Swifties", "Swifties", "Taylor Swift"),
        ("ARMY", "ARMY", "BTS"),
        ("Barbz", "Barbz", "Nicki Minaj"),
        ("Little Monsters", "Little Monsters", "Lady Gaga"),
        ("Navy", "Navy", "Rihanna"),
        ("Arianators", "Arianators", "Ariana Grande"),
        ("Beliebers", "Beliebers", "Justin Bieber"),
        ("Directioners", "Directioners", "One Direction"),
        ("KatyCats", "KatyCats", "Katy Perry"),
    ]
    .into_iter()
    .map(|(name, fanbase, artist)| Fandom {
        name: name.into(),
        fanbase: fanbase.into(),
        artist: artist.into(),
    })
    .collect()
}

pub fn seed_meetups() -> Vec<Meetup> {
    vec![
        Meetup {
            id: "1".into(),
            title: "BeyHive New Album Listening Party".into(),
            description: "Join fellow BeyHive members for an exclusive listening party of Beyoncé's latest album. Food and drinks provided!".into(),
            location: "Studio 55, Los Angeles".into(),
            date: date(2025, 5, 15),
            fandom: "BeyHive".into(),
            organizer: "bee_queen_324".into(),
            staking_goal: 500,
            current_staked: 350,
            participants: 24,
            status: MeetupStatus::Upcoming,
        },
        Meetup {
            id: "2".into(),
            title: "30BG Lagos Meetup".into(),
            description: "Meet other 30BG fans in Lagos for a day of music, games, and community. Special Davido merch giveaways!".into(),
            location: "Landmark Beach, Lagos".into(),
            date: date(2025, 5, 10),
            fandom: "30BG".into(),
            organizer: "davido_stan".into(),
            staking_goal: 300,
            current_staked: 300,
            participants: 42,
            status: MeetupStatus::Active,
        },
        Meetup {
            id: "3".into(),
            title: "Swifties Friendship Bracelet Exchange".into(),
            description: "Exchange friendship bracelets with fellow Swifties and discuss theories about Taylor's next album.".into(),
            location: "Central Park, New York".into(),
            date: date(2025, 6, 20),
            fandom: "Swifties".into(),
            organizer: "ts_enchanted".into(),
            staking_goal: 250,
            current_staked: 180,
            participants: 35,
            status: MeetupStatus::Upcoming,
        },
    ]
}
