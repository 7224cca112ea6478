//! Offline oracle with built-in fandom knowledge
//!
//! Used when no API key is configured. Answers come from a fixed blurb
//! table with a generic fallback, after an optional simulated delay to
//! keep the suspend/resume contract of the live provider.

use crate::provider::{FandomOracle, OracleResult};
use minnie_domain::Fandom;
use std::time::Duration;

const BLURBS: [(&str, &str); 6] = [
    (
        "BeyHive",
        "The BeyHive is the dedicated fanbase of Beyoncé, known for their organization and fierce loyalty. \
         They are passionate about defending Beyoncé's artistry and legacy, often mobilizing on social media. \
         The BeyHive originated around 2011 after Beyoncé's 4 album release and has grown into one of the most powerful fan communities.",
    ),
    (
        "Swifties",
        "Swifties are Taylor Swift's dedicated fanbase, known for their detective skills and attention to details in Taylor's music. \
         They often analyze lyrics, music videos, and social media posts for hidden messages and Easter eggs. \
         Swifties are extremely supportive of Taylor's rerecordings and have helped her break numerous records.",
    ),
    (
        "ARMY",
        "ARMY (Adorable Representative M.C. for Youth) is BTS's global fanbase, known for their digital organization and charity work. \
         They have helped BTS break countless records and are known for their social activism and philanthropic projects. \
         ARMY often coordinates streaming efforts and social media campaigns to support BTS.",
    ),
    (
        "Vibestars",
        "Vibestars are the passionate fans of Dr. Adaku, known for their positive energy and community-focused initiatives. \
         This growing fanbase celebrates wellness, mindfulness, and cultural heritage through music and social engagement. \
         Vibestars often participate in community service and wellness events inspired by Dr. Adaku's teachings.",
    ),
    (
        "30BG",
        "30 Billion Gang (30BG) is Davido's loyal fanbase, named after his catchphrase referencing wealth and success. \
         They are known for their unwavering support and defense of Davido across social media platforms. \
         30BG fans celebrate Davido's charitable works and contributions to Afrobeats' global recognition.",
    ),
    (
        "Wizkid FC",
        "Wizkid FC is the devoted fanbase of Nigerian superstar Wizkid, operating like a football club with fierce loyalty. \
         They've supported Wizkid's evolution from local star to global icon and his pioneering role in Afrobeats. \
         Wizkid FC celebrates his international collaborations and Grammy recognition that have elevated African music.",
    ),
];

pub struct CannedOracle {
    latency: Duration,
}

impl CannedOracle {
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Simulated thinking time before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn blurb(name: &str) -> Option<&'static str> {
        BLURBS
            .iter()
            .find(|(fandom, _)| *fandom == name)
            .map(|(_, text)| *text)
    }
}

impl Default for CannedOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FandomOracle for CannedOracle {
    fn name(&self) -> &str {
        "canned"
    }

    async fn ask(&self, fandom: &Fandom, question: &str) -> OracleResult<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let answer = match Self::blurb(&fandom.name) {
            Some(blurb) => format!(
                "{}\n\nOn your question \"{}\": this answer comes from the offline \
                 knowledge base. Configure a live oracle for a tailored response about {}.",
                blurb, question, fandom.fanbase
            ),
            None => format!(
                "{} are the dedicated fans of {}. They are known for their passion and support.\n\n\
                 On your question \"{}\": this answer comes from the offline knowledge base. \
                 Configure a live oracle for a tailored response about {}.",
                fandom.fanbase, fandom.artist, question, fandom.fanbase
            ),
        };
        Ok(answer)
    }
}
