//! Fixed-rate point conversion
//!
//! Vibe Points convert to one of two chain currencies at rates pinned
//! at compile time.

use serde::{Deserialize, Serialize};

/// DOT per Vibe Point.
pub const RATE_DOT: f64 = 0.1;

/// KSM per Vibe Point.
pub const RATE_KSM: f64 = 0.025;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Dot,
    Ksm,
}

impl Currency {
    pub fn rate(&self) -> f64 {
        match self {
            Self::Dot => RATE_DOT,
            Self::Ksm => RATE_KSM,
        }
    }

    pub fn ticker(&self) -> &'static str {
        match self {
            Self::Dot => "DOT",
            Self::Ksm => "KSM",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ticker())
    }
}

/// Output quantity for a validated conversion: amount times the fixed
/// rate of the chosen currency.
pub fn output_amount(amount: u64, currency: Currency) -> f64 {
    amount as f64 * currency.rate()
}
