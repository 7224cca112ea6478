//! Wallet session state machine
//!
//! Disconnected -> Connecting -> Connected, and back to Disconnected on
//! disconnect. The balance is session-held: it is seeded by the ledger
//! at connect time and lives only as long as the session.

use crate::convert::{output_amount, Currency};
use crate::ledger::LedgerClient;
use dashmap::DashMap;
use minnie_core::{AccountId, Error, MeetupId, Result, SessionId};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Debug)]
struct WalletSession {
    state: SessionState,
    account: Option<AccountId>,
    vibe_points: u64,
    verified: bool,
}

impl WalletSession {
    fn connecting() -> Self {
        Self {
            state: SessionState::Connecting,
            account: None,
            vibe_points: 0,
            verified: false,
        }
    }

    fn clear(&mut self) {
        self.state = SessionState::Disconnected;
        self.account = None;
        self.vibe_points = 0;
        self.verified = false;
    }

    fn connected_account(&self) -> Result<AccountId> {
        match (&self.state, &self.account) {
            (SessionState::Connected, Some(account)) => Ok(account.clone()),
            _ => Err(Error::NotConnected),
        }
    }
}

/// Point-in-time view of a session, safe to hand to the wire.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub state: SessionState,
    pub account: Option<AccountId>,
    pub vibe_points: u64,
    pub verified: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReceipt {
    pub debited: u64,
    pub currency: Currency,
    pub output: f64,
    pub new_balance: u64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeReceipt {
    pub meetup: MeetupId,
    pub staked: u64,
    pub new_balance: u64,
}

/// Registry of wallet sessions, one per connect.
pub struct SessionManager {
    ledger: Arc<dyn LedgerClient>,
    sessions: DashMap<SessionId, Arc<RwLock<WalletSession>>>,
}

impl SessionManager {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self {
            ledger,
            sessions: DashMap::new(),
        }
    }

    fn session(&self, id: &SessionId) -> Result<Arc<RwLock<WalletSession>>> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found("session", id.as_str()))
    }

    /// Attempt to acquire a wallet account. On failure the session is
    /// discarded and the categorized error surfaces for user display.
    pub async fn connect(&self) -> Result<SessionSnapshot> {
        let id = SessionId::generate();
        let session = Arc::new(RwLock::new(WalletSession::connecting()));
        self.sessions.insert(id.clone(), session.clone());

        match self.ledger.fetch_account().await {
            Ok(account) => {
                let mut lock = session.write().await;
                lock.state = SessionState::Connected;
                lock.account = Some(account.address.clone());
                lock.vibe_points = account.initial_balance;
                info!(
                    "session {} connected as {} ({} VP)",
                    id, account.address, account.initial_balance
                );
                Ok(snapshot_of(&id, &lock))
            }
            Err(e) => {
                self.sessions.remove(&id);
                warn!("wallet connect failed: {}", e);
                Err(e)
            }
        }
    }

    /// Unconditionally clear the session back to Disconnected.
    pub async fn disconnect(&self, id: &SessionId) -> Result<SessionSnapshot> {
        let session = self.session(id)?;
        let mut lock = session.write().await;
        lock.clear();
        info!("session {} disconnected", id);
        Ok(snapshot_of(id, &lock))
    }

    pub async fn snapshot(&self, id: &SessionId) -> Result<SessionSnapshot> {
        let session = self.session(id)?;
        let lock = session.read().await;
        Ok(snapshot_of(id, &lock))
    }

    pub async fn balance(&self, id: &SessionId) -> Result<u64> {
        let session = self.session(id)?;
        Ok(session.read().await.vibe_points)
    }

    /// Run the simulated identity-verification step and persist the
    /// flag for the session lifetime only.
    pub async fn verify(&self, id: &SessionId) -> Result<SessionSnapshot> {
        let session = self.session(id)?;
        let account = session.read().await.connected_account()?;

        self.ledger.verify_identity(&account).await?;

        let mut lock = session.write().await;
        lock.verified = true;
        Ok(snapshot_of(id, &lock))
    }

    pub async fn is_verified(&self, id: &SessionId) -> Result<bool> {
        let session = self.session(id)?;
        Ok(session.read().await.verified)
    }

    /// Convert points into a chain currency at its fixed rate. The
    /// balance is debited only after the ledger confirms.
    pub async fn convert(
        &self,
        id: &SessionId,
        amount: u64,
        currency: Currency,
    ) -> Result<ConversionReceipt> {
        let session = self.session(id)?;
        let account = {
            let lock = session.read().await;
            let account = lock.connected_account()?;
            if amount == 0 {
                return Err(Error::validation("conversion amount must be positive"));
            }
            if amount > lock.vibe_points {
                return Err(Error::InsufficientBalance {
                    available: lock.vibe_points,
                    requested: amount,
                });
            }
            account
        };

        self.ledger.confirm_conversion(&account, amount, currency).await?;

        let mut lock = session.write().await;
        // Revalidate across the suspend point: mutate once or not at all.
        lock.connected_account()?;
        if amount > lock.vibe_points {
            return Err(Error::InsufficientBalance {
                available: lock.vibe_points,
                requested: amount,
            });
        }
        lock.vibe_points -= amount;
        let receipt = ConversionReceipt {
            debited: amount,
            currency,
            output: output_amount(amount, currency),
            new_balance: lock.vibe_points,
        };
        info!(
            "session {} converted {} VP to {:.4} {}",
            id, amount, receipt.output, currency
        );
        Ok(receipt)
    }

    /// Debit a stake from the session balance after the ledger confirms
    /// it. The meetup-side bookkeeping happens in the domain store.
    pub async fn debit_stake(
        &self,
        id: &SessionId,
        meetup: &MeetupId,
        amount: u64,
    ) -> Result<StakeReceipt> {
        let session = self.session(id)?;
        let account = {
            let lock = session.read().await;
            let account = lock.connected_account()?;
            if amount == 0 {
                return Err(Error::validation("stake amount must be positive"));
            }
            if amount > lock.vibe_points {
                return Err(Error::InsufficientBalance {
                    available: lock.vibe_points,
                    requested: amount,
                });
            }
            account
        };

        self.ledger.confirm_stake(&account, meetup, amount).await?;

        let mut lock = session.write().await;
        lock.connected_account()?;
        if amount > lock.vibe_points {
            return Err(Error::InsufficientBalance {
                available: lock.vibe_points,
                requested: amount,
            });
        }
        lock.vibe_points -= amount;
        info!("session {} staked {} VP on meetup {}", id, amount, meetup);
        Ok(StakeReceipt {
            meetup: meetup.clone(),
            staked: amount,
            new_balance: lock.vibe_points,
        })
    }
}

fn snapshot_of(id: &SessionId, session: &WalletSession) -> SessionSnapshot {
    SessionSnapshot {
        session_id: id.clone(),
        state: session.state,
        account: session.account.clone(),
        vibe_points: session.vibe_points,
        verified: session.verified,
    }
}
