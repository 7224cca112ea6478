//! Ledger client - the seam between workflows and the (simulated) chain
//!
//! Each operation is a single suspend point: it either resolves
//! successfully or surfaces a categorized error, and the caller mutates
//! local state only after success. Swapping [`SimulatedLedger`] for a
//! real extension-backed client changes nothing upstream.

use crate::convert::Currency;
use minnie_core::{AccountId, Error, MeetupId, Result};
use rand::Rng;
use std::time::Duration;

/// Account handle returned by a successful connect.
#[derive(Clone, Debug)]
pub struct WalletAccount {
    pub address: AccountId,
    pub initial_balance: u64,
}

#[async_trait::async_trait]
pub trait LedgerClient: Send + Sync {
    fn name(&self) -> &str;

    /// Acquire a wallet account, or report why none is available.
    async fn fetch_account(&self) -> Result<WalletAccount>;

    /// Run the identity-verification flow for an account.
    async fn verify_identity(&self, account: &AccountId) -> Result<()>;

    /// Confirm a stake of `amount` VP toward a meetup.
    async fn confirm_stake(
        &self,
        account: &AccountId,
        meetup: &MeetupId,
        amount: u64,
    ) -> Result<()>;

    /// Confirm a conversion of `amount` VP into `currency`.
    async fn confirm_conversion(
        &self,
        account: &AccountId,
        amount: u64,
        currency: Currency,
    ) -> Result<()>;
}

/// Default simulated account, matching the seeded catalog's Alice.
const MOCK_ACCOUNT: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

/// Upper bound (exclusive) on the balance drawn at connect time.
const MOCK_BALANCE_CEILING: u64 = 1000;

/// In-process stand-in for the wallet extension and chain.
///
/// Every call sleeps for the configured latency, then succeeds - unless
/// the builder removed the extension or its accounts, or armed a
/// confirmation failure.
pub struct SimulatedLedger {
    latency: Duration,
    extension_present: bool,
    accounts: Vec<AccountId>,
    initial_balance: Option<u64>,
    confirm_failure: Option<String>,
}

impl SimulatedLedger {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(1500),
            extension_present: true,
            accounts: vec![AccountId::new(MOCK_ACCOUNT)],
            initial_balance: None,
            confirm_failure: None,
        }
    }

    /// Zero-latency ledger for tests.
    pub fn instant() -> Self {
        Self::new().with_latency(Duration::ZERO)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Simulate a browser with no wallet extension installed.
    pub fn without_extension(mut self) -> Self {
        self.extension_present = false;
        self
    }

    /// Simulate an extension holding no accounts.
    pub fn without_accounts(mut self) -> Self {
        self.accounts.clear();
        self
    }

    /// Pin the balance handed out at connect time instead of drawing
    /// a random one.
    pub fn with_initial_balance(mut self, balance: u64) -> Self {
        self.initial_balance = Some(balance);
        self
    }

    /// Make every stake/conversion confirmation fail with `message`.
    pub fn with_confirm_failure(mut self, message: impl Into<String>) -> Self {
        self.confirm_failure = Some(message.into());
        self
    }

    async fn suspend(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn confirm_outcome(&self) -> Result<()> {
        match &self.confirm_failure {
            Some(message) => Err(Error::ledger(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for SimulatedLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LedgerClient for SimulatedLedger {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn fetch_account(&self) -> Result<WalletAccount> {
        self.suspend().await;
        if !self.extension_present {
            return Err(Error::ExtensionMissing);
        }
        let Some(address) = self.accounts.first() else {
            return Err(Error::NoAccounts);
        };
        let initial_balance = self
            .initial_balance
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..MOCK_BALANCE_CEILING));
        Ok(WalletAccount {
            address: address.clone(),
            initial_balance,
        })
    }

    async fn verify_identity(&self, account: &AccountId) -> Result<()> {
        self.suspend().await;
        tracing::info!("identity verified for {}", account);
        Ok(())
    }

    async fn confirm_stake(
        &self,
        account: &AccountId,
        meetup: &MeetupId,
        amount: u64,
    ) -> Result<()> {
        self.suspend().await;
        tracing::debug!("stake confirmed: {} VP from {} to {}", amount, account, meetup);
        self.confirm_outcome()
    }

    async fn confirm_conversion(
        &self,
        account: &AccountId,
        amount: u64,
        currency: Currency,
    ) -> Result<()> {
        self.suspend().await;
        tracing::debug!("conversion confirmed: {} VP to {} for {}", amount, currency, account);
        self.confirm_outcome()
    }
}
