//! Minniemissions Wallet - session state machine, point conversion, and
//! the ledger client seam
//!
//! Everything that pretends to touch a chain goes through the
//! [`LedgerClient`] trait: one suspend point per operation, full
//! success or no mutation. The simulated implementation can be swapped
//! for a real extension/ledger backend without touching workflow logic.

pub mod convert;
pub mod ledger;
pub mod session;

pub use convert::{output_amount, Currency, RATE_DOT, RATE_KSM};
pub use ledger::{LedgerClient, SimulatedLedger, WalletAccount};
pub use session::{
    ConversionReceipt, SessionManager, SessionSnapshot, SessionState, StakeReceipt,
};
