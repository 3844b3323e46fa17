//! # Valuation Oracle
//!
//! A cooldown-gated timer component. `perform_check` is the only operation
//! that advances the clock; the valuation and metrics signals read the same
//! window but leave it untouched, so a single elapsed window can serve any
//! number of non-admin valuation calls until the next check resets it.

use crate::requests::OracleRequest;
use serde::{Deserialize, Serialize};
use shared_types::{Account, AppId, AuthenticatedCall, ContractError, LogRecord};
use tracing::{debug, info};

/// Cooldown applied when none has been configured, in seconds (one day).
pub const DEFAULT_CHECK_INTERVAL: u64 = 86_400;

/// Oracle component state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationOracle {
    admin: Account,
    inventory_app: AppId,
    asset_manager_app: AppId,
    last_check_timestamp: u64,
    check_interval: u64,
}

impl ValuationOracle {
    /// Constructs the oracle with the window anchored at deployment time.
    #[must_use]
    pub fn new(admin: Account, genesis_timestamp: u64) -> Self {
        info!(admin = %admin, genesis_timestamp, "valuation oracle initialized");
        Self {
            admin,
            inventory_app: AppId::UNREGISTERED,
            asset_manager_app: AppId::UNREGISTERED,
            last_check_timestamp: genesis_timestamp,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }

    /// Registered inventory-ledger partner id (`UNREGISTERED` until set).
    #[must_use]
    pub fn inventory_app(&self) -> AppId {
        self.inventory_app
    }

    /// Registered asset-registry partner id (`UNREGISTERED` until set).
    #[must_use]
    pub fn asset_manager_app(&self) -> AppId {
        self.asset_manager_app
    }

    /// Timestamp of the last completed check.
    #[must_use]
    pub fn last_check_timestamp(&self) -> u64 {
        self.last_check_timestamp
    }

    /// Current cooldown, in seconds. Always positive.
    #[must_use]
    pub fn check_interval(&self) -> u64 {
        self.check_interval
    }

    /// Earliest timestamp at which the next check becomes due.
    #[must_use]
    pub fn due_at(&self) -> u64 {
        self.last_check_timestamp.saturating_add(self.check_interval)
    }

    fn require_admin(&self, caller: &Account) -> Result<(), ContractError> {
        if *caller == self.admin {
            Ok(())
        } else {
            Err(ContractError::Unauthorized {
                caller: *caller,
                gate: "admin",
            })
        }
    }

    fn window_elapsed(&self, now: u64) -> bool {
        now >= self.due_at()
    }

    /// Admin passes unconditionally; everyone else must wait out the window.
    fn require_admin_or_elapsed(&self, caller: &Account, now: u64) -> Result<(), ContractError> {
        if *caller == self.admin || self.window_elapsed(now) {
            Ok(())
        } else {
            Err(ContractError::Unauthorized {
                caller: *caller,
                gate: "admin-or-elapsed-window",
            })
        }
    }

    /// Applies one decoded request atomically.
    ///
    /// # Errors
    /// `Unauthorized` on a failed gate, `NotYetDue` when `perform_check`
    /// arrives before the window elapses. State is untouched on any error.
    pub fn apply(
        &mut self,
        call: &AuthenticatedCall,
        request: OracleRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        let caller = call.caller;
        let now = call.timestamp;

        match request {
            OracleRequest::RegisterInventoryApp { app_id } => {
                self.require_admin(&caller)?;
                info!(caller = %caller, %app_id, "inventory partner registered");
                self.inventory_app = app_id;
                Ok(Vec::new())
            }
            OracleRequest::RegisterAssetManager { app_id } => {
                self.require_admin(&caller)?;
                info!(caller = %caller, %app_id, "asset manager partner registered");
                self.asset_manager_app = app_id;
                Ok(Vec::new())
            }
            OracleRequest::SetCheckInterval { seconds } => {
                self.require_admin(&caller)?;
                info!(caller = %caller, seconds, "check interval updated");
                self.check_interval = seconds;
                Ok(Vec::new())
            }
            OracleRequest::PerformCheck => {
                // Open to any caller, but rate-limited: this is the only
                // operation that advances the window.
                if !self.window_elapsed(now) {
                    return Err(ContractError::NotYetDue {
                        now,
                        due_at: self.due_at(),
                    });
                }
                debug!(caller = %caller, now, "inventory check performed");
                self.last_check_timestamp = now;
                Ok(vec![LogRecord::new().text("INVENTORY CHECK PERFORMED")])
            }
            OracleRequest::UpdateValuation => {
                self.require_admin_or_elapsed(&caller, now)?;
                debug!(caller = %caller, now, "valuation updated");
                Ok(vec![LogRecord::new().text("INVENTORY VALUATION UPDATED")])
            }
            OracleRequest::ComputeMetrics => {
                self.require_admin_or_elapsed(&caller, now)?;
                debug!(caller = %caller, now, "metrics computed");
                Ok(vec![LogRecord::new().text("PERFORMANCE METRICS COMPUTED")])
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
