//! # Dispatcher
//!
//! Routes wire requests to the owning component, decoding before any gate
//! check so malformed input is always reported as `MALFORMED_REQUEST`
//! regardless of who sent it. One `tokio::sync::Mutex` per component gives
//! the single-writer discipline the components assume.

use crate::config::RuntimeConfig;
use serde::{Deserialize, Serialize};
use shared_types::{AuthenticatedCall, ContractError, LogRecord, RawRequest, Reply};
use sl_01_access_control::prelude::{AccessControlRegistry, AccessRequest};
use sl_02_inventory_ledger::prelude::{InventoryRequest, ProductInventoryLedger};
use sl_03_asset_registry::prelude::{AssetRegistry, AssetRequest};
use sl_04_valuation_oracle::prelude::{OracleRequest, ValuationOracle};
use std::fmt;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, instrument, warn};

/// Addresses one of the four hosted components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentId {
    /// SL-01: role registry.
    AccessControl,
    /// SL-02: product inventory ledger.
    InventoryLedger,
    /// SL-03: asset-intent registry.
    AssetRegistry,
    /// SL-04: valuation oracle.
    ValuationOracle,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AccessControl => "access-control",
            Self::InventoryLedger => "inventory-ledger",
            Self::AssetRegistry => "asset-registry",
            Self::ValuationOracle => "valuation-oracle",
        };
        f.write_str(name)
    }
}

/// Running totals across all dispatched requests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatcherStats {
    /// Requests routed, successful or not.
    pub handled: u64,
    /// Requests whose state transition was applied.
    pub succeeded: u64,
    /// Requests rejected with a `ContractError`.
    pub rejected: u64,
    /// Log records emitted by successful transitions.
    pub logs_emitted: u64,
}

/// Owns the four components and serializes writes to each.
pub struct Dispatcher {
    access_control: Mutex<AccessControlRegistry>,
    inventory: Mutex<ProductInventoryLedger>,
    assets: Mutex<AssetRegistry>,
    oracle: Mutex<ValuationOracle>,
    stats: Mutex<DispatcherStats>,
}

impl Dispatcher {
    /// Constructs all four components from the deployment configuration.
    #[must_use]
    pub fn new(config: &RuntimeConfig) -> Self {
        info!(
            admin = %config.admin,
            oracle = %config.oracle,
            genesis_timestamp = config.genesis_timestamp,
            role_gate = ?config.role_gate,
            "dispatcher initialized"
        );
        Self {
            access_control: Mutex::new(AccessControlRegistry::with_gate(
                config.admin,
                config.role_gate.gate(),
            )),
            inventory: Mutex::new(ProductInventoryLedger::new(config.admin, config.oracle)),
            assets: Mutex::new(AssetRegistry::new(config.admin)),
            oracle: Mutex::new(ValuationOracle::new(config.admin, config.genesis_timestamp)),
            stats: Mutex::new(DispatcherStats::default()),
        }
    }

    /// Snapshot of the running totals.
    pub async fn stats(&self) -> DispatcherStats {
        self.stats.lock().await.clone()
    }

    /// Locks the access-control registry for direct inspection.
    pub async fn access_control(&self) -> MutexGuard<'_, AccessControlRegistry> {
        self.access_control.lock().await
    }

    /// Locks the inventory ledger for direct inspection.
    pub async fn inventory(&self) -> MutexGuard<'_, ProductInventoryLedger> {
        self.inventory.lock().await
    }

    /// Locks the asset registry for direct inspection.
    pub async fn assets(&self) -> MutexGuard<'_, AssetRegistry> {
        self.assets.lock().await
    }

    /// Locks the valuation oracle for direct inspection.
    pub async fn oracle(&self) -> MutexGuard<'_, ValuationOracle> {
        self.oracle.lock().await
    }

    /// Routes one wire request and reports the outcome.
    ///
    /// The reply carries the emitted logs on success or a stable rejection
    /// code on failure; the component's state is untouched on failure.
    pub async fn dispatch(
        &self,
        component: ComponentId,
        call: &AuthenticatedCall,
        raw: &RawRequest,
    ) -> Reply {
        let result = match component {
            ComponentId::AccessControl => self.handle_access_control(call, raw).await,
            ComponentId::InventoryLedger => self.handle_inventory(call, raw).await,
            ComponentId::AssetRegistry => self.handle_assets(call, raw).await,
            ComponentId::ValuationOracle => self.handle_oracle(call, raw).await,
        };

        let mut stats = self.stats.lock().await;
        stats.handled += 1;
        match &result {
            Ok(logs) => {
                stats.succeeded += 1;
                stats.logs_emitted += logs.len() as u64;
            }
            Err(err) => {
                stats.rejected += 1;
                warn!(
                    %component,
                    correlation_id = %call.correlation_id,
                    code = err.code(),
                    error = %err,
                    "request rejected"
                );
            }
        }
        drop(stats);

        Reply::from(result)
    }

    #[instrument(skip(self, call, raw), fields(correlation_id = %call.correlation_id, opcode = %raw.opcode))]
    async fn handle_access_control(
        &self,
        call: &AuthenticatedCall,
        raw: &RawRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        let request = AccessRequest::decode(raw)?;
        self.access_control.lock().await.apply(call, request)
    }

    #[instrument(skip(self, call, raw), fields(correlation_id = %call.correlation_id, opcode = %raw.opcode))]
    async fn handle_inventory(
        &self,
        call: &AuthenticatedCall,
        raw: &RawRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        let request = InventoryRequest::decode(raw)?;
        self.inventory.lock().await.apply(call, request)
    }

    #[instrument(skip(self, call, raw), fields(correlation_id = %call.correlation_id, opcode = %raw.opcode))]
    async fn handle_assets(
        &self,
        call: &AuthenticatedCall,
        raw: &RawRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        let request = AssetRequest::decode(raw)?;
        self.assets.lock().await.apply(call, request)
    }

    #[instrument(skip(self, call, raw), fields(correlation_id = %call.correlation_id, opcode = %raw.opcode))]
    async fn handle_oracle(
        &self,
        call: &AuthenticatedCall,
        raw: &RawRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        let request = OracleRequest::decode(raw)?;
        self.oracle.lock().await.apply(call, request)
    }
}

// =============================================================================
// TESTS
// =============================================================================
