//! # Asset Registry
//!
//! The component state struct and its transition function. Every accepted
//! request emits exactly one intent record; rejected requests emit nothing
//! and consume no sequence number.

use crate::intents::{AssetIntent, AssetIntentKind};
use crate::requests::AssetRequest;
use shared_types::{Account, AuthenticatedCall, ContractError, LogRecord};
use tracing::{debug, info};

/// Admin identity, asset counter, and intent sequence.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    admin: Account,
    total_assets: u64,
    intent_seq: u64,
}

impl AssetRegistry {
    /// Constructs the registry with its fixed admin identity.
    #[must_use]
    pub fn new(admin: Account) -> Self {
        info!(admin = %admin, "asset registry initialized");
        Self {
            admin,
            total_assets: 0,
            intent_seq: 0,
        }
    }

    /// Current asset count (creations minus burns).
    #[must_use]
    pub fn total_assets(&self) -> u64 {
        self.total_assets
    }

    /// Sequence number of the most recently emitted intent (0 = none yet).
    #[must_use]
    pub fn last_intent_seq(&self) -> u64 {
        self.intent_seq
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

    fn emit(&mut self, kind: AssetIntentKind) -> Vec<LogRecord> {
        self.intent_seq += 1;
        let intent = AssetIntent {
            seq: self.intent_seq,
            kind,
        };
        debug!(seq = intent.seq, tag = intent.kind.tag(), "intent emitted");
        vec![intent.encode()]
    }

    /// Applies one decoded request atomically.
    ///
    /// # Errors
    /// `Unauthorized` for non-admin callers; `InvariantViolation` when a
    /// burn would drive `total_assets` negative. State (counter and
    /// sequence) is untouched on any error.
    pub fn apply(
        &mut self,
        call: &AuthenticatedCall,
        request: AssetRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        self.require_admin(&call.caller)?;

        match request {
            AssetRequest::Create {
                name,
                unit_name,
                total,
                decimals,
                default_frozen,
                url,
                metadata_hash,
            } => {
                self.total_assets = self.total_assets.saturating_add(1);
                Ok(self.emit(AssetIntentKind::Create {
                    name,
                    unit_name,
                    total,
                    decimals,
                    default_frozen,
                    url,
                    metadata_hash,
                }))
            }
            AssetRequest::Modify {
                asset_id,
                new_manager,
            } => Ok(self.emit(AssetIntentKind::Modify {
                asset_id,
                new_manager,
            })),
            AssetRequest::Transfer {
                asset_id,
                receiver,
                amount,
            } => Ok(self.emit(AssetIntentKind::Transfer {
                asset_id,
                receiver,
                amount,
            })),
            AssetRequest::Freeze {
                asset_id,
                target,
                frozen,
            } => Ok(self.emit(AssetIntentKind::Freeze {
                asset_id,
                target,
                frozen,
            })),
            AssetRequest::Burn { asset_id } => {
                if self.total_assets == 0 {
                    return Err(ContractError::InvariantViolation(
                        "total_assets would underflow".to_string(),
                    ));
                }
                self.total_assets -= 1;
                Ok(self.emit(AssetIntentKind::Burn { asset_id }))
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
