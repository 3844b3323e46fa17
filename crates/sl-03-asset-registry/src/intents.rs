//! # Asset Intents
//!
//! Structured descriptions of asset operations whose physical effect is
//! executed by the external minting collaborator. Intents are emitted as log
//! records and are not persisted as per-asset state.

use serde::{Deserialize, Serialize};
use shared_types::{Account, LogRecord};

/// The operation an intent describes, with all fields carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetIntentKind {
    /// Create a new asset.
    Create {
        /// Asset display name.
        name: Vec<u8>,
        /// Unit ticker.
        unit_name: Vec<u8>,
        /// Total supply.
        total: u64,
        /// Decimal places.
        decimals: u64,
        /// Whether holdings start frozen.
        default_frozen: bool,
        /// Metadata URL.
        url: Vec<u8>,
        /// Metadata hash bytes.
        metadata_hash: Vec<u8>,
    },
    /// Reassign an asset's manager.
    Modify {
        /// Target asset.
        asset_id: u64,
        /// New manager account.
        new_manager: Account,
    },
    /// Transfer asset units.
    Transfer {
        /// Target asset.
        asset_id: u64,
        /// Receiving account.
        receiver: Account,
        /// Units to move.
        amount: u64,
    },
    /// Freeze or unfreeze a holding.
    Freeze {
        /// Target asset.
        asset_id: u64,
        /// Account whose holding is affected.
        target: Account,
        /// Desired frozen state.
        frozen: bool,
    },
    /// Destroy an asset.
    Burn {
        /// Target asset.
        asset_id: u64,
    },
}

impl AssetIntentKind {
    /// Record tag for this operation.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Create { .. } => "CREATE_ASSET",
            Self::Modify { .. } => "MODIFY_ASSET",
            Self::Transfer { .. } => "TRANSFER_ASSET",
            Self::Freeze { .. } => "FREEZE_ASSET",
            Self::Burn { .. } => "BURN_ASSET",
        }
    }
}

/// One emitted intent: a monotonic idempotency key plus the operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetIntent {
    /// Strictly monotonic per registry; the executor's deduplication key.
    pub seq: u64,
    /// The described operation.
    pub kind: AssetIntentKind,
}

impl AssetIntent {
    /// Encodes the intent into its wire log record: the tag, then the seq,
    /// then the operation fields verbatim, all colon-separated. Integers
    /// and booleans use the 8-byte big-endian wire width; accounts and byte
    /// strings are raw.
    #[must_use]
    pub fn encode(&self) -> LogRecord {
        let record = LogRecord::new()
            .text(self.kind.tag())
            .text(":")
            .uint(self.seq);
        match &self.kind {
            AssetIntentKind::Create {
                name,
                unit_name,
                total,
                decimals,
                default_frozen,
                url,
                metadata_hash,
            } => record
                .text(":")
                .raw(name)
                .text(":")
                .raw(unit_name)
                .text(":")
                .uint(*total)
                .text(":")
                .uint(*decimals)
                .text(":")
                .uint(u64::from(*default_frozen))
                .text(":")
                .raw(url)
                .text(":")
                .raw(metadata_hash),
            AssetIntentKind::Modify {
                asset_id,
                new_manager,
            } => record
                .text(":")
                .uint(*asset_id)
                .text(":")
                .raw(new_manager.as_bytes()),
            AssetIntentKind::Transfer {
                asset_id,
                receiver,
                amount,
            } => record
                .text(":")
                .uint(*asset_id)
                .text(":")
                .raw(receiver.as_bytes())
                .text(":")
                .uint(*amount),
            AssetIntentKind::Freeze {
                asset_id,
                target,
                frozen,
            } => record
                .text(":")
                .uint(*asset_id)
                .text(":")
                .raw(target.as_bytes())
                .text(":")
                .uint(u64::from(*frozen)),
            AssetIntentKind::Burn { asset_id } => record.text(":").uint(*asset_id),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
