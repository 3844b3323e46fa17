//! # Request Decoding
//!
//! Closed request set for the asset registry.

use shared_types::wire::{decode_account, decode_bool, decode_u64, expect_arity, DecodeError, RawRequest};
use shared_types::Account;

/// A decoded asset-registry request. All operations are admin-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetRequest {
    /// Emit a creation intent and bump the asset counter.
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
    /// Emit a manager-reassignment intent.
    Modify {
        /// Target asset.
        asset_id: u64,
        /// New manager account.
        new_manager: Account,
    },
    /// Emit a transfer intent.
    Transfer {
        /// Target asset.
        asset_id: u64,
        /// Receiving account.
        receiver: Account,
        /// Units to move.
        amount: u64,
    },
    /// Emit a freeze intent.
    Freeze {
        /// Target asset.
        asset_id: u64,
        /// Account whose holding is affected.
        target: Account,
        /// Desired frozen state.
        frozen: bool,
    },
    /// Emit a burn intent and decrement the asset counter.
    Burn {
        /// Target asset.
        asset_id: u64,
    },
}

impl AssetRequest {
    /// Decodes a wire request into the closed request set.
    ///
    /// # Errors
    /// `DecodeError` for unknown opcodes, wrong arity, or bad field encoding.
    pub fn decode(raw: &RawRequest) -> Result<Self, DecodeError> {
        match raw.opcode.as_str() {
            "create_asset" => {
                expect_arity("create_asset", &raw.args, 7)?;
                Ok(Self::Create {
                    name: raw.args[0].clone(),
                    unit_name: raw.args[1].clone(),
                    total: decode_u64("total", &raw.args[2])?,
                    decimals: decode_u64("decimals", &raw.args[3])?,
                    default_frozen: decode_bool("default_frozen", &raw.args[4])?,
                    url: raw.args[5].clone(),
                    metadata_hash: raw.args[6].clone(),
                })
            }
            "modify_asset" => {
                expect_arity("modify_asset", &raw.args, 2)?;
                Ok(Self::Modify {
                    asset_id: decode_u64("asset_id", &raw.args[0])?,
                    new_manager: decode_account("new_manager", &raw.args[1])?,
                })
            }
            "transfer_asset" => {
                expect_arity("transfer_asset", &raw.args, 3)?;
                Ok(Self::Transfer {
                    asset_id: decode_u64("asset_id", &raw.args[0])?,
                    receiver: decode_account("receiver", &raw.args[1])?,
                    amount: decode_u64("amount", &raw.args[2])?,
                })
            }
            "freeze_asset" => {
                expect_arity("freeze_asset", &raw.args, 3)?;
                Ok(Self::Freeze {
                    asset_id: decode_u64("asset_id", &raw.args[0])?,
                    target: decode_account("target", &raw.args[1])?,
                    frozen: decode_bool("frozen", &raw.args[2])?,
                })
            }
            "burn_asset" => {
                expect_arity("burn_asset", &raw.args, 1)?;
                Ok(Self::Burn {
                    asset_id: decode_u64("asset_id", &raw.args[0])?,
                })
            }
            other => Err(DecodeError::UnknownOpcode(other.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
