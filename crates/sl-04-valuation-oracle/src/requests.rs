//! # Request Decoding
//!
//! Closed request set for the valuation oracle.

use shared_types::wire::{decode_u64, expect_arity, DecodeError, RawRequest};
use shared_types::AppId;

/// A decoded oracle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleRequest {
    /// Record the inventory-ledger partner app id. Admin only.
    RegisterInventoryApp {
        /// Partner instance id.
        app_id: AppId,
    },
    /// Record the asset-registry partner app id. Admin only.
    RegisterAssetManager {
        /// Partner instance id.
        app_id: AppId,
    },
    /// Set the cooldown interval in seconds (must be positive). Admin only.
    SetCheckInterval {
        /// New interval, seconds.
        seconds: u64,
    },
    /// Rate-limited check; callable by anyone once the window has elapsed.
    PerformCheck,
    /// Valuation signal; admin, or anyone once the window has elapsed.
    UpdateValuation,
    /// Metrics signal; admin, or anyone once the window has elapsed.
    ComputeMetrics,
}

impl OracleRequest {
    /// Decodes a wire request into the closed request set.
    ///
    /// # Errors
    /// `DecodeError` for unknown opcodes, wrong arity, or bad field
    /// encoding. A zero interval is rejected here as out of range.
    pub fn decode(raw: &RawRequest) -> Result<Self, DecodeError> {
        match raw.opcode.as_str() {
            "register_inventory_app" => {
                expect_arity("register_inventory_app", &raw.args, 1)?;
                Ok(Self::RegisterInventoryApp {
                    app_id: AppId(decode_u64("app_id", &raw.args[0])?),
                })
            }
            "register_asset_manager" => {
                expect_arity("register_asset_manager", &raw.args, 1)?;
                Ok(Self::RegisterAssetManager {
                    app_id: AppId(decode_u64("app_id", &raw.args[0])?),
                })
            }
            "set_check_interval" => {
                expect_arity("set_check_interval", &raw.args, 1)?;
                let seconds = decode_u64("check_interval", &raw.args[0])?;
                if seconds == 0 {
                    // A zero interval would make the cooldown gate vacuous.
                    return Err(DecodeError::OutOfRange {
                        field: "check_interval",
                        value: 0,
                    });
                }
                Ok(Self::SetCheckInterval { seconds })
            }
            "perform_check" => {
                expect_arity("perform_check", &raw.args, 0)?;
                Ok(Self::PerformCheck)
            }
            "update_valuation" => {
                expect_arity("update_valuation", &raw.args, 0)?;
                Ok(Self::UpdateValuation)
            }
            "compute_metrics" => {
                expect_arity("compute_metrics", &raw.args, 0)?;
                Ok(Self::ComputeMetrics)
            }
            other => Err(DecodeError::UnknownOpcode(other.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
