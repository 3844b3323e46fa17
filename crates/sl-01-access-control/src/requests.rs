//! # Request Decoding
//!
//! Closed request set for the access-control registry. Adding an opcode is a
//! compile-time-checked change: `apply` matches this enum exhaustively.

use crate::policy::Role;
use shared_types::wire::{decode_account, decode_u64, expect_arity, DecodeError, RawRequest};
use shared_types::{Account, AppId};

/// A decoded access-control request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessRequest {
    /// Register `target` with `role` (idempotent).
    AddUser {
        /// Account to register.
        target: Account,
        /// Role to assign.
        role: Role,
    },
    /// Delete `target`'s role entry entirely.
    RemoveUser {
        /// Account to remove.
        target: Account,
    },
    /// Overwrite `target`'s role (idempotent).
    ChangeRole {
        /// Account to update.
        target: Account,
        /// New role.
        role: Role,
    },
    /// Record the inventory-ledger partner app id.
    RegisterInventoryApp {
        /// Partner instance id.
        app_id: AppId,
    },
    /// Record the asset-registry partner app id.
    RegisterAssetManager {
        /// Partner instance id.
        app_id: AppId,
    },
    /// Emit the backup signal (export itself is an external concern).
    BackupData,
}

impl AccessRequest {
    /// Decodes a wire request into the closed request set.
    ///
    /// # Errors
    /// `DecodeError` for unknown opcodes, wrong arity, or bad field encoding.
    pub fn decode(raw: &RawRequest) -> Result<Self, DecodeError> {
        match raw.opcode.as_str() {
            "add_user" => {
                expect_arity("add_user", &raw.args, 2)?;
                Ok(Self::AddUser {
                    target: decode_account("target", &raw.args[0])?,
                    role: Role::from_rank("role", decode_u64("role", &raw.args[1])?)?,
                })
            }
            "remove_user" => {
                expect_arity("remove_user", &raw.args, 1)?;
                Ok(Self::RemoveUser {
                    target: decode_account("target", &raw.args[0])?,
                })
            }
            "change_role" => {
                expect_arity("change_role", &raw.args, 2)?;
                Ok(Self::ChangeRole {
                    target: decode_account("target", &raw.args[0])?,
                    role: Role::from_rank("role", decode_u64("role", &raw.args[1])?)?,
                })
            }
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
            "backup_data" => {
                expect_arity("backup_data", &raw.args, 0)?;
                Ok(Self::BackupData)
            }
            other => Err(DecodeError::UnknownOpcode(other.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
