//! # Access Control Registry
//!
//! The component state struct and its transition function. One instance per
//! deployment, constructed exactly once with the creator account; every
//! request is applied atomically against it.

use crate::policy::{literal_rank_gate, Role, RoleGate};
use crate::requests::AccessRequest;
use shared_types::{Account, AppId, AuthenticatedCall, ContractError, LogRecord};
use std::collections::HashMap;
use tracing::{debug, info};

/// Account→role registry plus the two partner-app slots.
#[derive(Debug, Clone)]
pub struct AccessControlRegistry {
    admin: Account,
    roles: HashMap<Account, Role>,
    inventory_app: AppId,
    asset_manager_app: AppId,
    gate: RoleGate,
}

impl AccessControlRegistry {
    /// Constructs the registry, assigning the creator `Role::Admin` and
    /// leaving both partner slots unregistered. Runs exactly once.
    #[must_use]
    pub fn new(creator: Account) -> Self {
        Self::with_gate(creator, literal_rank_gate)
    }

    /// Constructs the registry with an explicit gate policy.
    #[must_use]
    pub fn with_gate(creator: Account, gate: RoleGate) -> Self {
        let mut roles = HashMap::new();
        roles.insert(creator, Role::Admin);
        info!(creator = %creator, "access-control registry initialized");
        Self {
            admin: creator,
            roles,
            inventory_app: AppId::UNREGISTERED,
            asset_manager_app: AppId::UNREGISTERED,
            gate,
        }
    }

    /// Role currently held by `account`, or None if unregistered.
    #[must_use]
    pub fn role_of(&self, account: &Account) -> Option<Role> {
        self.roles.get(account).copied()
    }

    /// The creator account.
    #[must_use]
    pub fn admin(&self) -> Account {
        self.admin
    }

    /// Registered inventory partner id (`AppId::UNREGISTERED` if unset).
    #[must_use]
    pub fn inventory_app(&self) -> AppId {
        self.inventory_app
    }

    /// Registered asset-manager partner id (`AppId::UNREGISTERED` if unset).
    #[must_use]
    pub fn asset_manager_app(&self) -> AppId {
        self.asset_manager_app
    }

    fn check_admin_gate(&self, caller: &Account) -> Result<(), ContractError> {
        if (self.gate)(self.role_of(caller), Role::Admin) {
            Ok(())
        } else {
            Err(ContractError::Unauthorized {
                caller: *caller,
                gate: "admin",
            })
        }
    }

    /// Applies one decoded request atomically.
    ///
    /// # Errors
    /// `Unauthorized` when the caller fails the admin gate. State is
    /// untouched on any error.
    pub fn apply(
        &mut self,
        call: &AuthenticatedCall,
        request: AccessRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        self.check_admin_gate(&call.caller)?;

        match request {
            AccessRequest::AddUser { target, role }
            | AccessRequest::ChangeRole { target, role } => {
                debug!(target = %target, role = %role, "role assigned");
                self.roles.insert(target, role);
                Ok(Vec::new())
            }
            AccessRequest::RemoveUser { target } => {
                // Deletes the entry entirely: subsequent lookups are None,
                // not the last-held role.
                debug!(target = %target, "role entry removed");
                self.roles.remove(&target);
                Ok(Vec::new())
            }
            AccessRequest::RegisterInventoryApp { app_id } => {
                debug!(%app_id, "inventory partner registered");
                self.inventory_app = app_id;
                Ok(Vec::new())
            }
            AccessRequest::RegisterAssetManager { app_id } => {
                debug!(%app_id, "asset-manager partner registered");
                self.asset_manager_app = app_id;
                Ok(Vec::new())
            }
            AccessRequest::BackupData => {
                info!(caller = %call.caller, "backup signal emitted");
                Ok(vec![LogRecord::new().text("DATA BACKUP INITIATED")])
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
