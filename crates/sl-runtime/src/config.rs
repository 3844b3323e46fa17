//! # Runtime Configuration
//!
//! Deployment-time identities and policy selection. Serde-deserializable so
//! an operator can supply it as JSON.

use serde::{Deserialize, Serialize};
use shared_types::Account;
use sl_01_access_control::policy::{literal_rank_gate, strict_privilege_gate, RoleGate};

/// Which role-gate comparison the access-control registry runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleGateChoice {
    /// The deployed comparison, quirk included: any registered role passes
    /// the admin threshold.
    #[default]
    Literal,
    /// The corrected comparison: a threshold admits only roles with at least
    /// that much privilege.
    Strict,
}

impl RoleGateChoice {
    /// Resolves the choice to the gate function itself.
    #[must_use]
    pub fn gate(self) -> RoleGate {
        match self {
            Self::Literal => literal_rank_gate,
            Self::Strict => strict_privilege_gate,
        }
    }
}

/// Dispatcher construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Deploying account; becomes `Role::Admin` everywhere.
    pub admin: Account,
    /// Oracle writer identity trusted by the inventory ledger.
    pub oracle: Account,
    /// Timestamp anchoring the valuation oracle's first cooldown window.
    pub genesis_timestamp: u64,
    /// Role-gate comparison for the access-control registry.
    #[serde(default)]
    pub role_gate: RoleGateChoice,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            admin: Account::ZERO,
            oracle: Account::ZERO,
            genesis_timestamp: 0,
            role_gate: RoleGateChoice::default(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
