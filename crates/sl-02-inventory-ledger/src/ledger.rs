//! # Product Inventory Ledger
//!
//! The component state struct and its transition function.

use crate::record::ProductRecord;
use crate::requests::InventoryRequest;
use shared_types::{Account, AuthenticatedCall, ContractError, LogRecord};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Per-account product records plus the global counter.
#[derive(Debug, Clone)]
pub struct ProductInventoryLedger {
    admin: Account,
    oracle: Account,
    total_products: u64,
    records: HashMap<Account, ProductRecord>,
}

impl ProductInventoryLedger {
    /// Constructs the ledger with its two fixed writer identities.
    #[must_use]
    pub fn new(admin: Account, oracle: Account) -> Self {
        info!(admin = %admin, oracle = %oracle, "inventory ledger initialized");
        Self {
            admin,
            oracle,
            total_products: 0,
            records: HashMap::new(),
        }
    }

    /// Global count of created products (counts overwrites too, as the
    /// original does).
    #[must_use]
    pub fn total_products(&self) -> u64 {
        self.total_products
    }

    /// The record held by `account`, if any.
    #[must_use]
    pub fn record_of(&self, account: &Account) -> Option<&ProductRecord> {
        self.records.get(account)
    }

    fn is_admin(&self, caller: &Account) -> bool {
        *caller == self.admin
    }

    fn is_oracle(&self, caller: &Account) -> bool {
        *caller == self.oracle
    }

    fn require_admin(&self, caller: &Account) -> Result<(), ContractError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(ContractError::Unauthorized {
                caller: *caller,
                gate: "admin",
            })
        }
    }

    fn require_admin_or_oracle(&self, caller: &Account) -> Result<(), ContractError> {
        if self.is_admin(caller) || self.is_oracle(caller) {
            Ok(())
        } else {
            Err(ContractError::Unauthorized {
                caller: *caller,
                gate: "admin-or-oracle",
            })
        }
    }

    /// Existence probe preserved from the original: the record slot must be
    /// present AND hold a non-zero `product_id`. A record created with id 0
    /// is invisible to every mutator and reader.
    fn require_record(&self, caller: &Account) -> Result<&ProductRecord, ContractError> {
        match self.records.get(caller) {
            Some(record) if record.product_id != 0 => Ok(record),
            _ => Err(ContractError::NotFound { account: *caller }),
        }
    }

    /// Applies one decoded request atomically.
    ///
    /// # Errors
    /// `Unauthorized` on a failed gate, `NotFound` when a mutating or
    /// reading operation targets a caller without a record. State is
    /// untouched on any error.
    pub fn apply(
        &mut self,
        call: &AuthenticatedCall,
        request: InventoryRequest,
    ) -> Result<Vec<LogRecord>, ContractError> {
        let caller = call.caller;
        let now = call.timestamp;

        match request {
            InventoryRequest::CreateProduct {
                product_id,
                min_threshold,
                price,
                location,
                expiration,
                supplier,
            } => {
                self.require_admin(&caller)?;
                info!(caller = %caller, product_id, "product created");
                self.records.insert(
                    caller,
                    ProductRecord {
                        product_id,
                        quantity: 0,
                        min_threshold,
                        price,
                        location,
                        last_updated: now,
                        expiration,
                        supplier,
                    },
                );
                self.total_products = self.total_products.saturating_add(1);
                Ok(Vec::new())
            }

            InventoryRequest::UpdateQuantity {
                product_id,
                quantity,
            } => {
                self.require_admin_or_oracle(&caller)?;
                self.require_record(&caller)?;
                let record = self
                    .records
                    .get_mut(&caller)
                    .ok_or(ContractError::NotFound { account: caller })?;
                record.quantity = quantity;
                record.touch(now);

                // The low-stock condition is advisory: the signal is emitted
                // but the transition still succeeds.
                if record.needs_reorder() {
                    warn!(caller = %caller, product_id, quantity, "quantity below threshold");
                    Ok(vec![LogRecord::new()
                        .text("REORDER NEEDED: ")
                        .uint(product_id)])
                } else {
                    debug!(caller = %caller, product_id, quantity, "quantity updated");
                    Ok(Vec::new())
                }
            }

            InventoryRequest::Reorder { product_id, delta } => {
                self.require_admin_or_oracle(&caller)?;
                self.require_record(&caller)?;
                let record = self
                    .records
                    .get_mut(&caller)
                    .ok_or(ContractError::NotFound { account: caller })?;
                record.quantity = record.quantity.saturating_add(delta);
                record.touch(now);
                debug!(caller = %caller, product_id, delta, "reorder applied");
                Ok(Vec::new())
            }

            InventoryRequest::CheckInventory { product_id } => {
                self.require_admin_or_oracle(&caller)?;
                let record = self.require_record(&caller)?;
                Ok(vec![LogRecord::new()
                    .text("Product ID: ")
                    .uint(product_id)
                    .text(", Quantity: ")
                    .uint(record.quantity)
                    .text(", Min Threshold: ")
                    .uint(record.min_threshold)])
            }

            InventoryRequest::UpdatePrice { product_id, price } => {
                self.require_admin(&caller)?;
                self.require_record(&caller)?;
                let record = self
                    .records
                    .get_mut(&caller)
                    .ok_or(ContractError::NotFound { account: caller })?;
                record.price = price;
                record.touch(now);
                debug!(caller = %caller, product_id, price, "price updated");
                Ok(Vec::new())
            }

            InventoryRequest::UpdateLocation {
                product_id,
                location,
            } => {
                self.require_admin_or_oracle(&caller)?;
                self.require_record(&caller)?;
                let record = self
                    .records
                    .get_mut(&caller)
                    .ok_or(ContractError::NotFound { account: caller })?;
                record.location = location;
                record.touch(now);
                debug!(caller = %caller, product_id, "location updated");
                Ok(Vec::new())
            }

            InventoryRequest::Audit { product_id } => {
                self.require_admin_or_oracle(&caller)?;
                let record = self.require_record(&caller)?;
                Ok(vec![LogRecord::new()
                    .text("AUDIT - Product ID: ")
                    .uint(product_id)
                    .text(", Quantity: ")
                    .uint(record.quantity)
                    .text(", Price: ")
                    .uint(record.price)
                    .text(", Location: ")
                    .raw(&record.location)
                    .text(", Last Updated: ")
                    .uint(record.last_updated)
                    .text(", Expiration: ")
                    .uint(record.expiration)])
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
