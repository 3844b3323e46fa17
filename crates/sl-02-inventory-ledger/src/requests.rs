//! # Request Decoding
//!
//! Closed request set for the inventory ledger, decoded from the wire shape.

use shared_types::wire::{decode_u64, expect_arity, DecodeError, RawRequest};

/// A decoded inventory request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InventoryRequest {
    /// Create (or overwrite) the caller's record. Admin only.
    CreateProduct {
        /// Caller-supplied product identifier.
        product_id: u64,
        /// Reorder threshold.
        min_threshold: u64,
        /// Unit price.
        price: u64,
        /// Storage location.
        location: Vec<u8>,
        /// Opaque expiration marker.
        expiration: u64,
        /// Supplier reference.
        supplier: Vec<u8>,
    },
    /// Set the caller's quantity. Admin or oracle.
    UpdateQuantity {
        /// Echoed into logs; not matched against the stored record.
        product_id: u64,
        /// New absolute quantity.
        quantity: u64,
    },
    /// Add to the caller's quantity (saturating). Admin or oracle.
    Reorder {
        /// Echoed into logs.
        product_id: u64,
        /// Units to add.
        delta: u64,
    },
    /// Emit the quantity snapshot log. Admin or oracle, read-only.
    CheckInventory {
        /// Echoed into logs.
        product_id: u64,
    },
    /// Set the caller's unit price. Admin only.
    UpdatePrice {
        /// Echoed into logs.
        product_id: u64,
        /// New unit price.
        price: u64,
    },
    /// Set the caller's location. Admin or oracle.
    UpdateLocation {
        /// Echoed into logs.
        product_id: u64,
        /// New location bytes.
        location: Vec<u8>,
    },
    /// Emit the full audit snapshot log. Admin or oracle, read-only.
    Audit {
        /// Echoed into logs.
        product_id: u64,
    },
}

impl InventoryRequest {
    /// Decodes a wire request into the closed request set.
    ///
    /// # Errors
    /// `DecodeError` for unknown opcodes, wrong arity, or bad field encoding.
    pub fn decode(raw: &RawRequest) -> Result<Self, DecodeError> {
        match raw.opcode.as_str() {
            "create_product" => {
                expect_arity("create_product", &raw.args, 6)?;
                Ok(Self::CreateProduct {
                    product_id: decode_u64("product_id", &raw.args[0])?,
                    min_threshold: decode_u64("min_threshold", &raw.args[1])?,
                    price: decode_u64("price", &raw.args[2])?,
                    location: raw.args[3].clone(),
                    expiration: decode_u64("expiration", &raw.args[4])?,
                    supplier: raw.args[5].clone(),
                })
            }
            "update_quantity" => {
                expect_arity("update_quantity", &raw.args, 2)?;
                Ok(Self::UpdateQuantity {
                    product_id: decode_u64("product_id", &raw.args[0])?,
                    quantity: decode_u64("quantity", &raw.args[1])?,
                })
            }
            "reorder" => {
                expect_arity("reorder", &raw.args, 2)?;
                Ok(Self::Reorder {
                    product_id: decode_u64("product_id", &raw.args[0])?,
                    delta: decode_u64("delta", &raw.args[1])?,
                })
            }
            "check_inventory" => {
                expect_arity("check_inventory", &raw.args, 1)?;
                Ok(Self::CheckInventory {
                    product_id: decode_u64("product_id", &raw.args[0])?,
                })
            }
            "update_price" => {
                expect_arity("update_price", &raw.args, 2)?;
                Ok(Self::UpdatePrice {
                    product_id: decode_u64("product_id", &raw.args[0])?,
                    price: decode_u64("price", &raw.args[1])?,
                })
            }
            "update_location" => {
                expect_arity("update_location", &raw.args, 2)?;
                Ok(Self::UpdateLocation {
                    product_id: decode_u64("product_id", &raw.args[0])?,
                    location: raw.args[1].clone(),
                })
            }
            "audit" => {
                expect_arity("audit", &raw.args, 1)?;
                Ok(Self::Audit {
                    product_id: decode_u64("product_id", &raw.args[0])?,
                })
            }
            other => Err(DecodeError::UnknownOpcode(other.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
