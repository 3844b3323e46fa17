//! # Deployment Lifecycle
//!
//! Drives all four components through the dispatcher the way a deployment
//! would: install, grant roles, create inventory, emit asset intents, and
//! run the oracle's cooldown cycle.

#[cfg(test)]
mod tests {
    use crate::integration::random_account;
    use shared_types::wire::encode_u64;
    use shared_types::{AuthenticatedCall, RawRequest};
    use sl_04_valuation_oracle::prelude::DEFAULT_CHECK_INTERVAL;
    use sl_runtime::prelude::{ComponentId, Dispatcher, RuntimeConfig};

    const GENESIS: u64 = 1_700_000_000;

    fn deploy() -> (Dispatcher, RuntimeConfig) {
        let config = RuntimeConfig {
            admin: random_account(),
            oracle: random_account(),
            genesis_timestamp: GENESIS,
            ..RuntimeConfig::default()
        };
        (Dispatcher::new(&config), config)
    }

    fn call(config: &RuntimeConfig, timestamp: u64) -> AuthenticatedCall {
        AuthenticatedCall::new(config.admin, timestamp)
    }

    // =========================================================================
    // FULL PRODUCT FLOW
    // =========================================================================

    #[tokio::test]
    async fn test_role_grant_then_product_lifecycle() {
        let (dispatcher, config) = deploy();
        let manager = random_account();
        let admin = call(&config, GENESIS);

        // Admin grants the manager role.
        let grant = RawRequest::new(
            "add_user",
            vec![manager.as_bytes().to_vec(), encode_u64(2)],
        );
        assert!(
            dispatcher
                .dispatch(ComponentId::AccessControl, &admin, &grant)
                .await
                .success
        );

        // The inventory ledger authorizes by identity, not role: the new
        // manager still cannot create a product.
        let create = RawRequest::new(
            "create_product",
            vec![
                encode_u64(7),
                encode_u64(10),
                encode_u64(500),
                b"NYC".to_vec(),
                encode_u64(0),
                b"ACME".to_vec(),
            ],
        );
        let as_manager = AuthenticatedCall::new(manager, GENESIS + 1);
        let reply = dispatcher
            .dispatch(ComponentId::InventoryLedger, &as_manager, &create)
            .await;
        assert_eq!(reply.code.as_deref(), Some("UNAUTHORIZED"));

        // The admin succeeds; quantity starts at zero.
        let reply = dispatcher
            .dispatch(ComponentId::InventoryLedger, &admin, &create)
            .await;
        assert!(reply.success);
        {
            let inventory = dispatcher.inventory().await;
            let record = inventory.record_of(&config.admin).unwrap();
            assert_eq!(record.product_id, 7);
            assert_eq!(record.quantity, 0);
            assert_eq!(record.min_threshold, 10);
        }

        // Setting the quantity below threshold succeeds but signals reorder.
        let update = RawRequest::new("update_quantity", vec![encode_u64(7), encode_u64(3)]);
        let reply = dispatcher
            .dispatch(ComponentId::InventoryLedger, &admin, &update)
            .await;
        assert!(reply.success);
        assert_eq!(reply.logs.len(), 1);
        assert!(reply.logs[0].starts_with(b"REORDER NEEDED: "));

        // Restocking clears the signal.
        let restock = RawRequest::new("reorder", vec![encode_u64(7), encode_u64(20)]);
        let reply = dispatcher
            .dispatch(ComponentId::InventoryLedger, &admin, &restock)
            .await;
        assert!(reply.success);
        assert_eq!(
            dispatcher
                .inventory()
                .await
                .record_of(&config.admin)
                .unwrap()
                .quantity,
            23
        );
    }

    // =========================================================================
    // ASSET INTENT STREAM
    // =========================================================================

    #[tokio::test]
    async fn test_asset_intents_carry_monotonic_seq() {
        let (dispatcher, config) = deploy();
        let admin = call(&config, GENESIS);

        let create = RawRequest::new(
            "create_asset",
            vec![
                b"Pallet".to_vec(),
                b"PLT".to_vec(),
                encode_u64(10_000),
                encode_u64(2),
                encode_u64(0),
                b"https://assets.example".to_vec(),
                vec![0xCD; 32],
            ],
        );
        let first = dispatcher
            .dispatch(ComponentId::AssetRegistry, &admin, &create)
            .await;
        assert!(first.success);
        assert!(first.logs[0].starts_with(b"CREATE_ASSET:"));

        let burn = RawRequest::new("burn_asset", vec![encode_u64(1)]);
        let second = dispatcher
            .dispatch(ComponentId::AssetRegistry, &admin, &burn)
            .await;
        assert!(second.success);

        // seq 1 then seq 2, embedded after the tag and separator.
        let mut expected = b"CREATE_ASSET:".to_vec();
        expected.extend_from_slice(&1u64.to_be_bytes());
        assert!(first.logs[0].starts_with(&expected));
        let mut expected = b"BURN_ASSET:".to_vec();
        expected.extend_from_slice(&2u64.to_be_bytes());
        assert!(second.logs[0].starts_with(&expected));

        // The burn drained the registry; a second burn is rejected and the
        // seq does not move.
        let third = dispatcher
            .dispatch(ComponentId::AssetRegistry, &admin, &burn)
            .await;
        assert_eq!(third.code.as_deref(), Some("INVARIANT_VIOLATION"));
        assert_eq!(dispatcher.assets().await.last_intent_seq(), 2);
        assert_eq!(dispatcher.assets().await.total_assets(), 0);
    }

    // =========================================================================
    // ORACLE COOLDOWN CYCLE
    // =========================================================================

    #[tokio::test]
    async fn test_oracle_cooldown_cycle() {
        let (dispatcher, config) = deploy();
        let anyone = random_account();
        let check = RawRequest::new("perform_check", vec![]);

        // Too early, even one second before the boundary.
        for now in [GENESIS, GENESIS + DEFAULT_CHECK_INTERVAL - 1] {
            let reply = dispatcher
                .dispatch(
                    ComponentId::ValuationOracle,
                    &AuthenticatedCall::new(anyone, now),
                    &check,
                )
                .await;
            assert_eq!(reply.code.as_deref(), Some("NOT_YET_DUE"));
        }

        // At the boundary the check lands and re-anchors the window.
        let due = GENESIS + DEFAULT_CHECK_INTERVAL;
        let reply = dispatcher
            .dispatch(
                ComponentId::ValuationOracle,
                &AuthenticatedCall::new(anyone, due),
                &check,
            )
            .await;
        assert!(reply.success);
        assert_eq!(reply.logs[0].as_bytes(), b"INVENTORY CHECK PERFORMED");
        assert_eq!(dispatcher.oracle().await.last_check_timestamp(), due);

        // The admin can run valuation inside the fresh window; an outsider
        // cannot.
        let valuation = RawRequest::new("update_valuation", vec![]);
        let reply = dispatcher
            .dispatch(
                ComponentId::ValuationOracle,
                &call(&config, due + 1),
                &valuation,
            )
            .await;
        assert!(reply.success);
        let reply = dispatcher
            .dispatch(
                ComponentId::ValuationOracle,
                &AuthenticatedCall::new(anyone, due + 1),
                &valuation,
            )
            .await;
        assert_eq!(reply.code.as_deref(), Some("UNAUTHORIZED"));
    }

    // =========================================================================
    // ROLE REMOVAL
    // =========================================================================

    #[tokio::test]
    async fn test_remove_user_clears_role() {
        let (dispatcher, config) = deploy();
        let operator = random_account();
        let admin = call(&config, GENESIS);

        let grant = RawRequest::new(
            "add_user",
            vec![operator.as_bytes().to_vec(), encode_u64(3)],
        );
        assert!(
            dispatcher
                .dispatch(ComponentId::AccessControl, &admin, &grant)
                .await
                .success
        );
        assert!(dispatcher
            .access_control()
            .await
            .role_of(&operator)
            .is_some());

        let revoke = RawRequest::new("remove_user", vec![operator.as_bytes().to_vec()]);
        assert!(
            dispatcher
                .dispatch(ComponentId::AccessControl, &admin, &revoke)
                .await
                .success
        );
        assert!(dispatcher
            .access_control()
            .await
            .role_of(&operator)
            .is_none());
    }

    // =========================================================================
    // STATS ACCOUNTING
    // =========================================================================

    #[tokio::test]
    async fn test_stats_track_every_dispatch() {
        let (dispatcher, config) = deploy();
        let admin = call(&config, GENESIS);

        let backup = RawRequest::new("backup_data", vec![]);
        dispatcher
            .dispatch(ComponentId::AccessControl, &admin, &backup)
            .await;
        let bogus = RawRequest::new("definitely_not_an_opcode", vec![]);
        dispatcher
            .dispatch(ComponentId::AccessControl, &admin, &bogus)
            .await;

        let stats = dispatcher.stats().await;
        assert_eq!(stats.handled, 2);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.logs_emitted, 1);
    }
}
