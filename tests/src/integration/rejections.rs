//! # Rejection Semantics
//!
//! Every failure mode must leave component state byte-identical and report a
//! stable code through the wire reply.

#[cfg(test)]
mod tests {
    use crate::integration::random_account;
    use shared_types::wire::encode_u64;
    use shared_types::{AuthenticatedCall, RawRequest, Reply};
    use sl_runtime::prelude::{ComponentId, Dispatcher, RuntimeConfig, RoleGateChoice};

    const GENESIS: u64 = 1_700_000_000;

    fn deploy_with(gate: RoleGateChoice) -> (Dispatcher, RuntimeConfig) {
        let config = RuntimeConfig {
            admin: random_account(),
            oracle: random_account(),
            genesis_timestamp: GENESIS,
            role_gate: gate,
        };
        (Dispatcher::new(&config), config)
    }

    // =========================================================================
    // MALFORMED INPUT
    // =========================================================================

    #[tokio::test]
    async fn test_malformed_inputs_reject_without_state_change() {
        let (dispatcher, config) = deploy_with(RoleGateChoice::Literal);
        let admin = AuthenticatedCall::new(config.admin, GENESIS);

        let cases = [
            // Unknown opcode.
            RawRequest::new("mint_gold", vec![]),
            // Wrong arity.
            RawRequest::new("create_product", vec![encode_u64(7)]),
            // Wrong integer width.
            RawRequest::new(
                "update_quantity",
                vec![vec![0u8; 4], encode_u64(3)],
            ),
        ];
        for raw in &cases {
            let reply = dispatcher
                .dispatch(ComponentId::InventoryLedger, &admin, raw)
                .await;
            assert!(!reply.success, "opcode {} must reject", raw.opcode);
            assert_eq!(reply.code.as_deref(), Some("MALFORMED_REQUEST"));
            assert!(reply.logs.is_empty());
        }
        assert_eq!(dispatcher.inventory().await.total_products(), 0);

        // Truncated account argument.
        let truncated = RawRequest::new(
            "add_user",
            vec![vec![0xAB; 16], encode_u64(2)],
        );
        let reply = dispatcher
            .dispatch(ComponentId::AccessControl, &admin, &truncated)
            .await;
        assert_eq!(reply.code.as_deref(), Some("MALFORMED_REQUEST"));

        // Out-of-range role rank.
        let bad_rank = RawRequest::new(
            "add_user",
            vec![random_account().as_bytes().to_vec(), encode_u64(9)],
        );
        let reply = dispatcher
            .dispatch(ComponentId::AccessControl, &admin, &bad_rank)
            .await;
        assert_eq!(reply.code.as_deref(), Some("MALFORMED_REQUEST"));
    }

    // =========================================================================
    // DECODE PRECEDES AUTHORIZATION
    // =========================================================================

    #[tokio::test]
    async fn test_unauthorized_caller_with_malformed_input_sees_malformed() {
        let (dispatcher, _config) = deploy_with(RoleGateChoice::Literal);
        let outsider = AuthenticatedCall::new(random_account(), GENESIS);

        let raw = RawRequest::new("create_product", vec![]);
        let reply = dispatcher
            .dispatch(ComponentId::InventoryLedger, &outsider, &raw)
            .await;
        assert_eq!(reply.code.as_deref(), Some("MALFORMED_REQUEST"));
    }

    // =========================================================================
    // GATE CHOICE
    // =========================================================================

    #[tokio::test]
    async fn test_literal_gate_admits_every_registered_role() {
        let (dispatcher, config) = deploy_with(RoleGateChoice::Literal);
        let admin = AuthenticatedCall::new(config.admin, GENESIS);
        let operator = random_account();

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

        // Under the deployed comparison, the operator now passes the admin
        // gate and can register partner apps.
        let register = RawRequest::new("register_inventory_app", vec![encode_u64(77)]);
        let as_operator = AuthenticatedCall::new(operator, GENESIS + 1);
        assert!(
            dispatcher
                .dispatch(ComponentId::AccessControl, &as_operator, &register)
                .await
                .success
        );
    }

    #[tokio::test]
    async fn test_strict_gate_rejects_non_admin_callers() {
        let (dispatcher, config) = deploy_with(RoleGateChoice::Strict);
        let admin = AuthenticatedCall::new(config.admin, GENESIS);
        let operator = random_account();

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

        let register = RawRequest::new("register_inventory_app", vec![encode_u64(77)]);
        let as_operator = AuthenticatedCall::new(operator, GENESIS + 1);
        let reply = dispatcher
            .dispatch(ComponentId::AccessControl, &as_operator, &register)
            .await;
        assert_eq!(reply.code.as_deref(), Some("UNAUTHORIZED"));
    }

    // =========================================================================
    // MISSING RECORDS
    // =========================================================================

    #[tokio::test]
    async fn test_mutating_without_record_is_not_found() {
        let (dispatcher, config) = deploy_with(RoleGateChoice::Literal);
        let admin = AuthenticatedCall::new(config.admin, GENESIS);

        let update = RawRequest::new("update_quantity", vec![encode_u64(7), encode_u64(3)]);
        let reply = dispatcher
            .dispatch(ComponentId::InventoryLedger, &admin, &update)
            .await;
        assert_eq!(reply.code.as_deref(), Some("NOT_FOUND"));
    }

    // =========================================================================
    // WIRE REPLY
    // =========================================================================

    #[tokio::test]
    async fn test_reply_roundtrips_through_json() {
        let (dispatcher, config) = deploy_with(RoleGateChoice::Literal);
        let admin = AuthenticatedCall::new(config.admin, GENESIS);

        let raw = RawRequest::new("backup_data", vec![]);
        let reply = dispatcher
            .dispatch(ComponentId::AccessControl, &admin, &raw)
            .await;
        let json = serde_json::to_string(&reply).unwrap();
        let back: Reply = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.logs[0].as_bytes(), b"DATA BACKUP INITIATED");
    }
}
