//! # Write Serialization
//!
//! Each component sits behind its own mutex, so concurrent dispatches to the
//! same component apply one at a time and their additive effects never race.

#[cfg(test)]
mod tests {
    use crate::integration::random_account;
    use shared_types::wire::encode_u64;
    use shared_types::{AuthenticatedCall, RawRequest};
    use sl_runtime::prelude::{ComponentId, Dispatcher, RuntimeConfig};
    use std::sync::Arc;

    const GENESIS: u64 = 1_700_000_000;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reorders_are_additive() {
        let config = RuntimeConfig {
            admin: random_account(),
            oracle: random_account(),
            genesis_timestamp: GENESIS,
            ..RuntimeConfig::default()
        };
        let dispatcher = Arc::new(Dispatcher::new(&config));
        let admin = config.admin;

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
        assert!(
            dispatcher
                .dispatch(
                    ComponentId::InventoryLedger,
                    &AuthenticatedCall::new(admin, GENESIS),
                    &create,
                )
                .await
                .success
        );

        let mut handles = Vec::new();
        for i in 0..32u64 {
            let dispatcher = Arc::clone(&dispatcher);
            handles.push(tokio::spawn(async move {
                let raw = RawRequest::new("reorder", vec![encode_u64(7), encode_u64(5)]);
                let call = AuthenticatedCall::new(admin, GENESIS + i);
                dispatcher
                    .dispatch(ComponentId::InventoryLedger, &call, &raw)
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().success);
        }

        let inventory = dispatcher.inventory().await;
        let record = inventory.record_of(&admin).unwrap();
        assert_eq!(record.quantity, 32 * 5);
        // last_updated moved forward to the latest applied timestamp, never
        // backward.
        assert!(record.last_updated >= GENESIS);

        let stats = dispatcher.stats().await;
        assert_eq!(stats.handled, 33);
        assert_eq!(stats.succeeded, 33);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_intents_never_reuse_a_seq() {
        let config = RuntimeConfig {
            admin: random_account(),
            oracle: random_account(),
            genesis_timestamp: GENESIS,
            ..RuntimeConfig::default()
        };
        let dispatcher = Arc::new(Dispatcher::new(&config));
        let admin = config.admin;

        let mut handles = Vec::new();
        for _ in 0..16u64 {
            let dispatcher = Arc::clone(&dispatcher);
            handles.push(tokio::spawn(async move {
                let raw = RawRequest::new(
                    "create_asset",
                    vec![
                        b"Crate".to_vec(),
                        b"CRT".to_vec(),
                        encode_u64(100),
                        encode_u64(0),
                        encode_u64(0),
                        b"https://assets.example".to_vec(),
                        vec![0u8; 32],
                    ],
                );
                let call = AuthenticatedCall::new(admin, GENESIS);
                dispatcher
                    .dispatch(ComponentId::AssetRegistry, &call, &raw)
                    .await
            }));
        }

        let mut seqs = Vec::new();
        for handle in handles {
            let reply = handle.await.unwrap();
            assert!(reply.success);
            // seq sits right after "CREATE_ASSET:" in the intent record.
            let bytes = reply.logs[0].as_bytes();
            let offset = b"CREATE_ASSET:".len();
            let mut seq_bytes = [0u8; 8];
            seq_bytes.copy_from_slice(&bytes[offset..offset + 8]);
            seqs.push(u64::from_be_bytes(seq_bytes));
        }
        seqs.sort_unstable();
        assert_eq!(seqs, (1..=16).collect::<Vec<u64>>());
        assert_eq!(dispatcher.assets().await.total_assets(), 16);
    }
}
