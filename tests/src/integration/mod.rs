//! Cross-component integration scenarios, driven through the dispatcher.

pub mod concurrency;
pub mod lifecycle;
pub mod rejections;

use rand::RngCore;
use shared_types::Account;

/// A fresh random account; collisions are negligible at 32 bytes.
pub fn random_account() -> Account {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    Account::new(bytes)
}
