//! Password hashing configuration

use serde::{Deserialize, Serialize};

/// Lowest cost accepted by bcrypt
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest cost accepted by bcrypt
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// bcrypt work factor used when hashing user passwords
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

impl SecurityConfig {
    /// Create from environment variables, clamping `BCRYPT_COST` to the
    /// range bcrypt supports
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|c| c.parse::<u32>().ok())
            .unwrap_or(12)
            .clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST);

        Self { bcrypt_cost }
    }
}
