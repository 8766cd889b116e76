use chrono::Utc;
use sha2::{Digest, Sha256};

/// Join identifier and timestamp into the payload that gets hashed
pub fn combine(identifier: &str, timestamp: &str) -> String {
    format!("{}:{}", identifier, timestamp)
}

/// Lowercase hex SHA-256 of `<identifier>:<timestamp>`
pub fn compute_hash_key(identifier: &str, timestamp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(combine(identifier, timestamp).as_bytes());
    hex::encode(hasher.finalize())
}

/// Current Unix time in milliseconds, as a base-10 string
pub fn current_timestamp_millis() -> String {
    Utc::now().timestamp_millis().to_string()
}
