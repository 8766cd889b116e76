use std::io::Write;
use tracing::debug;

use crate::{combine, compute_hash_key, current_timestamp_millis, HashResult, OTP_METHOD, SEND_OTP_URL};

/// Everything computed for a single identifier/timestamp pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    pub identifier: String,
    pub timestamp: String,
    pub combined: String,
    pub hash_key: String,
}

impl GeneratedKey {
    /// Resolve the timestamp (now, in ms, when absent) and hash `<identifier>:<timestamp>`
    pub fn new(identifier: &str, timestamp: Option<&str>) -> Self {
        let timestamp = match timestamp {
            Some(ts) => ts.to_string(),
            None => {
                let now = current_timestamp_millis();
                debug!("No timestamp supplied, using current time: {}", now);
                now
            }
        };

        let combined = combine(identifier, &timestamp);
        let hash_key = compute_hash_key(identifier, &timestamp);

        Self {
            identifier: identifier.to_string(),
            timestamp,
            combined,
            hash_key,
        }
    }

    /// JSON body for the send endpoint. Values are embedded verbatim, without escaping.
    pub fn request_body(&self) -> String {
        format!(
            r#"{{"phone":"{}","method":"{}","hashKey":"{}","timestamp":"{}"}}"#,
            self.identifier, OTP_METHOD, self.hash_key, self.timestamp
        )
    }

    /// Human-readable report followed by a curl command for the send endpoint
    pub fn report(&self) -> String {
        let lines = [
            format!("Identifier: {}", self.identifier),
            format!("Timestamp: {}", self.timestamp),
            format!("Combined: {}", self.combined),
            format!("Hash Key: {}", self.hash_key),
            String::new(),
            "cURL Command:".to_string(),
            format!("curl -X POST {} \\", SEND_OTP_URL),
            "  -H \"Content-Type: application/json\" \\".to_string(),
            format!("  -d '{}'", self.request_body()),
            String::new(),
        ];

        lines.join("\n")
    }
}

/// Generate the hash key, write the report to `out`, and return `(hash_key, timestamp)`
pub fn generate_hash<W: Write>(
    identifier: &str,
    timestamp: Option<&str>,
    out: &mut W,
) -> HashResult<(String, String)> {
    let key = GeneratedKey::new(identifier, timestamp);
    debug!("Generated hash key for identifier: {}", key.identifier);

    out.write_all(key.report().as_bytes())?;
    out.flush()?;

    Ok((key.hash_key, key.timestamp))
}
