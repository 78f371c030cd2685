//! Payment gateway configuration.

use serde::{Deserialize, Serialize};

/// Payment gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Provider name stamped on execution records.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Simulated processing latency in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Percentage of attempts the simulator approves (0..=100).
    #[serde(default = "default_success_rate")]
    pub success_rate: u8,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            latency_ms: default_latency_ms(),
            success_rate: default_success_rate(),
        }
    }
}

fn default_provider() -> String {
    "MOCK_GATEWAY".to_string()
}

const fn default_latency_ms() -> u64 {
    1000
}

const fn default_success_rate() -> u8 {
    80
}
