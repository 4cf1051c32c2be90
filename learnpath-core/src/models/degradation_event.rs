use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records a subsystem falling back to a lower-quality mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

impl DegradationEvent {
    /// Record a fallback that just happened.
    pub fn now(component: &str, failure: &str, fallback_used: &str) -> Self {
        Self {
            component: component.to_string(),
            failure: failure.to_string(),
            fallback_used: fallback_used.to_string(),
            timestamp: Utc::now(),
        }
    }
}
