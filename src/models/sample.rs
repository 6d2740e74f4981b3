// Raw telemetry: one polled snapshot with readings for possibly many servers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Queue reading for one server at one poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueReading {
    pub position: u32,
    #[serde(default)]
    pub last_updated: i64,
    #[serde(default)]
    pub region: String,
}

/// One timestamped snapshot. `timestamp` is epoch milliseconds and is the ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub timestamp: i64,
    #[serde(default)]
    pub data: BTreeMap<String, QueueReading>,
}

impl Sample {
    pub fn reading(&self, server_id: &str) -> Option<&QueueReading> {
        self.data.get(server_id)
    }
}
