use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterConfig {
    // animated "recomputing" marker next to amounts, off in test runs
    pub show_heartbeat: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            show_heartbeat: true,
        }
    }
}

impl FormatterConfig {
    pub fn for_tests() -> Self {
        Self {
            show_heartbeat: false,
        }
    }
}
