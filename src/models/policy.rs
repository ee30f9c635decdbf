use serde::{Deserialize, Serialize};

/// Toggles supplied by the caller (config file or command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub enforce_distance: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            enforce_distance: true,
        }
    }
}
