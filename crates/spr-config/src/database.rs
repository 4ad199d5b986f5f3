//! Store location and startup behaviour.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "spr.db".to_string()
}

const fn default_seed_sample_data() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Insert sample students, an offer and an internship when the store is empty.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
