use serde::{Deserialize, Serialize};

/// Raw input field contents, persisted so the last run's numbers come back on
/// restart. Results are never stored.
#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub deposit: String,
    pub rate: String,
    pub years: String,
}
