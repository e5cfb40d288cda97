use serde::{Deserialize, Serialize};
use serde_json::Value;

// Guest profile persisted for downstream reads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub guest_id: String,
    pub display_name: String,
    pub metadata: Option<Value>,
}
