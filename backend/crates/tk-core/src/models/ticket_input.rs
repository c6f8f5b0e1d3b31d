use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw ticket payload as received from a client, before validation.
///
/// Each field distinguishes "absent" (`None`) from "present" (`Some`), and a
/// present field keeps its raw JSON value so an explicit `null` or a wrong
/// type can be reported per field. Unknown keys (including `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketInput {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub priority: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
