use serde::Deserialize;

/// Query parameters accepted on the DoH GET endpoint.
#[derive(Deserialize, Debug, Default)]
pub struct DohParams {
    pub dns: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}
