use serde::{Deserialize, Serialize};

/// A titled group of sponsors/partners ("Gold", "Community", ...). Part of
/// the batch contract; sources without partner data write an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerGroup {
    pub title: String,
    pub partners: Vec<Partner>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub name: String,
    pub url: String,
    pub logo_url: String,
}
