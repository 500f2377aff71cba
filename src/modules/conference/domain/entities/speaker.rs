use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub photo_url: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
    pub company_logo_url: Option<String>,
    pub links: Vec<Link>,
}

/// An external link attached to a speaker profile (homepage, socials, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub key: String,
    pub url: String,
}
