use serde::{Deserialize, Serialize};

/// Request body for `POST /people/search`.
#[derive(Debug, Clone, Serialize)]
pub struct PeopleSearchRequest {
    pub domain: String,
    pub title_keywords: Vec<String>,
    pub limit: u32,
}

/// Response envelope for `POST /people/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleSearchResponse {
    #[serde(default)]
    pub people: Vec<Person>,
}

/// A person stub returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub domain: Option<String>,
}

/// Request body for `POST /people/enrich`.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichRequest {
    pub first_name: String,
    pub last_name: String,
    pub company_domain: String,
    pub title: Option<String>,
}

/// Contact channels returned by the enrich endpoint. Any field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrichResponse {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
}
