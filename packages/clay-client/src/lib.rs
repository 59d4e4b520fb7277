//! Pure Clay REST API client.
//!
//! A minimal client for the Clay platform API. Supports searching for people
//! at a company domain and enriching a person with contact channels.
//!
//! # Example
//!
//! ```rust,ignore
//! use clay_client::ClayClient;
//!
//! let client = ClayClient::new("your-api-key".into());
//!
//! let people = client.find_people("leanderisd.org", &titles, 10).await?;
//! for person in &people {
//!     println!("{}", person.full_name.as_deref().unwrap_or("(unnamed)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ClayError, Result};
pub use types::{EnrichRequest, EnrichResponse, PeopleSearchRequest, Person};

use types::PeopleSearchResponse;

const BASE_URL: &str = "https://api.clay.com/v1";

#[derive(Clone)]
pub struct ClayClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ClayClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search for people at a company by domain, filtered by title keywords.
    pub async fn find_people(
        &self,
        domain: &str,
        title_keywords: &[String],
        limit: u32,
    ) -> Result<Vec<Person>> {
        let request = PeopleSearchRequest {
            domain: domain.to_string(),
            title_keywords: title_keywords.to_vec(),
            limit,
        };

        let url = format!("{}/people/search", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search: PeopleSearchResponse = resp.json().await?;
        tracing::debug!(domain, count = search.people.len(), "People search returned");
        Ok(search.people)
    }

    /// Enrich a person with email, phone, and LinkedIn URL.
    pub async fn enrich_person(&self, request: &EnrichRequest) -> Result<EnrichResponse> {
        let url = format!("{}/people/enrich", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let channels: EnrichResponse = resp.json().await?;
        Ok(channels)
    }
}
