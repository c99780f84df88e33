use serde::de::DeserializeOwned;
use shared_types::{ApiConfig, DashboardPayload, Envelope, FetchError, Role};

/// Client for the dashboard endpoints (`GET /api/{role}/{id}`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

/// Clients are equal when they target the same backend; needed to pass the
/// client through Dioxus context and props, `reqwest::Client` has no `PartialEq`.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ApiConfig::new(base_url))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for one dashboard. The identifier is sent as a single
    /// percent-encoded path segment.
    pub fn dashboard_url(&self, role: Role, id: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url,
            role.as_str(),
            urlencoding::encode(id)
        )
    }

    /// Fetch the dashboard payload for `id`. Issues exactly one request.
    pub async fn fetch_dashboard<T: DashboardPayload>(
        &self,
        id: &str,
    ) -> Result<Envelope<T>, FetchError> {
        let url = self.dashboard_url(T::ROLE, id);
        tracing::info!(role = %T::ROLE, %id, "fetching dashboard data");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "dashboard request failed");
                FetchError::network(e)
            })?;

        let status = resp.status().as_u16();
        tracing::debug!(%url, status, "dashboard response received");

        let body = resp.text().await.map_err(FetchError::network)?;
        decode_response(status, &body).inspect_err(|e| {
            tracing::warn!(role = %T::ROLE, %id, error = %e, "dashboard data unavailable");
        })
    }
}

/// Turn a status code and body into a payload.
///
/// Any non-2xx status is an error regardless of the body; a 2xx body must
/// parse as `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Http { status });
    }
    Ok(serde_json::from_str(body)?)
}
