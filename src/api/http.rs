use super::{ApiError, ApiRequest, ApiResponse, ClinicApi, Method};

/// `reqwest`-backed transport. Cheap to clone; clones share one connection
/// pool.
#[derive(Clone)]
pub struct HttpClinicApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClinicApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        HttpClinicApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ClinicApi for HttpClinicApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        log::debug!("{} {}", request.method, url);
        let res = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
