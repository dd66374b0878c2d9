use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ApiError;

/// Version tag baked into the user agent, with a placeholder when the crate
/// is built outside cargo.
const CLIENT_VERSION: &str = match option_env!("CARGO_PKG_VERSION") {
    Some(version) => version,
    None => "local",
};

/// User-agent string sent with every request.
pub fn user_agent() -> String {
    format!("rust-inscription-v{CLIENT_VERSION}")
}

/// Configured JSON HTTP transport shared by the API clients.
///
/// Holds one `reqwest` client bound to a base URL with the service's default
/// headers (`x-api-key`, keep-alive, JSON content type) applied to every
/// request. Cheap to clone and safe to share across concurrent calls; no
/// network I/O happens at construction time.
///
/// Every response goes through the same normalization: non-success statuses
/// and request-level failures become [`ApiError::Transport`], and successful
/// bodies have their `{"data": ...}` envelope unwrapped before typed
/// deserialization.
#[derive(Clone, Debug)]
pub struct Transport {
    base_url: Url,
    http: reqwest::Client,
}

impl Transport {
    /// Creates a transport bound to `base_url` with the given API key.
    ///
    /// The URL is normalized to include a trailing slash, so relative endpoint
    /// paths join correctly. `timeout` caps each individual request; `None`
    /// leaves the client without a deadline.
    pub fn new(
        base_url: impl AsRef<str>,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url.as_ref())
            .map_err(|_| ApiError::InvalidBaseUrl(base_url.as_ref().to_owned()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|_| ApiError::InvalidApiKey)?,
        );
        headers.insert(header::CONNECTION, HeaderValue::from_static("Keep-Alive"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert("keep-alive", HeaderValue::from_static("timeout=10"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::from_transport)?;

        Ok(Self {
            base_url: ensure_trailing_slash(parsed),
            http,
        })
    }

    /// Base URL all endpoint paths are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a `GET` request and deserializes the normalized response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path)?;
        self.execute(self.http.get(url)).await
    }

    /// Sends a `GET` request with query parameters and deserializes the
    /// normalized response.
    pub(crate) async fn get_json_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path)?;
        self.execute(self.http.get(url).query(query)).await
    }

    /// Sends a `POST` request with a JSON body and deserializes the
    /// normalized response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path)?;
        self.execute(self.http.post(url).json(body)).await
    }

    /// Sends a `POST` request with a URL-encoded form body and deserializes
    /// the normalized response.
    ///
    /// The form content type replaces the default JSON one for this call.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(path)?;
        self.execute(self.http.post(url).form(fields)).await
    }

    /// Sends a request using a raw method and path.
    ///
    /// This bypasses the typed endpoint methods but keeps the client's
    /// configuration and response normalization. Returns [`Value::Null`] for
    /// successful responses with an empty body.
    pub async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.build_url(path)?;
        let mut request = self.http.request(method, url);
        if let Some(json_body) = body {
            request = request.json(&json_body);
        }
        self.execute(request).await
    }

    /// Single funnel for every outbound call: send, normalize failures into
    /// [`ApiError::Transport`], unwrap the `data` envelope, deserialize.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        let payload = response.text().await.map_err(ApiError::from_transport)?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &payload));
        }

        let body: Value = if payload.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&payload)?
        };

        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }

    fn build_url(&self, path: &str) -> Result<Url, ApiError> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|_| ApiError::InvalidPath(path.to_owned()))
    }
}

/// Unwraps the `{"data": ...}` envelope some responses use around the real
/// payload; anything without a top-level `data` field passes through
/// unchanged.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}
