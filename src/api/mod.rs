pub(crate) mod mock;

use crate::config::EnvConfig;
use crate::ideas::normalize::{normalize, normalize_all};
use crate::launch::endpoint::LaunchRecord;
use crate::launch::submit::{LaunchSink, LocalLaunchEndpoint};
use crate::models::{
    AuthRequest, AuthResponse, CreateIdeaRequest, Idea, UpdateLaunchParamsRequest,
    UploadResponse,
};
use crate::storage::{remove_key, save_string, save_user_to_storage, TOKEN_KEY, USER_KEY};
use futures::future::{select, Either};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse(e.to_string())
    }

    /// Prefer the server's `{message}` (or `{error}`) over the raw body.
    pub(crate) fn http(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "Request Error".to_string()
                } else {
                    body.trim().to_string()
                }
            });
        Self::Http { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Server-side listing filters for `GET /ideas`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdeaFilter {
    pub category: Option<String>,
    pub chain: Option<String>,
    pub idea_type: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 50;

impl IdeaFilter {
    /// Only present, non-empty filters are sent; `page`/`limit` always are.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        for (k, v) in [
            ("category", &self.category),
            ("chain", &self.chain),
            ("idea_type", &self.idea_type),
        ] {
            if let Some(v) = v.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((k, v.to_string()));
            }
        }
        pairs.push(("page", self.page.unwrap_or(DEFAULT_PAGE).max(1).to_string()));
        pairs.push(("limit", self.limit.unwrap_or(DEFAULT_LIMIT).to_string()));

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn path(&self) -> String {
        format!("/ideas?{}", self.query_string())
    }
}

/// Unwrap a `{ data: ... }` envelope; bare payloads pass through.
pub(crate) fn unwrap_envelope(v: Value) -> Value {
    match v {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// A list response is either a bare array or `{ data: [...] }`; anything else is empty.
pub(crate) fn list_from_response(v: Value) -> Vec<Value> {
    match unwrap_envelope(v) {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

fn decode<T: DeserializeOwned>(v: Value) -> ApiResult<T> {
    serde_json::from_value(unwrap_envelope(v)).map_err(ApiError::parse)
}

/// Race `fut` against a `ms` timer.
pub(crate) async fn with_timeout<F: Future>(fut: F, ms: u32) -> ApiResult<F::Output> {
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(ms));
    match select(fut, timer).await {
        Either::Left((out, _)) => Ok(out),
        Either::Right(_) => Err(ApiError::Timeout(ms)),
    }
}

/// One backend request: method, path, and optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiCall {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    fn with_body(mut self, body: &impl Serialize) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::parse)?);
        Ok(self)
    }

    pub fn list_ideas(filter: &IdeaFilter) -> Self {
        Self::new(Method::GET, filter.path())
    }

    pub fn get_idea(id: i64) -> Self {
        Self::new(Method::GET, format!("/ideas/{id}"))
    }

    pub fn create_idea(req: &CreateIdeaRequest) -> ApiResult<Self> {
        Self::new(Method::POST, "/ideas").with_body(req)
    }

    pub fn update_idea(id: i64, req: &CreateIdeaRequest) -> ApiResult<Self> {
        Self::new(Method::PUT, format!("/ideas/{id}")).with_body(req)
    }

    pub fn update_launch_params(id: i64, req: &UpdateLaunchParamsRequest) -> ApiResult<Self> {
        Self::new(Method::PUT, format!("/ideas/{id}/launch")).with_body(req)
    }

    pub fn delete_idea(id: i64) -> Self {
        Self::new(Method::DELETE, format!("/ideas/{id}"))
    }

    pub fn login(auth: &AuthRequest) -> ApiResult<Self> {
        Self::new(Method::POST, "/auth/login").with_body(auth)
    }

    pub fn profile() -> Self {
        Self::new(Method::GET, "/auth/profile")
    }

    pub fn submit_launch(record: &LaunchRecord) -> ApiResult<Self> {
        Self::new(Method::POST, "/api/launch").with_body(record)
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
    pub(crate) use_mock: bool,
    pub(crate) timeout_ms: u32,
}

impl ApiClient {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
            token: None,
            use_mock: config.use_mock,
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn load_from_storage(config: &EnvConfig) -> Self {
        let mut client = Self::new(config);
        client.token = crate::storage::load_string(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        client
    }

    pub fn save_to_storage(&self) {
        if let Some(token) = &self.token {
            save_string(TOKEN_KEY, token);
        }
    }

    pub fn clear_storage() {
        remove_key(TOKEN_KEY);
        remove_key(USER_KEY);
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Take the token from a login reply. Returns false for an empty token.
    pub(crate) fn adopt_login(&mut self, response: &AuthResponse) -> bool {
        let token = response.token.trim();
        if token.is_empty() {
            return false;
        }
        self.set_token(token.to_string());
        true
    }

    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_mock(&self) -> bool {
        self.use_mock
    }

    /// Drop the token after a 401 or an explicit sign-out.
    pub fn logout(&mut self) {
        self.token = None;
        Self::clear_storage();
    }

    fn get_auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn with_auth_headers(
        mut req: reqwest::RequestBuilder,
        auth_header: Option<String>,
    ) -> reqwest::RequestBuilder {
        if let Some(header) = auth_header {
            req = req.header("Authorization", header);
        }
        req
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<Value> {
        let req = Self::with_auth_headers(req, self.get_auth_header());

        let exchange = async move {
            let res = req.send().await.map_err(ApiError::network)?;
            let status = res.status();

            if status.as_u16() == 401 {
                // A stale token must not be replayed on the next request.
                remove_key(TOKEN_KEY);
                return Err(ApiError::Unauthorized);
            }

            let body = res.text().await.map_err(ApiError::network)?;
            if !status.is_success() {
                return Err(ApiError::http(status.as_u16(), &body));
            }
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&body).map_err(ApiError::parse)
        };

        with_timeout(exchange, self.timeout_ms).await?
    }

    async fn send(&self, call: ApiCall) -> ApiResult<Value> {
        let client = reqwest::Client::new();
        let mut req = client
            .request(call.method, self.url(&call.path))
            .header("Accept", "application/json");
        if let Some(body) = &call.body {
            req = req.json(body);
        }
        self.execute(req).await
    }

    pub async fn get_ideas(&self, filter: &IdeaFilter) -> ApiResult<Vec<Idea>> {
        if self.use_mock {
            return Ok(mock::query_ideas(filter));
        }

        let data = self.send(ApiCall::list_ideas(filter)).await?;
        let ideas = normalize_all(&list_from_response(data));
        log::debug!("loaded {} ideas", ideas.len());
        Ok(ideas)
    }

    pub async fn get_idea(&self, id: i64) -> ApiResult<Idea> {
        if self.use_mock {
            return mock::find_idea(id).ok_or_else(|| ApiError::Http {
                status: 404,
                message: format!("Idea {id} not found"),
            });
        }

        let data = self.send(ApiCall::get_idea(id)).await?;
        normalize(&unwrap_envelope(data))
            .ok_or_else(|| ApiError::Parse(format!("idea {id} has no usable id")))
    }

    pub async fn create_idea(&self, req: &CreateIdeaRequest) -> ApiResult<Idea> {
        let data = self.send(ApiCall::create_idea(req)?).await?;
        normalize(&unwrap_envelope(data))
            .ok_or_else(|| ApiError::Parse("created idea has no usable id".to_string()))
    }

    pub async fn update_idea(&self, id: i64, req: &CreateIdeaRequest) -> ApiResult<Idea> {
        let data = self.send(ApiCall::update_idea(id, req)?).await?;
        normalize(&unwrap_envelope(data))
            .ok_or_else(|| ApiError::Parse(format!("updated idea {id} has no usable id")))
    }

    pub async fn update_launch_params(
        &self,
        id: i64,
        req: &UpdateLaunchParamsRequest,
    ) -> ApiResult<()> {
        self.send(ApiCall::update_launch_params(id, req)?)
            .await
            .map(|_| ())
    }

    pub async fn delete_idea(&self, id: i64) -> ApiResult<()> {
        self.send(ApiCall::delete_idea(id)).await.map(|_| ())
    }

    pub async fn login(&mut self, auth: &AuthRequest) -> ApiResult<AuthResponse> {
        let data = self.send(ApiCall::login(auth)?).await?;
        let response: AuthResponse = decode(data)?;
        if self.adopt_login(&response) {
            self.save_to_storage();
            save_user_to_storage(&response.user);
        }
        Ok(response)
    }

    pub async fn get_profile(&self) -> ApiResult<Value> {
        self.send(ApiCall::profile()).await.map(unwrap_envelope)
    }

    pub async fn upload_file(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<UploadResponse> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(ApiError::network)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let client = reqwest::Client::new();
        let req = client.post(self.url("/upload")).multipart(form);
        decode(self.execute(req).await?)
    }

    /// Index a launched idea. In mock mode the endpoint runs in-process.
    pub async fn submit_launch(&self, record: &LaunchRecord) -> ApiResult<String> {
        if self.use_mock {
            return LocalLaunchEndpoint.persist(record).await;
        }

        let data = self.send(ApiCall::submit_launch(record)?).await?;
        Ok(data
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("OK")
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new(&EnvConfig::from_values(
            Some("http://localhost:8181".to_string()),
            None,
            None,
        ))
    }

    #[test]
    fn test_query_string_includes_only_present_filters() {
        let f = IdeaFilter {
            category: Some("NFT Ideas".to_string()),
            chain: Some(String::new()),
            idea_type: None,
            page: None,
            limit: None,
        };
        assert_eq!(f.query_string(), "category=NFT%20Ideas&page=1&limit=50");
        assert_eq!(f.path(), "/ideas?category=NFT%20Ideas&page=1&limit=50");
    }

    #[test]
    fn test_query_string_all_filters() {
        let f = IdeaFilter {
            category: Some("free".to_string()),
            chain: Some("sol".to_string()),
            idea_type: Some("dao".to_string()),
            page: Some(3),
            limit: Some(8),
        };
        assert_eq!(
            f.query_string(),
            "category=free&chain=sol&idea_type=dao&page=3&limit=8"
        );
    }

    #[test]
    fn test_page_zero_is_raised_to_one() {
        let f = IdeaFilter {
            page: Some(0),
            ..Default::default()
        };
        assert_eq!(f.query_string(), "page=1&limit=50");
    }

    #[test]
    fn test_list_from_response_accepts_bare_array_and_envelope() {
        assert_eq!(list_from_response(json!([{"id": 1}])).len(), 1);
        assert_eq!(
            list_from_response(json!({"success": true, "data": [{"id": 1}, {"id": 2}]})).len(),
            2
        );
        assert!(list_from_response(json!({"success": true})).is_empty());
        assert!(list_from_response(json!({"data": null})).is_empty());
    }

    #[test]
    fn test_decode_unwraps_envelope() {
        let v = json!({"success": true, "data": {"url": "https://x/y.png", "filename": "y.png"}});
        let parsed: UploadResponse = decode(v).expect("upload response should parse");
        assert_eq!(parsed.filename, "y.png");
    }

    #[test]
    fn test_http_error_prefers_server_message() {
        let e = ApiError::http(400, r#"{"message": "Missing required fields"}"#);
        assert_eq!(e.to_string(), "HTTP 400: Missing required fields");

        let e = ApiError::http(500, "");
        assert_eq!(e.to_string(), "HTTP 500: Request Error");

        let e = ApiError::http(502, "Bad Gateway");
        assert_eq!(e.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_api_client_new_has_no_token() {
        let c = client();
        assert_eq!(c.base_url, "http://localhost:8181");
        assert!(c.get_auth_header().is_none());
        assert!(!c.is_authenticated());
        assert_eq!(c.timeout_ms, 15_000);
    }

    #[test]
    fn test_api_client_auth_header_with_token() {
        let mut c = client();
        c.set_token("my-jwt-token".to_string());
        assert!(c.is_authenticated());
        assert_eq!(c.get_auth_header().as_deref(), Some("Bearer my-jwt-token"));
    }

    #[test]
    fn test_idea_write_calls_target_backend_routes() {
        let req = CreateIdeaRequest {
            name: "Idea".to_string(),
            description: "d".to_string(),
            icon: "💡".to_string(),
            idea_type: Some("nft".to_string()),
            ..Default::default()
        };

        let create = ApiCall::create_idea(&req).expect("create call");
        assert_eq!(create.method, Method::POST);
        assert_eq!(create.path, "/ideas");
        let body = create.body.expect("create body");
        assert_eq!(body["name"], "Idea");
        assert_eq!(body["type"], "nft");
        assert!(body.get("chain").is_none());

        let update = ApiCall::update_idea(4, &req).expect("update call");
        assert_eq!((update.method, update.path.as_str()), (Method::PUT, "/ideas/4"));

        let launch = ApiCall::update_launch_params(
            4,
            &UpdateLaunchParamsRequest {
                price_eth: Some(0.1),
                twitter: Some("@me".to_string()),
                ..Default::default()
            },
        )
        .expect("launch params call");
        assert_eq!((launch.method, launch.path.as_str()), (Method::PUT, "/ideas/4/launch"));
        assert_eq!(
            launch.body,
            Some(json!({"price_eth": 0.1, "twitter": "@me"}))
        );

        let delete = ApiCall::delete_idea(4);
        assert_eq!((delete.method, delete.path.as_str()), (Method::DELETE, "/ideas/4"));
        assert!(delete.body.is_none());
    }

    #[test]
    fn test_read_and_auth_calls() {
        let list = ApiCall::list_ideas(&IdeaFilter {
            chain: Some("sol".to_string()),
            ..Default::default()
        });
        assert_eq!(list.method, Method::GET);
        assert_eq!(list.path, "/ideas?chain=sol&page=1&limit=50");
        assert_eq!(ApiCall::get_idea(9).path, "/ideas/9");

        let profile = ApiCall::profile();
        assert_eq!((profile.method, profile.path.as_str()), (Method::GET, "/auth/profile"));

        let login = ApiCall::login(&AuthRequest {
            wallet_address: "0xabc".to_string(),
            signature: "sig".to_string(),
            message: "hello".to_string(),
        })
        .expect("login call");
        assert_eq!((login.method, login.path.as_str()), (Method::POST, "/auth/login"));
        assert_eq!(
            login.body,
            Some(json!({"wallet_address": "0xabc", "signature": "sig", "message": "hello"}))
        );
    }

    #[test]
    fn test_submit_launch_call_posts_record() {
        let record = crate::launch::LaunchForm::default().to_record("QmX", 5);
        let call = ApiCall::submit_launch(&record).expect("launch call");
        assert_eq!((call.method, call.path.as_str()), (Method::POST, "/api/launch"));
        assert_eq!(call.body.expect("launch body")["iconHash"], "QmX");
    }

    #[test]
    fn test_login_reply_sets_token_unless_empty() {
        let reply = |token: &str| AuthResponse {
            token: token.to_string(),
            user: crate::models::AuthUser {
                id: 1,
                wallet_address: "0xabc".to_string(),
                email: None,
                username: None,
                avatar_url: None,
            },
        };

        let mut c = client();
        assert!(!c.adopt_login(&reply("  ")));
        assert!(!c.is_authenticated());

        assert!(c.adopt_login(&reply("jwt")));
        assert_eq!(c.get_auth_header().as_deref(), Some("Bearer jwt"));
    }

    #[test]
    fn test_unauthorized_helper() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Timeout(15_000).is_unauthorized());
        assert_eq!(
            ApiError::Timeout(15_000).to_string(),
            "Request timed out after 15000 ms"
        );
    }
}
