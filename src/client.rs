use crate::{
    apis::{
        AdminApi, AgentApi, AnalyticsApi, AuthApi, BriefApi, BuyerApi, InspectionApi,
        LandownerApi, PreferenceApi, PropertyApi, TestimonialApi, VerificationApi,
    },
    auth::CredentialStore,
    config::ClientConfig,
    envelope::{ApiResponse, RawResponse},
    error::ClientResult,
    models::{prefer_rows, Listing, QueryPairs},
};
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use url::{form_urlencoded, Url};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Form(Vec<(String, String)>),
}

/// Description of a single API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    endpoint: String,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    include_auth: bool,
}

impl ApiRequest {
    /// A request for `endpoint`, relative to the configured base URL
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
            headers: HeaderMap::new(),
            include_auth: true,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attach a JSON body
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Serialize and attach a JSON body
    pub fn json_from<B: Serialize + ?Sized>(self, body: &B) -> ClientResult<Self> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    /// Attach a form-urlencoded body and the matching Content-Type
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(pairs));
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        self
    }

    /// Append query parameters
    pub fn query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set a header that overrides the client defaults
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Send without the bearer credential
    pub fn without_auth(mut self) -> Self {
        self.include_auth = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn includes_auth(&self) -> bool {
        self.include_auth
    }
}

/// Admin console API client
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    config: ClientConfig,
    credentials: Arc<dyn CredentialStore>,
}

impl AdminClient {
    /// Create a new client reading its bearer credential from `credentials`
    pub fn new(
        config: ClientConfig,
        credentials: impl CredentialStore + 'static,
    ) -> ClientResult<Self> {
        let client = Client::builder().user_agent(config.user_agent()).build()?;

        Ok(Self::with_client(client, config, credentials))
    }

    /// Create a new client configured from the environment
    pub fn from_env(credentials: impl CredentialStore + 'static) -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?, credentials)
    }

    /// Create a new client with custom reqwest client
    pub fn with_client(
        client: Client,
        config: ClientConfig,
        credentials: impl CredentialStore + 'static,
    ) -> Self {
        Self {
            client,
            config,
            credentials: Arc::new(credentials),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }

    /// Get Auth API
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Get Inspection API
    pub fn inspections(&self) -> InspectionApi<'_> {
        InspectionApi::new(self)
    }

    /// Get Agent API
    pub fn agents(&self) -> AgentApi<'_> {
        AgentApi::new(self)
    }

    /// Get Landowner API
    pub fn landowners(&self) -> LandownerApi<'_> {
        LandownerApi::new(self)
    }

    /// Get Property API
    pub fn properties(&self) -> PropertyApi<'_> {
        PropertyApi::new(self)
    }

    /// Get Buyer API
    pub fn buyers(&self) -> BuyerApi<'_> {
        BuyerApi::new(self)
    }

    /// Get Brief API
    pub fn briefs(&self) -> BriefApi<'_> {
        BriefApi::new(self)
    }

    /// Get Preference API
    pub fn preferences(&self) -> PreferenceApi<'_> {
        PreferenceApi::new(self)
    }

    /// Get Admin API
    pub fn admins(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    /// Get Analytics API
    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    /// Get Verification API
    pub fn verification(&self) -> VerificationApi<'_> {
        VerificationApi::new(self)
    }

    /// Get Testimonial API
    pub fn testimonials(&self) -> TestimonialApi<'_> {
        TestimonialApi::new(self)
    }

    /// GET `endpoint` with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> ApiResponse<T> {
        self.send(ApiRequest::get(endpoint).query(query)).await
    }

    /// POST a JSON body to `endpoint`
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::post(endpoint), body).await
    }

    /// PUT a JSON body to `endpoint`
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::put(endpoint), body).await
    }

    /// PATCH a JSON body to `endpoint`
    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(ApiRequest::patch(endpoint), body).await
    }

    /// DELETE `endpoint`
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.send(ApiRequest::delete(endpoint)).await
    }

    pub(crate) async fn send_json<T, B>(&self, request: ApiRequest, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match request.json_from(body) {
            Ok(request) => self.send(request).await,
            Err(err) => {
                warn!("Failed to serialize request body: {}", err);
                ApiResponse::from_error(&err)
            }
        }
    }

    /// GET a list endpoint whose rows sit under `rows_key` (e.g. `agents`)
    /// when the server answers with a flat object.
    pub(crate) async fn get_listing<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        rows_key: &str,
        query: QueryPairs,
    ) -> ApiResponse<Listing<T>> {
        let mut response = self.send_raw(ApiRequest::get(endpoint).query(query)).await;
        if let Some(payload) = response.data.as_mut() {
            prefer_rows(payload, rows_key);
        }
        response.decode()
    }

    /// Execute a request and decode the normalized payload into `T`
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResponse<T> {
        self.send_raw(request).await.decode()
    }

    /// Execute a request and return the normalized, untyped envelope.
    ///
    /// Never fails: transport errors, error statuses and malformed bodies all
    /// come back as `success: false`.
    pub async fn send_raw(&self, request: ApiRequest) -> ApiResponse<Value> {
        let method = request.method.clone();
        let endpoint = request.endpoint.clone();

        match self.execute(request).await {
            Ok(raw) => {
                let response = raw.normalize();
                if !response.success {
                    warn!(
                        "HTTP {} {} failed: {}",
                        method,
                        endpoint,
                        response.error_message()
                    );
                }
                response
            }
            Err(err) => {
                warn!("HTTP {} {} errored: {}", method, endpoint, err);
                ApiResponse::from_error(&err)
            }
        }
    }

    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let url = self.build_url(&request.endpoint, &request.query)?;
        let headers = self.build_headers(&request).await?;
        debug!("HTTP {} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .headers(headers);

        if request.method != Method::GET {
            match request.body {
                Some(RequestBody::Json(value)) => {
                    debug!("Request body: {}", value);
                    builder = builder.body(serde_json::to_string(&value)?);
                }
                Some(RequestBody::Form(pairs)) => {
                    let encoded = form_urlencoded::Serializer::new(String::new())
                        .extend_pairs(pairs.iter())
                        .finish();
                    builder = builder.body(encoded);
                }
                None => {}
            }
        }

        let response = builder.send().await?;
        let status = response.status();

        // Expire the session before anything else can fail
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(
                "HTTP {} on {}, clearing stored credential",
                status.as_u16(),
                request.endpoint
            );
            self.credentials.clear().await;
        }

        let text = response.text().await?;
        debug!("HTTP {} response, {} bytes", status.as_u16(), text.len());

        Ok(RawResponse::parse(status, &text))
    }

    /// `base_url + endpoint`, with query parameters appended
    fn build_url(&self, endpoint: &str, query: &[(String, String)]) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url(), endpoint))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }

    async fn build_headers(&self, request: &ApiRequest) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if request.include_auth {
            self.credentials.apply_auth(&mut headers).await?;
        }

        for (name, value) in request.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        Ok(headers)
    }
}

/// Percent-encode an id for use as a path segment
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::NoCredentials;

    fn client(base: &str) -> AdminClient {
        AdminClient::new(ClientConfig::new(base).unwrap(), NoCredentials).unwrap()
    }

    #[test]
    fn url_keeps_base_path_and_encodes_query() {
        let client = client("http://localhost:5000/api/");
        let url = client
            .build_url(
                "/agents",
                &[
                    ("page".to_string(), "1".to_string()),
                    ("search".to_string(), "a&b c".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/agents?page=1&search=a%26b+c"
        );
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let client = client("http://localhost:5000/api");
        let url = client.build_url("/dashboard/stats", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/dashboard/stats");
    }

    #[tokio::test]
    async fn caller_headers_override_defaults() {
        let client = client("http://localhost:5000/api");
        let request = ApiRequest::post("/x").form(vec![("a".to_string(), "b".to_string())]);
        let headers = client.build_headers(&request).await.unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), FORM_CONTENT_TYPE);
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
