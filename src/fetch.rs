//! HTTP request helper for the Paprika sync API

use std::time::Duration;

use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client, Method, RequestBuilder,
};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::error::{Error, Result};

/// The `{"result": ...}` object wrapping every sync API payload.
/// Any other top-level fields are ignored.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: T,
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: Url,
    method: Method,
    headers: HeaderMap,
    basic_auth: Option<(String, String)>,
    timeout: Option<Duration>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: Url, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            client,
            url,
            method,
            headers,
            basic_auth: None,
            timeout: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: HeaderName, value: &str) -> Result<Self> {
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::general(format!("invalid value for header {}: {:?}", name, value)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Add HTTP Basic authentication to the request
    pub fn basic_auth(mut self, username: &str, password: &str) -> Self {
        self.basic_auth = Some((username.to_string(), password.to_string()));
        self
    }

    /// Limit how long the whole request may take
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The URL this request targets
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn build(&self) -> RequestBuilder {
        let mut req = self
            .client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers.clone());

        if let Some((username, password)) = &self.basic_auth {
            req = req.basic_auth(username, Some(password));
        }

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        req
    }

    /// Execute the request, check the status and return the envelope's `result`
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T> {
        let response = self.execute_raw().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&text)?;
        Ok(envelope.result)
    }

    /// Execute the request and return the raw response
    pub async fn execute_raw(&self) -> Result<reqwest::Response> {
        debug!("{} {}", self.method, self.url);
        let response = self.build().send().await?;
        debug!("{} {} -> {}", self.method, self.url, response.status());
        Ok(response)
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get(client: &Client, url: Url) -> FetchBuilder<'_> {
        FetchBuilder::new(client, url, Method::GET)
    }
}
