//! Generic typed REST client bound to one base URL.
//!
//! # Design
//! `RestClient` holds only its base URL and a transport handle. Each operation
//! is split into a `build_*` step that produces an `HttpRequest` and a parse
//! step that turns the `HttpResponse` into a `Response<T>`; the transport runs
//! the exchange in between. The result type is chosen by the caller through a
//! type parameter, e.g. `client.get::<Vec<BookModel>>(BOOKS_PATH)`.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Response};
use crate::models::ErrorModel;
use crate::settings::Settings;
use crate::transport::{Transport, UreqTransport};

/// Synchronous REST client for one service root.
#[derive(Debug, Clone)]
pub struct RestClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl RestClient<UreqTransport> {
    /// Client for `settings.api_url` using a `ureq` agent with the configured
    /// connect timeout.
    pub fn new(settings: &Settings) -> Self {
        Self::with_transport(&settings.api_url, UreqTransport::new(settings.connect_timeout()))
    }
}

impl<T: Transport> RestClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str) -> Result<Response<R>, ClientError> {
        let req = self.build_get(path);
        self.exchange(req)
    }

    pub fn get_by_id<R: DeserializeOwned>(
        &self,
        path: &str,
        id: impl Display,
    ) -> Result<Response<R>, ClientError> {
        self.get(&format!("{path}/{id}"))
    }

    /// GET whose body is read as a problem-details payload.
    pub fn get_error(&self, path: &str) -> Result<Response<ErrorModel>, ClientError> {
        let req = self.build_get(path);
        self.exchange(req)
    }

    pub fn get_error_by_id(
        &self,
        path: &str,
        id: impl Display,
    ) -> Result<Response<ErrorModel>, ClientError> {
        self.get_error(&format!("{path}/{id}"))
    }

    pub fn post<B, R>(&self, path: &str, body: &B) -> Result<Response<R>, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let req = self.build_post(path, body)?;
        self.exchange(req)
    }

    pub fn put<B, R>(&self, path: &str, id: impl Display, body: &B) -> Result<Response<R>, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let req = self.build_put(path, id, body)?;
        self.exchange(req)
    }

    /// DELETE never yields a body, whatever `R` is.
    pub fn delete<R>(&self, path: &str, id: impl Display) -> Result<Response<R>, ClientError> {
        let req = self.build_delete(path, id);
        let response = self.send(req)?;
        Ok(Response::new(response.status, None))
    }

    pub fn build_get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ClientError> {
        let url = format!("{}{path}", self.base_url);
        json_request(HttpMethod::Post, url, body)
    }

    pub fn build_put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        id: impl Display,
        body: &B,
    ) -> Result<HttpRequest, ClientError> {
        let url = format!("{}{path}/{id}", self.base_url);
        json_request(HttpMethod::Put, url, body)
    }

    pub fn build_delete(&self, path: &str, id: impl Display) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{path}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn exchange<R: DeserializeOwned>(&self, req: HttpRequest) -> Result<Response<R>, ClientError> {
        let method = req.method;
        let url = req.url.clone();
        let response = self.send(req)?;
        parse_response(method, &url, response)
    }

    fn send(&self, req: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = req.method;
        let url = req.url.clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self
            .transport
            .execute(req)
            .map_err(|source| ClientError::Transport {
                method,
                url: url.clone(),
                source,
            })?;

        tracing::debug!(
            %method,
            %url,
            status = response.status,
            content_type = response.header("content-type").unwrap_or_default(),
            bytes = response.body.len(),
            "received response"
        );
        Ok(response)
    }
}

fn json_request<B: Serialize + ?Sized>(
    method: HttpMethod,
    url: String,
    body: &B,
) -> Result<HttpRequest, ClientError> {
    let body = match serde_json::to_string(body) {
        Ok(body) => body,
        Err(source) => return Err(ClientError::Serialization { method, url, source }),
    };
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Blank bodies are "no value"; anything else must parse as `R`.
fn parse_response<R: DeserializeOwned>(
    method: HttpMethod,
    url: &str,
    response: HttpResponse,
) -> Result<Response<R>, ClientError> {
    if response.body.trim().is_empty() {
        return Ok(Response::new(response.status, None));
    }
    let body = serde_json::from_str(&response.body).map_err(|source| ClientError::Deserialization {
        method,
        url: url.to_string(),
        source,
    })?;
    Ok(Response::new(response.status, Some(body)))
}
