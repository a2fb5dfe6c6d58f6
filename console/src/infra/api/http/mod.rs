//! HTTP [`Api`] implementation.

mod dto;
mod impls;

use std::time::Duration;

use derive_more::{Display, Error as StdError, From};
use reqwest::{header, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

use crate::{domain::Session, infra::api};
#[cfg(doc)]
use crate::infra::Api;

/// HTTP [`Api`] client of the remote REST backend.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying [`reqwest::Client`].
    client: reqwest::Client,

    /// Base URL every request path is appended to.
    base_url: String,

    /// [`Session`] authenticating every request.
    session: Session,
}

/// [`Http`] client configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the remote REST backend.
    #[default("http://localhost:8080".into())]
    pub base_url: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(30))]
    pub timeout: Duration,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`], acting on
    /// behalf of the provided [`Session`].
    ///
    /// # Errors
    ///
    /// If failed to create a new [`reqwest::Client`].
    pub fn new(
        conf: &Config,
        session: Session,
    ) -> Result<Self, Traced<api::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        Ok(Self {
            client,
            base_url: conf.base_url.trim_end_matches('/').to_owned(),
            session,
        })
    }

    /// Starts an authenticated request to the provided `path`.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.base_url))
            .header(header::AUTHORIZATION, self.session.bearer())
    }

    /// Sends the provided request, failing on a non-successful status.
    async fn send(
        &self,
        req: RequestBuilder,
    ) -> Result<Response, Traced<api::Error>> {
        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().clone();
        let message = resp.text().await.unwrap_or_default();
        log::warn!("`{url}` responded with `{status}`: {message}");
        Err(tracerr::new!(api::Error::Rejected {
            status: status.as_u16(),
            message,
        }))
    }

    /// Sends the provided request and decodes its JSON response body.
    async fn json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, Traced<api::Error>> {
        let body = self
            .send(req)
            .await
            .map_err(tracerr::wrap!())?
            .bytes()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        serde_json::from_slice(&body)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)
    }

    /// Sends the provided request and returns its plain text response body.
    async fn text(
        &self,
        req: RequestBuilder,
    ) -> Result<String, Traced<api::Error>> {
        self.send(req)
            .await
            .map_err(tracerr::wrap!())?
            .text()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)
    }
}

/// [`Http`] client error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request failed to be performed.
    #[display("request failed: {_0}")]
    Transport(reqwest::Error),

    /// Response body failed to be decoded.
    #[display("malformed response body: {_0}")]
    Decode(serde_json::Error),
}
