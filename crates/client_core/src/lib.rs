use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::KeywordSource,
    error::ErrorKind,
    protocol::{
        EchoRequest, EchoResponse, HealthResponse, HelloResponse, SearchRequest, SearchResponse,
        SearchResults, STATUS_SUCCESS,
    },
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },
    #[error("{message}")]
    Application { message: String },
    #[error("{message}")]
    Validation { message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Http { .. } => ErrorKind::Http,
            ClientError::Application { .. } => ErrorKind::Application,
            ClientError::Validation { .. } => ErrorKind::Validation,
            ClientError::Transport(_) => ErrorKind::Transport,
        }
    }
}

/// A successful `/api/search-keyword` exchange: the backend's summary line
/// plus the structured results.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub message: String,
    pub results: SearchResults,
}

/// Builds the search request body for a keyword source, applying the one
/// validation rule the front-ends share: a custom-source search needs a
/// non-empty trimmed keyword. Sheet-source searches send an empty keyword
/// and rely on the backend's spreadsheet default.
pub fn build_search_request(
    source: KeywordSource,
    keyword: &str,
) -> Result<SearchRequest, ClientError> {
    let keyword = keyword.trim();
    if source.use_custom() && keyword.is_empty() {
        return Err(ClientError::Validation {
            message: "Please enter a keyword or switch to the spreadsheet keyword.".to_string(),
        });
    }
    Ok(SearchRequest {
        use_custom: source.use_custom(),
        keyword: if source.use_custom() {
            keyword.to_string()
        } else {
            String::new()
        },
    })
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unrecognized status")
        .to_string()
}

fn expect_2xx(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Http {
            status: status.as_u16(),
            detail: status_text(status),
        })
    }
}

pub struct BackendClient {
    http: Client,
    server_url: String,
}

impl BackendClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            server_url,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn hello(&self) -> Result<HelloResponse, ClientError> {
        debug!(server_url = %self.server_url, "requesting greeting");
        let response = self
            .http
            .get(format!("{}/api/hello", self.server_url))
            .send()
            .await?;
        let response = expect_2xx(response)?;
        Ok(response.json().await?)
    }

    pub async fn echo(&self, request: &EchoRequest) -> Result<EchoResponse, ClientError> {
        debug!(random_number = request.random_number, "posting echo payload");
        let response = self
            .http
            .post(format!("{}/api/echo", self.server_url))
            .json(request)
            .send()
            .await?;
        let response = expect_2xx(response)?;
        Ok(response.json().await?)
    }

    pub async fn search_keyword(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchOutcome, ClientError> {
        debug!(use_custom = request.use_custom, "starting keyword search");
        let response = self
            .http
            .post(format!("{}/api/search-keyword", self.server_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The backend reports search failures through the envelope's own
            // message; fold it into the error when the body parses.
            let detail = match response.json::<SearchResponse>().await {
                Ok(body) if !body.message.is_empty() => body.message,
                _ => status_text(status),
            };
            return Err(ClientError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SearchResponse = response.json().await?;
        if body.status != STATUS_SUCCESS {
            let message = if body.message.is_empty() {
                "Unknown error occurred".to_string()
            } else {
                body.message
            };
            return Err(ClientError::Application { message });
        }
        let results = body.results.ok_or_else(|| ClientError::Application {
            message: "Search reported success but returned no results".to_string(),
        })?;
        Ok(SearchOutcome {
            message: body.message,
            results,
        })
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.server_url))
            .send()
            .await?;
        let response = expect_2xx(response)?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
