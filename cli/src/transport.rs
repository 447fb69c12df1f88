//! Executes `todo-core` requests over blocking HTTP.

use thiserror::Error;
use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: ureq::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

/// One agent per process. Non-2xx statuses come back as responses so they
/// are printed like any other answer.
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

pub fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, CliError> {
    debug!(method = req.method.as_str(), path = %req.path, "sending request");

    let path = req.path;
    let headers = req.headers;
    let sent = match (req.method, req.body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&path), &headers).call(),
        (HttpMethod::Post, Some(body)) => {
            with_headers(agent.post(&path), &headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&path), &headers).send_empty(),
        (HttpMethod::Delete, Some(body)) => {
            with_headers(agent.delete(&path).force_send_body(), &headers).send(body.as_bytes())
        }
        (HttpMethod::Delete, None) => with_headers(agent.delete(&path), &headers).call(),
    };
    let mut response = sent.map_err(|source| CliError::Transport {
        path: path.clone(),
        source,
    })?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|source| CliError::Transport { path, source })?;
    debug!(status, "received response");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
