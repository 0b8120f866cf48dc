use cluegrid_core::{CategoryId, ClueSource, GameError, Result};
use cluegrid_protocol::{CategoryRecord, ClueRecord, Endpoint};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;

/// [`ClueSource`] backed by `fetch` against the remote catalog.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpSource {
    endpoint: Endpoint,
}

impl HttpSource {
    pub(crate) fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::trace!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| transport_error(url, err))?;

        if !response.ok() {
            return Err(GameError::Transport(format!(
                "{} answered {} {}",
                url,
                response.status(),
                response.status_text()
            )));
        }

        response
            .json()
            .await
            .map_err(|err| transport_error(url, err))
    }
}

fn transport_error(url: &str, err: gloo::net::Error) -> GameError {
    log::error!("request to {} failed: {}", url, err);
    GameError::Transport(format!("{}: {}", url, err))
}

impl ClueSource for HttpSource {
    async fn categories(&self, count: u16, offset: u32) -> Result<Vec<CategoryRecord>> {
        self.get_json(&self.endpoint.categories(count, offset)).await
    }

    async fn clues(&self, id: CategoryId) -> Result<Vec<ClueRecord>> {
        self.get_json(&self.endpoint.clues(id)).await
    }
}
