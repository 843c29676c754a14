use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{
    ApiErrorPayload, Period, RecentTracks, RecentTracksResponse, TopArtists, TopArtistsResponse,
};

pub const LASTFM_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

const RECENT_TRACKS_LIMIT: &str = "1";
const TOP_ARTISTS_LIMIT: &str = "10";

/// Read operations the dispatcher needs from last.fm.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Scrobbles: Send + Sync {
    async fn recent_tracks(&self, user: &str) -> Result<RecentTracks>;
    async fn top_artists(&self, user: &str, period: Period) -> Result<TopArtists>;
}

/// last.fm API client. Built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct LastfmClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LastfmClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(LASTFM_API_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn call<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str()), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // last.fm reports failures as {"error": N, "message": "..."}, sometimes with a 200
        if let Ok(failure) = serde_json::from_str::<ApiErrorPayload>(&body) {
            return Err(Error::Api {
                status,
                message: format!("error {}: {}", failure.error, failure.message),
            });
        }

        if !status.is_success() {
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Scrobbles for LastfmClient {
    async fn recent_tracks(&self, user: &str) -> Result<RecentTracks> {
        tracing::debug!("fetching recent tracks for {}", user);

        let response: RecentTracksResponse = self
            .call(&[
                ("method", "user.getrecenttracks"),
                ("user", user),
                ("limit", RECENT_TRACKS_LIMIT),
            ])
            .await?;

        Ok(response.into())
    }

    async fn top_artists(&self, user: &str, period: Period) -> Result<TopArtists> {
        tracing::debug!("fetching {} top artists for {}", period.api_code(), user);

        let response: TopArtistsResponse = self
            .call(&[
                ("method", "user.gettopartists"),
                ("user", user),
                ("period", period.api_code()),
                ("limit", TOP_ARTISTS_LIMIT),
            ])
            .await?;

        Ok(response.into_top_artists(user, period))
    }
}
