use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{ApiError, DEFAULT_ERROR_DETAIL};
use crate::session::Session;
use crate::types::{
    Achievement, LeaderboardPlayer, LoginRequest, LoginResponse, Match, MatchPlayersResponse,
    RankingCriterion, SearchResponse, Trophy, UserStats, XpInfo,
};

/// StatHub REST client
///
/// Every request carries `Authorization: Bearer <token>` while the session
/// holds a token.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl Client {
    pub fn new(base_url: &str, session: Session, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.clone(),
            details: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: base_url.clone(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Build a client from config, seeding the session with the configured token
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let session = match &config.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::new(),
        };
        Self::new(
            &config.api_url,
            session,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let full = format!("{}{}", self.base_url, endpoint);
        Url::parse(&full).map_err(|e| ApiError::InvalidUrl {
            url: full,
            details: e.to_string(),
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let request = match self.session.bearer().await {
            Some(bearer) => request.header(AUTHORIZATION, bearer),
            None => request,
        };

        debug!("API: {}", endpoint);
        let response = request.send().await.map_err(|e| ApiError::Http {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Http {
            endpoint: endpoint.to_string(),
            source: e,
        })?;
        trace!("API: {} -> {} ({} bytes)", endpoint, status, body.len());

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            details: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.url(endpoint)?);
        self.send(request, endpoint).await
    }

    pub async fn ranking(
        &self,
        criterion: RankingCriterion,
        limit: usize,
    ) -> Result<Vec<LeaderboardPlayer>, ApiError> {
        self.get_json(&criterion.endpoint(limit)).await
    }

    pub async fn matches(&self) -> Result<Vec<Match>, ApiError> {
        self.get_json("/matches/").await
    }

    pub async fn match_players(&self, match_id: i64) -> Result<MatchPlayersResponse, ApiError> {
        self.get_json(&format!("/stats/match/{}/players", match_id)).await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        let endpoint = "/search/";
        let request = self.http.get(self.url(endpoint)?).query(&[("q", query)]);
        self.send(request, endpoint).await
    }

    pub async fn user_stats(&self, user_id: i64) -> Result<UserStats, ApiError> {
        self.get_json(&format!("/users/{}/stats", user_id)).await
    }

    pub async fn user_xp(&self, user_id: i64) -> Result<XpInfo, ApiError> {
        self.get_json(&format!("/users/{}/xp", user_id)).await
    }

    pub async fn user_achievements(&self, user_id: i64) -> Result<Vec<Achievement>, ApiError> {
        self.get_json(&format!("/achievements/user/{}", user_id)).await
    }

    pub async fn user_trophies(&self, user_id: i64) -> Result<Vec<Trophy>, ApiError> {
        self.get_json(&format!("/trophies/user/{}", user_id)).await
    }

    /// Log in and store the returned token in the session
    pub async fn login(&self, credential: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let endpoint = "/auth/login";
        let request = self
            .http
            .post(self.url(endpoint)?)
            .json(&LoginRequest { credential, password });
        let response: LoginResponse = self.send(request, endpoint).await?;
        self.session.set_token(response.access_token.clone()).await;
        Ok(response)
    }
}

/// Extract the backend's `detail` message from an error body
fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(serde_json::Value::String(detail)),
        }) if !detail.is_empty() => detail,
        Ok(ErrorBody {
            detail: Some(other),
        }) if !other.is_null() && !other.is_string() => other.to_string(),
        _ => DEFAULT_ERROR_DETAIL.to_string(),
    }
}
