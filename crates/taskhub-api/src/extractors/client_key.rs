//! Client key extraction for login throttling.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use std::net::SocketAddr;

use crate::error::ApiError;
use crate::state::AppState;

/// The network-address key under which login attempts are counted.
///
/// Prefers the first `X-Forwarded-For` hop (proxy deployments), then the
/// socket peer address. Extraction never fails; an unidentifiable client
/// shares the `"unknown"` bucket.
#[derive(Debug, Clone)]
pub struct ClientKey(pub String);

impl FromRequestParts<AppState> for ClientKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(forwarded) = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            if let Some(first_hop) = forwarded.split(',').next() {
                let first_hop = first_hop.trim();
                if !first_hop.is_empty() {
                    return Ok(ClientKey(first_hop.to_string()));
                }
            }
        }

        let key = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(ClientKey(key))
    }
}
