//! PokeAPI client: paginated listing and per-item detail.
//!
//! Uses the public `v2/pokemon` endpoints. Failures are returned as
//! [`CatalogError`]; callers decide how to degrade them.

use std::time::Duration;

use anyhow::Context;
use reqwest::StatusCode;
use tracing::debug;

use dexview_common::api::{DetailResponse, ListResponse};
use dexview_common::catalog::{ItemDetail, ItemPage};
use dexview_common::config::Config;
use dexview_common::error::CatalogError;
use dexview_common::view::PageRequest;

/// Shared HTTP client for the upstream catalog.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    image_template: String,
    catalog_limit: usize,
}

impl PokeApiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Cannot create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            image_template: config.image_url_template.clone(),
            catalog_limit: config.catalog_limit,
        })
    }

    /// One batch of `limit` items starting at `offset`.
    pub async fn list_items(&self, offset: usize, limit: usize) -> Result<ItemPage, CatalogError> {
        let url = format!("{}/pokemon?offset={offset}&limit={limit}", self.base_url);
        debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;

        let body: ListResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(body.into_page(offset, &self.image_template))
    }

    /// Page `page` (1-based) of `page_size` items.
    pub async fn list_page(&self, page: usize, page_size: usize) -> Result<ItemPage, CatalogError> {
        let req = PageRequest::for_page(page, page_size);
        self.list_items(req.offset, req.limit).await
    }

    /// The whole catalog (up to the configured limit) in one request.
    pub async fn list_all(&self) -> Result<ItemPage, CatalogError> {
        self.list_items(0, self.catalog_limit).await
    }

    /// Full record for `id`.
    pub async fn get_detail(&self, id: u32) -> Result<ItemDetail, CatalogError> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        debug!("GET {url}");

        let resp = self.http.get(&url).send().await.map_err(transport)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        let resp = resp.error_for_status().map_err(transport)?;

        let body: DetailResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(body.into_detail(&self.image_template))
    }
}

fn transport(e: reqwest::Error) -> CatalogError {
    CatalogError::Transport(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use axum::extract::{Path, Query};
    use axum::http::StatusCode as AxumStatus;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    const TOTAL: usize = 45;

    async fn list(Query(q): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        let offset: usize = q.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
        let limit: usize = q.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
        let results: Vec<_> = (offset + 1..=TOTAL)
            .take(limit)
            .map(|id| {
                json!({
                    "name": format!("creature-{id}"),
                    "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                })
            })
            .collect();
        Json(json!({ "count": TOTAL, "next": null, "previous": null, "results": results }))
    }

    async fn detail(Path(id): Path<u32>) -> Response {
        match id {
            25 => Json(json!({
                "id": 25,
                "name": "pikachu",
                "height": 4,
                "weight": 60,
                "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
                "stats": [{"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}],
                "abilities": [{"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1}],
            }))
            .into_response(),
            500 => AxumStatus::INTERNAL_SERVER_ERROR.into_response(),
            501 => "not json".into_response(),
            _ => (AxumStatus::NOT_FOUND, "Not Found").into_response(),
        }
    }

    /// Serve a stub of the upstream API on an ephemeral port.
    async fn stub_client() -> PokeApiClient {
        let app = Router::new()
            .route("/api/v2/pokemon", get(list))
            .route("/api/v2/pokemon/{id}", get(detail));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = Config {
            api_base_url: format!("http://{addr}/api/v2/"),
            catalog_limit: 100,
            ..Config::default()
        };
        PokeApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_list_items_window() {
        let client = stub_client().await;
        let page = client.list_items(40, 20).await.unwrap();
        assert_eq!(page.total_count, TOTAL);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].id, 41);
        assert!(page.items[0].image_url.ends_with("/041.png"));
    }

    #[tokio::test]
    async fn test_list_page_and_all() {
        let client = stub_client().await;
        let second = client.list_page(2, 20).await.unwrap();
        assert_eq!(second.items.first().map(|i| i.id), Some(21));

        let all = client.list_all().await.unwrap();
        assert_eq!(all.items.len(), TOTAL);
    }

    #[tokio::test]
    async fn test_get_detail() {
        let client = stub_client().await;
        let detail = client.get_detail(25).await.unwrap();
        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.types, vec!["electric"]);
        assert_eq!(detail.stats[0].value, 90);
    }

    #[tokio::test]
    async fn test_get_detail_errors() {
        let client = stub_client().await;
        assert_eq!(client.get_detail(9999).await, Err(CatalogError::NotFound(9999)));
        assert!(matches!(client.get_detail(500).await, Err(CatalogError::Transport(_))));
        assert!(matches!(client.get_detail(501).await, Err(CatalogError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let config = Config {
            api_base_url: "http://127.0.0.1:1/api/v2".into(),
            request_timeout_secs: 2,
            ..Config::default()
        };
        let client = PokeApiClient::new(&config).unwrap();
        assert!(matches!(client.list_all().await, Err(CatalogError::Transport(_))));
    }
}
