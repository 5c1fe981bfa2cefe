use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::catalog::{QueryParseError, Ranked, SortDirection, SortKey, SortOrder};
use crate::directory::{Provider, ProviderQuery};
use crate::faq::{Role, Viewer};
use crate::leads::{Lead, LeadQuery};
use crate::store::MarketplaceStore;

/// Read-only HTTP endpoints over the marketplace catalogs.
pub fn catalog_router(store: Arc<MarketplaceStore>) -> Router {
    Router::new()
        .route("/api/v1/providers", get(providers_handler))
        .route("/api/v1/providers/categories", get(provider_categories_handler))
        .route("/api/v1/providers/:provider_id", get(provider_handler))
        .route("/api/v1/faq", get(faq_categories_handler))
        .route("/api/v1/faq/search", get(faq_search_handler))
        .route("/api/v1/leads", get(leads_handler))
        .route("/api/v1/leads/summary", get(lead_summary_handler))
        .with_state(store)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderParams {
    category: Option<String>,
    q: Option<String>,
    sort: Option<String>,
    direction: Option<String>,
    #[serde(default)]
    verified: bool,
    #[serde(default)]
    available: bool,
    language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LeadParams {
    status: Option<String>,
    q: Option<String>,
    sort: Option<String>,
    direction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FaqParams {
    q: Option<String>,
    role: Option<String>,
    acting_as: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProviderListing<'a> {
    total: usize,
    providers: Vec<&'a Provider>,
}

#[derive(Debug, Serialize)]
struct LeadListing<'a> {
    total: usize,
    leads: Vec<&'a Lead>,
}

pub(crate) async fn providers_handler(
    State(store): State<Arc<MarketplaceStore>>,
    Query(params): Query<ProviderParams>,
) -> Response {
    let sort = match parse_sort::<Provider>(params.sort.as_deref(), params.direction.as_deref()) {
        Ok(sort) => sort,
        Err(err) => return bad_request(err),
    };

    let query = ProviderQuery {
        category: params.category,
        text: params.q,
        verified_only: params.verified,
        available_only: params.available,
        language: params.language,
        sort,
    };

    let providers = store.providers().search(&query);
    debug!(matches = providers.len(), ?query.category, "provider listing served");
    let listing = ProviderListing {
        total: providers.len(),
        providers,
    };
    (StatusCode::OK, Json(listing)).into_response()
}

pub(crate) async fn provider_categories_handler(
    State(store): State<Arc<MarketplaceStore>>,
) -> Response {
    (StatusCode::OK, Json(store.providers().category_summaries())).into_response()
}

pub(crate) async fn provider_handler(
    State(store): State<Arc<MarketplaceStore>>,
    Path(provider_id): Path<u32>,
) -> Response {
    match store.providers().get(provider_id) {
        Some(provider) => (StatusCode::OK, Json(provider)).into_response(),
        None => {
            let payload = json!({
                "error": format!("provider {provider_id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn faq_categories_handler(
    State(store): State<Arc<MarketplaceStore>>,
    Query(params): Query<FaqParams>,
) -> Response {
    let viewer = match parse_viewer(params.role.as_deref(), params.acting_as.as_deref()) {
        Ok(viewer) => viewer,
        Err(err) => return bad_request(err),
    };

    (StatusCode::OK, Json(store.faq().categories_for(viewer))).into_response()
}

pub(crate) async fn faq_search_handler(
    State(store): State<Arc<MarketplaceStore>>,
    Query(params): Query<FaqParams>,
) -> Response {
    let viewer = match parse_viewer(params.role.as_deref(), params.acting_as.as_deref()) {
        Ok(viewer) => viewer,
        Err(err) => return bad_request(err),
    };

    let query = params.q.unwrap_or_default();
    let matches = store.faq().search(&query, viewer);
    debug!(matches = matches.len(), role = viewer.role.label(), "faq search served");
    (StatusCode::OK, Json(matches)).into_response()
}

pub(crate) async fn leads_handler(
    State(store): State<Arc<MarketplaceStore>>,
    Query(params): Query<LeadParams>,
) -> Response {
    let sort = match parse_sort::<Lead>(params.sort.as_deref(), params.direction.as_deref()) {
        Ok(sort) => sort,
        Err(err) => return bad_request(err),
    };

    let query = LeadQuery {
        status: params.status,
        text: params.q,
        sort,
    };

    let leads = store.leads().search(&query);
    let listing = LeadListing {
        total: leads.len(),
        leads,
    };
    (StatusCode::OK, Json(listing)).into_response()
}

pub(crate) async fn lead_summary_handler(State(store): State<Arc<MarketplaceStore>>) -> Response {
    (StatusCode::OK, Json(store.leads().pipeline_summary())).into_response()
}

/// Blank values count as absent. The key must be one the record type ranks by.
pub(crate) fn parse_sort<T: Ranked>(
    sort: Option<&str>,
    direction: Option<&str>,
) -> Result<Option<SortOrder>, QueryParseError> {
    let direction = non_blank(direction)
        .map(str::parse::<SortDirection>)
        .transpose()?;
    let key = non_blank(sort).map(str::parse::<SortKey>).transpose()?;
    SortOrder::for_listing::<T>(key, direction)
}

/// Missing roles read as buyer, the most restricted public view.
pub(crate) fn parse_viewer(
    role: Option<&str>,
    acting_as: Option<&str>,
) -> Result<Viewer, QueryParseError> {
    let role = non_blank(role)
        .map(str::parse::<Role>)
        .transpose()?
        .unwrap_or(Role::Buyer);
    let viewer = Viewer::new(role);

    Ok(match non_blank(acting_as).map(str::parse::<Role>).transpose()? {
        Some(preview) => viewer.acting_as(preview),
        None => viewer,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn bad_request(err: QueryParseError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_rejects_keys_foreign_to_the_listing() {
        let err = parse_sort::<Provider>(Some("commission"), None).expect_err("rejected");
        assert_eq!(err, QueryParseError::UnsupportedSort("commission"));
        assert!(parse_sort::<Lead>(Some("commission"), None).is_ok());
    }

    #[test]
    fn sort_applies_explicit_direction() {
        let order = parse_sort::<Provider>(Some("price-low"), Some("desc"))
            .expect("parses")
            .expect("sort present");
        assert_eq!(order.direction(), SortDirection::Descending);
    }

    #[test]
    fn blank_sort_means_store_order() {
        assert_eq!(parse_sort::<Provider>(Some("  "), None), Ok(None));
        assert!(parse_sort::<Provider>(None, Some("upward")).is_err());
    }

    #[test]
    fn viewer_defaults_to_buyer() {
        let viewer = parse_viewer(None, None).expect("default viewer");
        assert_eq!(viewer.effective_role(), Role::Buyer);

        let preview = parse_viewer(Some("admin"), Some("seller")).expect("admin preview");
        assert_eq!(preview.effective_role(), Role::Seller);

        assert!(parse_viewer(Some("landlord"), None).is_err());
    }

    #[tokio::test]
    async fn provider_handler_returns_not_found_for_unknown_id() {
        let store = Arc::new(MarketplaceStore::standard());
        let response = provider_handler(State(store), Path(9_999)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
