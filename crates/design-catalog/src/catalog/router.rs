use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::browse::{
    BrowseView, CmsFilter, CompareSelection, FilterCriteria, SortDirection, SortKey, SortState,
};
use super::components::ComponentSource;
use super::domain::SystemId;
use super::recommend::WizardAnswers;
use super::service::CatalogService;
use crate::error::AppError;

/// Read-only JSON endpoints over the catalog. Every request carries its own view state.
pub fn catalog_router<S>(service: Arc<CatalogService<S>>) -> Router
where
    S: ComponentSource + 'static,
{
    Router::new()
        .route("/api/v1/systems", get(browse_handler::<S>))
        .route("/api/v1/systems/:system_id", get(profile_handler::<S>))
        .route("/api/v1/compare", get(compare_handler::<S>))
        .route("/api/v1/recommendations", post(recommend_handler::<S>))
        .route("/api/v1/stats", get(stats_handler::<S>))
        .with_state(service)
}

/// Flat browse query, e.g. `?framework=React&sort=githubStars&direction=desc&selected=mui,chakra`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub framework: Option<String>,
    pub license: Option<String>,
    pub maintainer: Option<String>,
    pub cms: Option<String>,
    pub ai_required: Option<bool>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub selected: Option<String>,
}

impl BrowseQuery {
    pub fn into_view(self) -> Result<BrowseView, AppError> {
        let cms = match self.cms.as_deref() {
            Some(value) => value.parse::<CmsFilter>().map_err(AppError::Query)?,
            None => CmsFilter::Any,
        };

        let criteria = FilterCriteria {
            search: self.search.unwrap_or_default(),
            framework: self.framework,
            license: self.license,
            maintainer: self.maintainer,
            cms,
            ai_required: self.ai_required.unwrap_or(false),
        };

        let direction = match self.direction.as_deref().map(str::trim) {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::Query(format!(
                    "unknown sort direction '{other}' (asc, desc)"
                )))
            }
        };
        let sort = match self.sort.as_deref().filter(|value| !value.trim().is_empty()) {
            Some(key) => SortState::by(key.parse::<SortKey>().map_err(AppError::Query)?, direction),
            None => SortState::default(),
        };

        let mut selection = CompareSelection::default();
        for id in self
            .selected
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            selection.check(SystemId::from(id))?;
        }

        Ok(BrowseView {
            criteria,
            sort,
            selection,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompareQuery {
    pub left: Option<String>,
    pub right: Option<String>,
}

pub(crate) async fn browse_handler<S>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, AppError>
where
    S: ComponentSource + 'static,
{
    let view = query.into_view()?;
    Ok(Json(service.browse(&view)).into_response())
}

pub(crate) async fn profile_handler<S>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(system_id): Path<String>,
) -> Result<Response, AppError>
where
    S: ComponentSource + 'static,
{
    let today = chrono::Utc::now().date_naive();
    let profile = service.profile(&system_id, today)?;
    Ok(Json(profile).into_response())
}

pub(crate) async fn compare_handler<S>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(query): Query<CompareQuery>,
) -> Result<Response, AppError>
where
    S: ComponentSource + 'static,
{
    let (left, right) = match (query.left, query.right) {
        (Some(left), Some(right)) => (left, right),
        _ => {
            return Err(AppError::Query(
                "both 'left' and 'right' system ids are required".to_string(),
            ))
        }
    };
    let diff = service.compare(&left, &right)?;
    Ok(Json(diff).into_response())
}

pub(crate) async fn recommend_handler<S>(
    State(service): State<Arc<CatalogService<S>>>,
    Json(answers): Json<WizardAnswers>,
) -> Result<Response, AppError>
where
    S: ComponentSource + 'static,
{
    let (answers, results) = service.recommend(answers)?;
    let payload = json!({
        "answers": answers,
        "results": results,
    });
    Ok(Json(payload).into_response())
}

pub(crate) async fn stats_handler<S>(State(service): State<Arc<CatalogService<S>>>) -> Response
where
    S: ComponentSource + 'static,
{
    Json(service.stats()).into_response()
}
