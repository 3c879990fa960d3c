//! Catalog JSON endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use folio_content::{Project, ResourceCategory, ResourceEntry, category_icon};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Resource category with its icon.
#[derive(Serialize)]
pub(crate) struct CategoryResponse {
    title: String,
    icon: &'static str,
    entries: Vec<EntryResponse>,
}

#[derive(Serialize)]
pub(crate) struct EntryResponse {
    #[serde(flatten)]
    entry: ResourceEntry,
    /// Whether the link leaves the site.
    external: bool,
}

impl From<&ResourceCategory> for CategoryResponse {
    fn from(category: &ResourceCategory) -> Self {
        Self {
            title: category.title.clone(),
            icon: category_icon(&category.title),
            entries: category
                .entries
                .iter()
                .map(|entry| EntryResponse {
                    entry: entry.clone(),
                    external: entry.is_external(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectsQuery {
    category: Option<String>,
}

/// Handle GET /api/resources.
pub(crate) async fn get_resources(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryResponse>> {
    Json(
        state
            .site
            .content()
            .list_categories()
            .iter()
            .map(CategoryResponse::from)
            .collect(),
    )
}

/// Handle GET /api/projects.
pub(crate) async fn get_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<Vec<Project>>, ServerError> {
    let projects = state
        .site
        .content()
        .list_projects(query.category.as_deref())?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(projects))
}
