use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    query_params::FilterOperator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use rasoi_core::domain::inventory::{
    entities::InventoryItem, ports::InventoryService, value_objects::GetInventoryFilter,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetItemsResponse {
    pub items: Vec<InventoryItem>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "inventory",
    summary = "List inventory items",
    description = "Get inventory items with filtering, sorting, and pagination",
    responses(
        (status = 200, body = GetItemsResponse)
    )
)]
pub async fn get_items(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetItemsResponse>, ApiError> {
    let mut filter = GetInventoryFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        ..Default::default()
    };

    if !query_params.sort.is_empty() {
        filter.sort = Some(query_params.sort.to_sort_string());
    }

    for cond in &query_params.filter.conditions {
        match cond.field.as_str() {
            "category" => {
                if cond.operator == FilterOperator::Eq {
                    filter.category = cond.value.parse().ok();
                }
            }
            "perishable" => {
                if cond.operator == FilterOperator::Eq {
                    filter.perishable = cond.value.parse().ok();
                }
            }
            _ => {}
        }
    }

    let items = state.service.list_items(filter).await.map_err(|e| {
        tracing::error!("Failed to list inventory items: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetItemsResponse {
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
        count: items.len(),
        items,
    }))
}
