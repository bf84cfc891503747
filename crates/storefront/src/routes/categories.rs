//! Category menu route handlers.

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use game_haven_core::{ProductSource, distinct_categories};

use crate::state::AppState;

/// Category menu query parameters.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub selected: Option<String>,
}

/// The category navigation menu.
#[derive(Debug, Serialize)]
pub struct CategoryMenu {
    /// Distinct category labels, sorted ascending.
    pub categories: Vec<String>,
    /// The caller's current selection, echoed back unchanged.
    pub selected: Option<String>,
}

/// List the distinct catalog categories.
#[instrument(skip(state))]
pub async fn menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> impl IntoResponse {
    Json(CategoryMenu {
        categories: distinct_categories(state.catalog().products()),
        selected: query.selected,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_serializes_selection_echo() {
        let menu = CategoryMenu {
            categories: vec!["RPG".to_string(), "Shooter".to_string()],
            selected: Some("Shooter".to_string()),
        };

        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json["categories"], serde_json::json!(["RPG", "Shooter"]));
        assert_eq!(json["selected"], serde_json::json!("Shooter"));
    }

    #[test]
    fn test_menu_serializes_missing_selection_as_null() {
        let menu = CategoryMenu {
            categories: Vec::new(),
            selected: None,
        };

        let json = serde_json::to_value(&menu).unwrap();
        assert!(json["selected"].is_null());
    }
}
