//! Projection of pagination state into the list screen's fields.

use crate::catalog::PaginationState;

/// Everything the home screen needs to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewState {
    pub title: String,
    /// Display names, one per accumulated entry, in catalog order.
    pub rows: Vec<String>,
    /// Full-screen spinner: the very first page is still loading.
    pub show_spinner: bool,
    /// Footer hint: a further page is being appended.
    pub loading_more: bool,
    /// Footer hint: the server reported no further pages.
    pub end_reached: bool,
    pub error_text: Option<String>,
}

impl HomeViewState {
    pub fn project(state: &PaginationState) -> Self {
        Self {
            title: "Pokédex".to_string(),
            rows: state.items.iter().map(|p| p.display_name()).collect(),
            show_spinner: state.is_initial_loading(),
            loading_more: state.is_loading_more(),
            end_reached: !state.has_more,
            error_text: state.last_error.as_ref().map(|e| e.to_string()),
        }
    }
}
