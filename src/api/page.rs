use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::app_state::AppState;

pub async fn get_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.current())
}
