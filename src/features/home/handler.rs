use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::features::home::dto::{GREETING, HomeResponse};
use crate::server::AppState;

pub async fn handle_home(State(state): State<AppState>) -> Response {
    match state.home.as_ref() {
        HomeResponse::Redirect { location } => {
            tracing::debug!(%location, "redirecting root request");
            Redirect::to(location).into_response()
        }
        HomeResponse::Greeting => {
            tracing::debug!("greeting root request");
            GREETING.into_response()
        }
    }
}
