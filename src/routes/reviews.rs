//! Review catalog API.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use client::types::Review;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReviewsQuery {
    restaurant: String,
}

/// `GET /api/reviews?restaurant=<name>`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<Vec<Review>>, StatusCode> {
    let reviews = state.reviews.reviews_for(&query.restaurant).await.map_err(|e| {
        tracing::error!(error = %e, restaurant = %query.restaurant, "review lookup failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(reviews))
}
