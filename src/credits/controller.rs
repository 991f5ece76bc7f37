use axum::{extract::State, Json};

use crate::{app::models::api_error::ApiError, AppState};

use super::{service, structs::credit_balance_response::CreditBalanceResponse};

pub async fn get_credit_balance(
    State(state): State<AppState>,
) -> Result<Json<CreditBalanceResponse>, ApiError> {
    match service::get_credit_balance(&state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
