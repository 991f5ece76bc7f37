use tokio_retry::{strategy::FixedInterval, Retry};

use crate::{
    app::models::api_error::ApiError,
    generations::apis::replicate::{
        client::ReplicateClient, structs::replicate_account_response::ReplicateAccountResponse,
    },
    AppState,
};

use super::{structs::credit_balance_response::CreditBalanceResponse, ESTIMATED_COST_PER_GENERATION};

pub async fn get_credit_balance(state: &AppState) -> Result<CreditBalanceResponse, ApiError> {
    match get_account_with_retry(&state.replicate).await {
        Ok(account) => Ok(CreditBalanceResponse {
            balance: account.balance(),
            estimated_cost_per_generation: ESTIMATED_COST_PER_GENERATION,
            username: account.username.clone(),
            account_type: account.account_type.clone(),
        }),
        Err(e) => {
            tracing::error!("get_credit_balance failed get_account_with_retry");
            Err(e)
        }
    }
}

async fn get_account_with_retry(
    client: &ReplicateClient,
) -> Result<ReplicateAccountResponse, ApiError> {
    let retry_strategy = FixedInterval::from_millis(1000).take(3);

    Retry::spawn(retry_strategy, || async { client.get_account().await }).await
}
