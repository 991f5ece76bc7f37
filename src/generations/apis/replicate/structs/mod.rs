pub mod replicate_account_response;
pub mod replicate_prediction_response;
