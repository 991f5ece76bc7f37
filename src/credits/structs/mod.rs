pub mod credit_balance_response;
