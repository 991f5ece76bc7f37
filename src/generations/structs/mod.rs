pub mod generate_headshots_response;
