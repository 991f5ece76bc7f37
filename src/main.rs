#![allow(dead_code)]
#![allow(unused_variables)]

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    generations::apis::replicate::client::ReplicateClient,
};

mod app;
mod credits;
mod generations;

#[derive(Clone)]
pub struct AppState {
    pub replicate: ReplicateClient,
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    let replicate = ReplicateClient::new(&envy);

    let state = AppState {
        replicate,
        envy: Arc::new(envy),
    };

    // app
    let app = Router::new()
        .route("/", get(app::controller::get_root))
        // generations
        .route(
            "/generations",
            post(generations::controller::generate_headshots),
        )
        .route(
            "/generations/status",
            get(generations::controller::get_generation_status),
        )
        // credits
        .route("/credits", get(credits::controller::get_credit_balance))
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    DefaultApiError::InternalServerError.value();
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
