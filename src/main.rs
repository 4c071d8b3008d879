use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use product_api_rust::database;
use product_api_rust::services::{ProductService, UserService};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    let config = product_api_rust::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting product API in {:?} mode", config.environment);

    let pool = database::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    let app = app(pool);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Product API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(pool: PgPool) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(pool.clone())
        // Public auth routes (token acquisition)
        .merge(auth_public_routes(pool.clone()))
        // Protected product API
        .merge(product_routes(pool))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_public_routes(pool: PgPool) -> Router {
    use axum::routing::post;
    use product_api_rust::handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::register_post))
        .route("/auth/login", post(auth::login_post))
        .with_state(UserService::new(pool))
}

fn product_routes(pool: PgPool) -> Router {
    use product_api_rust::handlers::products;
    use product_api_rust::middleware::jwt_auth_middleware;

    Router::new()
        // Collection operations
        .route("/api/products", get(products::search).post(products::create))
        // Record operations
        .route(
            "/api/products/:product_id",
            get(products::get)
                .put(products::update)
                .delete(products::remove),
        )
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
        .with_state(ProductService::new(pool))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "data": {
            "name": "Product API",
            "version": version,
            "description": "Product management REST API with per-user ownership scoping",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/auth/register, /auth/login (public - token acquisition)",
                "products": "/api/products[/:productId] (protected)",
            }
        }
    }))
}

async fn health(State(pool): State<PgPool>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match database::health_check(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "errors": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
