use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod config;
mod database;
mod error;
mod handlers;
mod services;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PLANNER_API_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting Planner API in {:?} mode", config.environment);

    let app = app();

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Planner API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Collections
        .merge(screen_routes())
        .merge(student_routes())
        .merge(course_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn screen_routes() -> Router {
    use axum::routing::post;
    use handlers::screens;

    Router::new()
        .route("/api/screens", post(screens::create).get(screens::list))
        .route(
            "/api/screens/:id",
            get(screens::get).put(screens::update).delete(screens::delete),
        )
}

fn student_routes() -> Router {
    use axum::routing::post;
    use handlers::{students, wishlist};

    Router::new()
        .route("/api/students", post(students::create).get(students::list))
        .route(
            "/api/students/:id",
            get(students::get).put(students::update).delete(students::delete),
        )
        // Array-shaped find route; the wishlist helper calls back into this
        .route("/api/students/studentID/:id", get(students::find_by_student_id))
        .route("/api/students/:id/wishlist/:area", get(wishlist::for_student))
}

fn course_routes() -> Router {
    use handlers::courses;

    Router::new()
        .route("/api/courses", get(courses::list))
        .route("/api/courses/POS_ID/:pos_id", get(courses::find_by_pos_id))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Planner API",
            "version": version,
            "description": "Course planning portal backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "screens": "/api/screens[/:id] (CRUD on page layouts)",
                "students": "/api/students[/:id] (CRUD on student plans)",
                "student_find": "/api/students/studentID/:id (array lookup)",
                "wishlist": "/api/students/:id/wishlist/:area (GE-area course matches)",
                "courses": "/api/courses, /api/courses/POS_ID/:pos_id (read-only catalog)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
