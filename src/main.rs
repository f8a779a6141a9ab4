use std::env;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analytics;
mod entities;
mod graphql;
mod services;

use graphql::{create_schema, CampaignSchema};
use services::{CampaignService, InfrastructureService, ProjectService, WeeklyEntryService};

#[derive(Clone)]
struct AppState {
    schema: CampaignSchema,
    db: DatabaseConnection,
    project_service: ProjectService,
    campaign_service: CampaignService,
    weekly_entry_service: WeeklyEntryService,
    infrastructure_service: InfrastructureService,
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req
        .into_inner()
        .data(state.db.clone())
        .data(state.project_service.clone())
        .data(state.campaign_service.clone())
        .data(state.weekly_entry_service.clone())
        .data(state.infrastructure_service.clone());

    state.schema.execute(request).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>CampaignFlow GraphQL Playground</title>
        <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/graphql-playground-react/build/static/css/index.css" />
    </head>
    <body>
        <div id="root"></div>
        <script src="https://cdn.jsdelivr.net/npm/graphql-playground-react/build/static/js/middleware.js"></script>
        <script>
            GraphQLPlayground.init(document.getElementById('root'), {
                endpoint: '/graphql'
            })
        </script>
    </body>
    </html>
    "#)
}

async fn health() -> impl IntoResponse {
    "OK"
}

async fn graphql_schema(State(state): State<AppState>) -> impl IntoResponse {
    // Only expose schema in development environment
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string());

    if environment != "development" {
        return (StatusCode::NOT_FOUND, "Schema not available in production").into_response();
    }

    let sdl = state.schema.sdl();

    ([(CONTENT_TYPE, "application/graphql")], sdl).into_response()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaignflow=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let cors_origins = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    info!("Starting CampaignFlow in {} environment", environment);

    // Connect to database and bring the schema up to date
    info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;
    migration::Migrator::up(&db, None).await?;
    info!("Database connected and migrated");

    // Initialize services
    let project_service = ProjectService::new(db.clone());
    let campaign_service = CampaignService::new(db.clone(), project_service.clone());
    let weekly_entry_service = WeeklyEntryService::new(db.clone(), campaign_service.clone());
    let infrastructure_service = InfrastructureService::new(db.clone(), project_service.clone());

    // Create GraphQL schema
    let schema = create_schema();

    // Application state
    let app_state = AppState {
        schema,
        db,
        project_service,
        campaign_service,
        weekly_entry_service,
        infrastructure_service,
    };

    // Setup CORS
    let cors = if cors_origins.trim() == "*" {
        warn!("CORS set to accept ANY origin (*) - only use in development!");
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
    };

    // Create router
    let app = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/playground", get(graphql_playground))
        .route("/health", get(health))
        .route("/schema.graphql", get(graphql_schema))
        .layer(cors)
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server starting on http://{}", addr);
    info!("GraphQL Playground available at http://{}/playground", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
