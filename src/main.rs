use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use pulseboard_backend::api::{AnalyticsApi, AuthApi, HealthApi, ProductsApi, UsersApi};
use pulseboard_backend::app_data::AppData;
use pulseboard_backend::config::{init_logging, BootstrapSettings};
use pulseboard_backend::stores::seed;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env().expect("Invalid bootstrap configuration");

    // All state lives in AppData for the process lifetime; a restart
    // discards everything and reseeds the demo dataset.
    let app_data = AppData::new();
    seed::seed_demo_data(&app_data).expect("Failed to seed bootstrap dataset");
    tracing::info!(
        users = app_data.user_store.count(),
        products = app_data.product_store.count(),
        "bootstrap dataset seeded"
    );

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(app_data.clone()),
            UsersApi::new(app_data.clone()),
            ProductsApi::new(app_data.clone()),
            AnalyticsApi::new(app_data.clone()),
        ),
        "Pulseboard API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://localhost:{}/api", settings.server_port()));

    // Generate Swagger UI from the OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!(address = %settings.server_address(), "starting server");

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await
}
