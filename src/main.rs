use std::sync::Arc;

use clap::Parser;
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use storeaudit_backend::api::{AuditEventsApi, HealthApi, ReferenceApi};
use storeaudit_backend::cli::{self, Cli, Commands};
use storeaudit_backend::config::{init_logging, BootstrapSettings, DatabaseConnections, LoggingConfig, SystemEnvironment};
use storeaudit_backend::coordinators::AuditCoordinator;
use storeaudit_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let logging_config = LoggingConfig::from_env_provider(&SystemEnvironment);
    init_logging(&logging_config)?;

    let args = Cli::parse();

    let bootstrap_settings = BootstrapSettings::from_env().inspect_err(|e| {
        tracing::error!("Failed to load bootstrap settings: {}", e);
    })?;
    tracing::info!("Bootstrap settings loaded: {:?}", bootstrap_settings);

    let connections = DatabaseConnections::init(&bootstrap_settings).await?;

    match args.command.unwrap_or(Commands::Serve) {
        Commands::Migrate { with_directory } => {
            cli::migrate::run_migrations(&connections, with_directory).await?;
            connections.close().await?;
        }
        Commands::Serve => {
            connections.migrate().await?;
            let app_data = Arc::new(AppData::init(connections.clone(), &bootstrap_settings));
            let result = serve(app_data, &bootstrap_settings).await;
            connections.close().await?;
            result?;
        }
        command => {
            connections.migrate().await?;
            let app_data = AppData::init(connections.clone(), &bootstrap_settings);
            let result = cli::execute_command(command, &app_data).await;
            connections.close().await?;
            result?;
        }
    }

    Ok(())
}

async fn serve(app_data: Arc<AppData>, bootstrap_settings: &BootstrapSettings) -> Result<(), std::io::Error> {
    let audit_coordinator = Arc::new(AuditCoordinator::new(app_data.clone()));

    let health_api = HealthApi::new(app_data.connections.clone());
    let audit_events_api = AuditEventsApi::new(
        audit_coordinator.clone(),
        bootstrap_settings.api_key().to_string(),
    );
    let reference_api = ReferenceApi::new(audit_coordinator);

    let server_address = bootstrap_settings.server_address();
    let public_host = format!("http://{}", server_address);

    let api_service = OpenApiService::new(
        (health_api, audit_events_api, reference_api),
        "Store Audit API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", public_host));

    let ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!("Starting server on {}", public_host);
    tracing::info!("Swagger UI available at {}/swagger", public_host);

    Server::new(TcpListener::bind(server_address)).run(app).await
}
