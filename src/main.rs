use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_admin::config::environment::EnvironmentConfig;
use fleet_admin::database::{self, create_pool};
use fleet_admin::services::bootstrap;
use fleet_admin::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚕 Fleet Admin - Back office de administración de flota");
    info!("=======================================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Sincronizar esquema y sembrar datos iniciales
    database::schema::sync(&pool).await?;
    bootstrap::seed_default_user(&pool).await?;

    // Directorio de fotos
    tokio::fs::create_dir_all(config.photos_dir()).await?;

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = fleet_admin::create_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   📗 Catálogos: /make /insurer /arl /eps /communication-company");
    info!("   🏢 /company - Empresas transportadoras");
    info!("   👤 /owner - Propietarios");
    info!("   🚖 /drivers - Conductores (búsqueda por identificación)");
    info!("   🚗 /vehicles - Vehículos (filtros por placa y empresa)");
    info!("   🪪 /driver-vehicles - Asignaciones y tarjeta de control");
    info!("   💰 /administrations - Registros de administración");
    info!("   👥 /users - Usuarios");
    info!("   🔑 /auth/login - Login");
    info!("   📷 /uploads - Subida de fotos, /photos - Archivos estáticos");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
