// --- Publicación de Aulas y Reservas - Archivo principal ---

use aulahub::config::Config;
use aulahub::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    println!("=== Gestión de Aulas LANAU112 (API) ===");

    let config = match Config::desde_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error de configuración: {}", e);
            std::process::exit(1);
        }
    };

    println!("🚀 Servidor corriendo en http://localhost:{}", config.puerto);
    println!(
        "📊 API disponible en http://localhost:{}/api/{}",
        config.puerto,
        config.servicio.recurso()
    );
    run_server(config).await
}
