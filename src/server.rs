use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

use crate::config::{Config, Servicio};
use crate::handlers::{self, EstadoApp};

/// Arranca el servidor HTTP con las rutas del servicio seleccionado. Cada
/// petición se atiende de forma independiente: no hay caché ni estado mutable
/// compartido, así que cada una dispara su propia consulta a la base remota.
pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind = format!("127.0.0.1:{}", config.puerto);
    let estado = web::Data::new(EstadoApp::desde_config(&config));
    let servicio = config.servicio;

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Cors::permissive())
            .app_data(estado.clone());
        match servicio {
            Servicio::Aulas => app
                .route("/api/aulas", web::get().to(handlers::api_aulas_handler))
                .route("/", web::get().to(handlers::pagina_aulas_handler))
                .route("/help", web::get().to(handlers::help_aulas_handler)),
            Servicio::Reservas => app
                .route("/api/reservas", web::get().to(handlers::api_reservas_handler))
                .route("/", web::get().to(handlers::pagina_reservas_handler))
                .route("/help", web::get().to(handlers::help_reservas_handler)),
        }
    })
    .bind(bind)?
    .run()
    .await
}
