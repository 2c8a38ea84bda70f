use std::env;

/// Qué conjunto de rutas sirve este proceso. Los dos servicios comparten
/// binario y puerto por defecto; cada despliegue selecciona el suyo con la
/// variable SERVICIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Servicio {
    Aulas,
    Reservas,
}

impl Servicio {
    pub fn recurso(&self) -> &'static str {
        match self {
            Servicio::Aulas => "aulas",
            Servicio::Reservas => "reservas",
        }
    }
}

/// Configuración del proceso, leída una sola vez al arrancar e inmutable
/// después. Se pasa explícitamente a los componentes que la necesitan.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub base_datos: String,
    pub servicio: Servicio,
    pub puerto: u16,
}

// Carga .env.local (el fichero que usa el despliegue) y .env si existen.
fn cargar_dotenv() {
    let _ = dotenv::from_filename(".env.local");
    let _ = dotenv::dotenv();
}

impl Config {
    pub fn desde_env() -> Result<Config, String> {
        cargar_dotenv();

        let token = env::var("NOTION_TOKEN")
            .map_err(|_| "falta la variable NOTION_TOKEN".to_string())?;
        let base_datos = env::var("NOTION_DATABASE_ID")
            .map_err(|_| "falta la variable NOTION_DATABASE_ID".to_string())?;

        let servicio = match env::var("SERVICIO") {
            Ok(valor) => match valor.as_str() {
                "aulas" => Servicio::Aulas,
                "reservas" => Servicio::Reservas,
                otro => {
                    return Err(format!(
                        "SERVICIO desconocido: {} (use aulas o reservas)",
                        otro
                    ));
                }
            },
            Err(_) => Servicio::Aulas,
        };

        let puerto = match env::var("PORT") {
            Ok(valor) => valor
                .parse::<u16>()
                .map_err(|_| format!("PORT inválido: {}", valor))?,
            Err(_) => 3000,
        };

        Ok(Config {
            token,
            base_datos,
            servicio,
            puerto,
        })
    }
}
