pub mod aulas;
pub mod reservas;

pub use aulas::*;
pub use reservas::*;

use crate::config::Config;
use crate::notion::ClienteNotion;

/// Estado compartido de solo lectura entre peticiones: el cliente de Notion
/// y el identificador de la base de datos que consulta este servicio. No hay
/// más estado compartido; cada petición dispara su propia consulta saliente.
#[derive(Clone)]
pub struct EstadoApp {
    pub notion: ClienteNotion,
    pub base_datos: String,
}

impl EstadoApp {
    pub fn desde_config(config: &Config) -> Self {
        EstadoApp {
            notion: ClienteNotion::nuevo(&config.token),
            base_datos: config.base_datos.clone(),
        }
    }
}
