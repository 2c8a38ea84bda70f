// Acceso a la base de datos remota (API REST de Notion).
// Solo este módulo habla con la API; el resto del crate trabaja con los
// registros ya normalizados de `models`.

mod page;

pub mod aulas;
pub mod reservas;

pub use page::{Fragmento, Opcion, PaginaNotion, Persona, Propiedad, RangoFecha, Referencia,
    TextoPlano, primer_valor};

use serde::Deserialize;

const NOTION_API_BASE: &str = "https://api.notion.com";
const NOTION_VERSION: &str = "2022-06-28";

/// Cliente de solo lectura sobre la API. Se construye una vez al arrancar y
/// todas las peticiones reutilizan la misma conexión subyacente.
#[derive(Debug, Clone)]
pub struct ClienteNotion {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RespuestaConsulta {
    #[serde(default)]
    results: Vec<PaginaNotion>,
}

impl ClienteNotion {
    pub fn nuevo(token: &str) -> Self {
        Self::con_base_url(token, NOTION_API_BASE)
    }

    /// Igual que `nuevo` pero contra otra URL base (para pruebas).
    pub fn con_base_url(token: &str, base_url: &str) -> Self {
        ClienteNotion {
            http: reqwest::Client::new(),
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Consulta las páginas de una base de datos. Una sola llamada saliente
    /// por invocación: se devuelve la primera página de resultados en el
    /// orden en que la entrega la API, sin reordenar, sin paginar y sin
    /// reintentos.
    pub async fn consultar_base(&self, base_datos: &str) -> Result<Vec<PaginaNotion>, String> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, base_datos);
        let respuesta = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| format!("fallo al consultar Notion: {}", e))?;

        let status = respuesta.status();
        if !status.is_success() {
            let cuerpo = respuesta.text().await.unwrap_or_default();
            return Err(format!("Notion respondió {}: {}", status, cuerpo));
        }

        let consulta: RespuestaConsulta = respuesta
            .json()
            .await
            .map_err(|e| format!("respuesta de Notion inválida: {}", e))?;

        Ok(consulta.results)
    }
}
