use super::{ClienteNotion, PaginaNotion};
use crate::models::Aula;

/// Obtiene y normaliza todas las aulas de la base de datos indicada.
pub async fn obtener_aulas(
    cliente: &ClienteNotion,
    base_datos: &str,
) -> Result<Vec<Aula>, String> {
    let paginas = cliente.consultar_base(base_datos).await?;
    Ok(paginas.iter().map(aula_desde_pagina).collect())
}

/// Normaliza una página cruda en un `Aula` plano. Función pura: cada campo
/// opcional cae a su valor por defecto de forma independiente, de modo que
/// un campo ausente nunca afecta a la extracción de los demás.
pub fn aula_desde_pagina(pagina: &PaginaNotion) -> Aula {
    let props = &pagina.properties;
    Aula {
        id: pagina.id.clone(),
        nombre: props
            .get("Nombre del aula")
            .and_then(|p| p.texto_titulo())
            .unwrap_or_else(|| "Sin nombre".to_string()),
        edificio: props
            .get("Edificio")
            .and_then(|p| p.nombre_select())
            .unwrap_or_else(|| "N/A".to_string()),
        planta: props
            .get("Planta")
            .and_then(|p| p.nombre_select())
            .unwrap_or_else(|| "N/A".to_string()),
        capacidad: match props.get("Capacidad").and_then(|p| p.numero()) {
            Some(n) if n >= 0.0 => n as u32,
            _ => 0,
        },
        estado: props
            .get("Estado")
            .and_then(|p| p.nombre_select())
            .unwrap_or_else(|| "Desconocido".to_string()),
    }
}
