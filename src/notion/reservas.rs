use super::page::primer_valor;
use super::{ClienteNotion, PaginaNotion};
use crate::models::Reserva;

// Nombres alternativos con los que aparecen algunas propiedades en la base
// origen. El primero de cada lista es el nombre primario y gana si ambos
// están presentes.
const PROPS_PROFESOR: [&str; 2] = ["Profesor/Responsable", "Responsable"];
const PROPS_ASIGNATURA: [&str; 2] = ["Asignatura", "Asignatura/Actividad"];
const PROPS_CURSO: [&str; 2] = ["Curso", "Curso/Grupo"];

/// Obtiene y normaliza todas las reservas de la base de datos indicada.
pub async fn obtener_reservas(
    cliente: &ClienteNotion,
    base_datos: &str,
) -> Result<Vec<Reserva>, String> {
    let paginas = cliente.consultar_base(base_datos).await?;
    Ok(paginas.iter().map(reserva_desde_pagina).collect())
}

/// Normaliza una página cruda en una `Reserva` plana. Función pura, sin
/// interferencia entre campos.
pub fn reserva_desde_pagina(pagina: &PaginaNotion) -> Reserva {
    let props = &pagina.properties;

    // `fecha_fin` propaga None tanto si falta `end` como si falta la
    // propiedad de fecha entera; solo `fecha_inicio` tiene texto por defecto.
    let fecha = props.get("Fecha").and_then(|p| p.rango_fecha());
    let fecha_inicio = fecha
        .and_then(|f| f.start.clone())
        .unwrap_or_else(|| "Sin fecha".to_string());
    let fecha_fin = fecha.and_then(|f| f.end.clone());

    Reserva {
        id: pagina.id.clone(),
        aula_id: props.get("Aula").and_then(|p| p.primera_relacion()),
        fecha_inicio,
        fecha_fin,
        profesor: primer_valor(props, &PROPS_PROFESOR, |p| p.primera_persona())
            .unwrap_or_else(|| "Sin asignar".to_string()),
        tipo_reserva: props
            .get("Tipo de reserva")
            .and_then(|p| p.nombre_select())
            .unwrap_or_else(|| "N/A".to_string()),
        asignatura: primer_valor(props, &PROPS_ASIGNATURA, |p| p.texto_plano())
            .unwrap_or_else(|| "Sin asignatura".to_string()),
        curso: primer_valor(props, &PROPS_CURSO, |p| p.texto_plano()).unwrap_or_default(),
        // El estado de una reserva es una propiedad de tipo status, no un
        // select como en las aulas.
        estado: props
            .get("Estado")
            .and_then(|p| p.nombre_status())
            .unwrap_or_else(|| "Desconocido".to_string()),
    }
}
