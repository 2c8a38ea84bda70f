// Capa de presentación: documentos HTML con estilos en línea y utilidades
// compartidas de formato.

pub mod aulas;
pub mod reservas;

use chrono::{DateTime, Datelike, NaiveDate, Timelike};

const MESES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
    "septiembre", "octubre", "noviembre", "diciembre",
];

/// Escapa un valor antes de interpolarlo en HTML. Todo campo de registro
/// pasa por aquí, también dentro de atributos.
pub fn escape_html(valor: &str) -> String {
    let mut out = String::with_capacity(valor.len());
    for c in valor.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            otro => out.push(otro),
        }
    }
    out
}

/// Sustituye las letras acentuadas por su forma base (á→a, ñ→n, ç→c).
pub fn quitar_acentos(texto: &str) -> String {
    texto
        .chars()
        .map(|ch| match ch {
            'Á' | 'À' | 'Ä' | 'Â' | 'Ã' | 'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'É' | 'È' | 'Ë' | 'Ê' | 'é' | 'è' | 'ë' | 'ê' => 'e',
            'Í' | 'Ì' | 'Ï' | 'Î' | 'í' | 'ì' | 'ï' | 'î' => 'i',
            'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' | 'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'Ú' | 'Ù' | 'Ü' | 'Û' | 'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Ñ' | 'ñ' => 'n',
            'Ç' | 'ç' => 'c',
            otro => otro,
        })
        .collect()
}

/// Clase CSS del distintivo de estado de un aula: minúsculas y solo el
/// primer espacio sustituido por guion ("En Mantenimiento" →
/// "en-mantenimiento"). No se tocan los acentos.
pub fn clase_estado_aula(estado: &str) -> String {
    estado.to_lowercase().replacen(' ', "-", 1)
}

/// Clase CSS del distintivo de estado de una reserva: como la de aulas pero
/// quitando además los acentos ("Cancelación" → "cancelacion").
pub fn clase_estado_reserva(estado: &str) -> String {
    quitar_acentos(&estado.to_lowercase()).replacen(' ', "-", 1)
}

/// Fecha legible en español ("7 de agosto de 2026, 14:30"). Acepta valores
/// RFC 3339 con desplazamiento horario y fechas sin hora; cualquier otro
/// texto (por ejemplo el relleno "Sin fecha") se devuelve tal cual.
pub fn formato_fecha(valor: &str) -> String {
    if let Ok(f) = DateTime::parse_from_rfc3339(valor) {
        return format!(
            "{} de {} de {}, {:02}:{:02}",
            f.day(),
            MESES[f.month0() as usize],
            f.year(),
            f.hour(),
            f.minute()
        );
    }
    if let Ok(f) = NaiveDate::parse_from_str(valor, "%Y-%m-%d") {
        return format!(
            "{} de {} de {}, 00:00",
            f.day(),
            MESES[f.month0() as usize],
            f.year()
        );
    }
    valor.to_string()
}

/// Fragmento mínimo de error para las rutas HTML.
pub fn pagina_error(mensaje: &str) -> String {
    format!("<h1>Error: {}</h1>", escape_html(mensaje))
}
