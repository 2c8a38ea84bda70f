use super::{clase_estado_reserva, escape_html, formato_fecha};
use crate::models::Reserva;

const CABECERA: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Reservas de Aulas LANAU112</title>
  <style>
    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      max-width: 1200px;
      margin: 0 auto;
      padding: 20px;
      background: #f5f5f5;
    }
    h1 {
      color: #333;
      text-align: center;
    }
    .reservas-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
      gap: 20px;
      margin-top: 30px;
    }
    .reserva-card {
      background: white;
      border-radius: 10px;
      padding: 20px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
      transition: transform 0.2s;
    }
    .reserva-card:hover {
      transform: translateY(-5px);
      box-shadow: 0 4px 12px rgba(0,0,0,0.15);
    }
    .reserva-asignatura {
      font-size: 1.3em;
      font-weight: bold;
      color: #2563eb;
      margin-bottom: 10px;
    }
    .reserva-info {
      margin: 8px 0;
      color: #555;
    }
    .estado {
      display: inline-block;
      padding: 5px 12px;
      border-radius: 20px;
      font-size: 0.9em;
      font-weight: bold;
      margin-top: 10px;
    }
    .pendiente { background: #fef3c7; color: #92400e; }
    .confirmada { background: #d1fae5; color: #065f46; }
    .cancelada { background: #fecaca; color: #991b1b; }
  </style>
</head>
<body>
  <h1>📅 Reservas de Aulas LANAU112</h1>
"#;

/// Documento HTML completo con la parrilla de reservas.
pub fn pagina_reservas(reservas: &[Reserva]) -> String {
    let mut html = String::from(CABECERA);
    html.push_str(&format!(
        "  <p style=\"text-align: center; color: #666;\">Total de reservas: {}</p>\n",
        reservas.len()
    ));
    html.push_str("  <div class=\"reservas-grid\">\n");
    for reserva in reservas {
        html.push_str(&tarjeta_reserva(reserva));
    }
    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

fn tarjeta_reserva(reserva: &Reserva) -> String {
    let mut tarjeta = String::from("    <div class=\"reserva-card\">\n");
    tarjeta.push_str(&format!(
        "      <div class=\"reserva-asignatura\">{}</div>\n",
        escape_html(&reserva.asignatura)
    ));
    tarjeta.push_str(&format!(
        "      <div class=\"reserva-info\">👨‍🏫 {}</div>\n",
        escape_html(&reserva.profesor)
    ));
    if let Some(aula_id) = &reserva.aula_id {
        tarjeta.push_str(&format!(
            "      <div class=\"reserva-info\">🏫 Aula: {}</div>\n",
            escape_html(aula_id)
        ));
    }
    tarjeta.push_str(&format!(
        "      <div class=\"reserva-info\">🗂️ {}</div>\n",
        escape_html(&reserva.tipo_reserva)
    ));
    if !reserva.curso.is_empty() {
        tarjeta.push_str(&format!(
            "      <div class=\"reserva-info\">🎓 {}</div>\n",
            escape_html(&reserva.curso)
        ));
    }
    tarjeta.push_str(&format!(
        "      <div class=\"reserva-info\">🕐 Inicio: {}</div>\n",
        escape_html(&formato_fecha(&reserva.fecha_inicio))
    ));
    // Sin fecha de fin no se pinta la línea, en vez de un texto de relleno.
    if let Some(fin) = &reserva.fecha_fin {
        tarjeta.push_str(&format!(
            "      <div class=\"reserva-info\">🕔 Fin: {}</div>\n",
            escape_html(&formato_fecha(fin))
        ));
    }
    tarjeta.push_str(&format!(
        "      <span class=\"estado {}\">{}</span>\n",
        escape_html(&clase_estado_reserva(&reserva.estado)),
        escape_html(&reserva.estado)
    ));
    tarjeta.push_str("    </div>\n");
    tarjeta
}
