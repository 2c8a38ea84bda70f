use super::{clase_estado_aula, escape_html};
use crate::models::Aula;

const CABECERA: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Gestión de Aulas LANAU112</title>
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
    .aulas-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
      gap: 20px;
      margin-top: 30px;
    }
    .aula-card {
      background: white;
      border-radius: 10px;
      padding: 20px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.1);
      transition: transform 0.2s;
    }
    .aula-card:hover {
      transform: translateY(-5px);
      box-shadow: 0 4px 12px rgba(0,0,0,0.15);
    }
    .aula-nombre {
      font-size: 1.3em;
      font-weight: bold;
      color: #2563eb;
      margin-bottom: 10px;
    }
    .aula-info {
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
    .disponible { background: #d1fae5; color: #065f46; }
    .mantenimiento { background: #fed7aa; color: #92400e; }
    .ocupada { background: #fecaca; color: #991b1b; }
  </style>
</head>
<body>
  <h1>🏫 Gestión de Aulas LANAU112</h1>
"#;

/// Documento HTML completo con la parrilla de aulas.
pub fn pagina_aulas(aulas: &[Aula]) -> String {
    let mut html = String::from(CABECERA);
    html.push_str(&format!(
        "  <p style=\"text-align: center; color: #666;\">Total de aulas: {}</p>\n",
        aulas.len()
    ));
    html.push_str("  <div class=\"aulas-grid\">\n");
    for aula in aulas {
        html.push_str(&tarjeta_aula(aula));
    }
    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

fn tarjeta_aula(aula: &Aula) -> String {
    format!(
        concat!(
            "    <div class=\"aula-card\">\n",
            "      <div class=\"aula-nombre\">{nombre}</div>\n",
            "      <div class=\"aula-info\">🏢 {edificio}</div>\n",
            "      <div class=\"aula-info\">📍 {planta}</div>\n",
            "      <div class=\"aula-info\">👥 Capacidad: {capacidad} personas</div>\n",
            "      <span class=\"estado {clase}\">{estado}</span>\n",
            "    </div>\n",
        ),
        nombre = escape_html(&aula.nombre),
        edificio = escape_html(&aula.edificio),
        planta = escape_html(&aula.planta),
        capacidad = aula.capacidad,
        clase = escape_html(&clase_estado_aula(&aula.estado)),
        estado = escape_html(&aula.estado),
    )
}
