use aulahub::notion::PaginaNotion;
use aulahub::notion::reservas::reserva_desde_pagina;
use serde_json::json;

fn pagina(valor: serde_json::Value) -> PaginaNotion {
    serde_json::from_value(valor).expect("Debe deserializar la página")
}

#[test]
fn test_reserva_completa_conserva_valores() {
    let p = pagina(json!({
        "id": "reserva-1",
        "properties": {
            "Aula": {"relation": [{"id": "aula-7"}]},
            "Fecha": {"date": {"start": "2026-08-07T10:00:00+02:00", "end": "2026-08-07T12:00:00+02:00"}},
            "Profesor/Responsable": {"people": [{"name": "María López"}]},
            "Tipo de reserva": {"select": {"name": "Clase"}},
            "Asignatura": {"rich_text": [{"plain_text": "Redes de Computadores"}]},
            "Curso": {"rich_text": [{"plain_text": "2º DAM"}]},
            "Estado": {"status": {"name": "Confirmada"}}
        }
    }));

    let reserva = reserva_desde_pagina(&p);
    assert_eq!(reserva.id, "reserva-1");
    assert_eq!(reserva.aula_id.as_deref(), Some("aula-7"));
    assert_eq!(reserva.fecha_inicio, "2026-08-07T10:00:00+02:00");
    assert_eq!(reserva.fecha_fin.as_deref(), Some("2026-08-07T12:00:00+02:00"));
    assert_eq!(reserva.profesor, "María López");
    assert_eq!(reserva.tipo_reserva, "Clase");
    assert_eq!(reserva.asignatura, "Redes de Computadores");
    assert_eq!(reserva.curso, "2º DAM");
    assert_eq!(reserva.estado, "Confirmada");
}

#[test]
fn test_reserva_sin_propiedades_usa_defaults() {
    let p = pagina(json!({"id": "reserva-2", "properties": {}}));

    let reserva = reserva_desde_pagina(&p);
    assert_eq!(reserva.id, "reserva-2");
    assert_eq!(reserva.aula_id, None);
    assert_eq!(reserva.fecha_inicio, "Sin fecha");
    assert_eq!(reserva.fecha_fin, None);
    assert_eq!(reserva.profesor, "Sin asignar");
    assert_eq!(reserva.tipo_reserva, "N/A");
    assert_eq!(reserva.asignatura, "Sin asignatura");
    assert_eq!(reserva.curso, "");
    assert_eq!(reserva.estado, "Desconocido");
}

#[test]
fn test_aula_id_nula_con_relacion_vacia_o_ausente() {
    let p = pagina(json!({
        "id": "reserva-3",
        "properties": {"Aula": {"relation": []}}
    }));
    assert_eq!(reserva_desde_pagina(&p).aula_id, None);

    let p = pagina(json!({"id": "reserva-4", "properties": {}}));
    assert_eq!(reserva_desde_pagina(&p).aula_id, None);
}

#[test]
fn test_aula_id_toma_la_primera_relacion() {
    let p = pagina(json!({
        "id": "reserva-5",
        "properties": {
            "Aula": {"relation": [{"id": "aula-1"}, {"id": "aula-2"}]}
        }
    }));
    assert_eq!(reserva_desde_pagina(&p).aula_id.as_deref(), Some("aula-1"));
}

#[test]
fn test_profesor_gana_el_nombre_primario() {
    // Con ambas propiedades presentes debe usarse "Profesor/Responsable".
    let p = pagina(json!({
        "id": "reserva-6",
        "properties": {
            "Profesor/Responsable": {"people": [{"name": "Ana Ruiz"}]},
            "Responsable": {"people": [{"name": "Pedro Gil"}]}
        }
    }));
    assert_eq!(reserva_desde_pagina(&p).profesor, "Ana Ruiz");
}

#[test]
fn test_profesor_cae_al_nombre_alternativo() {
    let p = pagina(json!({
        "id": "reserva-7",
        "properties": {
            "Responsable": {"people": [{"name": "Pedro Gil"}]}
        }
    }));
    assert_eq!(reserva_desde_pagina(&p).profesor, "Pedro Gil");

    // El primario presente pero vacío tampoco bloquea al alternativo.
    let p = pagina(json!({
        "id": "reserva-8",
        "properties": {
            "Profesor/Responsable": {"people": []},
            "Responsable": {"people": [{"name": "Pedro Gil"}]}
        }
    }));
    assert_eq!(reserva_desde_pagina(&p).profesor, "Pedro Gil");
}

#[test]
fn test_asignatura_y_curso_con_nombres_alternativos() {
    let p = pagina(json!({
        "id": "reserva-9",
        "properties": {
            "Asignatura/Actividad": {"rich_text": [{"plain_text": "Taller de robótica"}]},
            "Curso/Grupo": {"rich_text": [{"plain_text": "1º ESO B"}]}
        }
    }));

    let reserva = reserva_desde_pagina(&p);
    assert_eq!(reserva.asignatura, "Taller de robótica");
    assert_eq!(reserva.curso, "1º ESO B");

    // Ambos presentes: gana el primario.
    let p = pagina(json!({
        "id": "reserva-10",
        "properties": {
            "Asignatura": {"rich_text": [{"plain_text": "Física"}]},
            "Asignatura/Actividad": {"rich_text": [{"plain_text": "Taller"}]}
        }
    }));
    assert_eq!(reserva_desde_pagina(&p).asignatura, "Física");
}

#[test]
fn test_fecha_sin_end_propaga_nulo() {
    let p = pagina(json!({
        "id": "reserva-11",
        "properties": {
            "Fecha": {"date": {"start": "2026-09-01", "end": null}}
        }
    }));

    let reserva = reserva_desde_pagina(&p);
    assert_eq!(reserva.fecha_inicio, "2026-09-01");
    assert_eq!(reserva.fecha_fin, None);
}

#[test]
fn test_estado_es_propiedad_status_no_select() {
    // Un payload de tipo select en "Estado" no debe leerse como estado de
    // reserva: el campo es de tipo status.
    let p = pagina(json!({
        "id": "reserva-12",
        "properties": {
            "Estado": {"select": {"name": "Confirmada"}}
        }
    }));
    assert_eq!(reserva_desde_pagina(&p).estado, "Desconocido");
}
