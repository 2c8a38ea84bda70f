use aulahub::notion::PaginaNotion;
use aulahub::notion::aulas::aula_desde_pagina;
use serde_json::json;

fn pagina(valor: serde_json::Value) -> PaginaNotion {
    serde_json::from_value(valor).expect("Debe deserializar la página")
}

#[test]
fn test_aula_completa_conserva_valores() {
    let p = pagina(json!({
        "id": "aula-1",
        "properties": {
            "Nombre del aula": {"title": [{"text": {"content": "Laboratorio 3"}, "plain_text": "Laboratorio 3"}]},
            "Edificio": {"select": {"name": "Edificio B"}},
            "Planta": {"select": {"name": "Planta 2"}},
            "Capacidad": {"number": 30},
            "Estado": {"select": {"name": "Disponible"}}
        }
    }));

    let aula = aula_desde_pagina(&p);
    assert_eq!(aula.id, "aula-1");
    assert_eq!(aula.nombre, "Laboratorio 3");
    assert_eq!(aula.edificio, "Edificio B");
    assert_eq!(aula.planta, "Planta 2");
    assert_eq!(aula.capacidad, 30);
    assert_eq!(aula.estado, "Disponible");
}

#[test]
fn test_aula_sin_propiedades_usa_defaults() {
    let p = pagina(json!({"id": "aula-2", "properties": {}}));

    let aula = aula_desde_pagina(&p);
    assert_eq!(aula.id, "aula-2");
    assert_eq!(aula.nombre, "Sin nombre");
    assert_eq!(aula.edificio, "N/A");
    assert_eq!(aula.planta, "N/A");
    assert_eq!(aula.capacidad, 0);
    assert_eq!(aula.estado, "Desconocido");
}

#[test]
fn test_campo_ausente_no_afecta_al_resto() {
    // El título existe pero con la lista vacía; los demás campos presentes
    // deben extraerse igual.
    let p = pagina(json!({
        "id": "aula-3",
        "properties": {
            "Nombre del aula": {"title": []},
            "Capacidad": {"number": 45},
            "Estado": {"select": {"name": "Ocupada"}}
        }
    }));

    let aula = aula_desde_pagina(&p);
    assert_eq!(aula.nombre, "Sin nombre");
    assert_eq!(aula.capacidad, 45);
    assert_eq!(aula.estado, "Ocupada");
}

#[test]
fn test_titulo_corta_en_cada_nivel_de_anidamiento() {
    // Fragmento presente pero sin `text` interior: no debe fallar ni
    // devolver nada distinto del valor por defecto.
    let p = pagina(json!({
        "id": "aula-4",
        "properties": {
            "Nombre del aula": {"title": [{"plain_text": "Aula Magna"}]}
        }
    }));

    assert_eq!(aula_desde_pagina(&p).nombre, "Sin nombre");
}

#[test]
fn test_select_con_name_nulo_cae_al_default() {
    let p = pagina(json!({
        "id": "aula-5",
        "properties": {
            "Edificio": {"select": {"name": null}},
            "Estado": {"select": null}
        }
    }));

    let aula = aula_desde_pagina(&p);
    assert_eq!(aula.edificio, "N/A");
    assert_eq!(aula.estado, "Desconocido");
}

#[test]
fn test_capacidad_nula_o_negativa_cae_a_cero() {
    let p = pagina(json!({
        "id": "aula-6",
        "properties": {
            "Capacidad": {"number": null}
        }
    }));
    assert_eq!(aula_desde_pagina(&p).capacidad, 0);

    let p = pagina(json!({
        "id": "aula-7",
        "properties": {
            "Capacidad": {"number": -12}
        }
    }));
    assert_eq!(aula_desde_pagina(&p).capacidad, 0);
}
