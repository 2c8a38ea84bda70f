use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use super::EstadoApp;
use crate::models::Aula;
use crate::notion::aulas::obtener_aulas;
use crate::views;

/// Construye el sobre JSON del listado de aulas. Separado del handler para
/// poder probar la respuesta sin consultar la base remota.
pub fn respuesta_listado_aulas(resultado: Result<Vec<Aula>, String>) -> HttpResponse {
    match resultado {
        Ok(aulas) => HttpResponse::Ok().json(json!({
            "success": true,
            "total": aulas.len(),
            "data": aulas,
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": e,
        })),
    }
}

/// Construye la página HTML del listado de aulas, o el fragmento de error.
pub fn respuesta_pagina_aulas(resultado: Result<Vec<Aula>, String>) -> HttpResponse {
    match resultado {
        Ok(aulas) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::aulas::pagina_aulas(&aulas)),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body(views::pagina_error(&e)),
    }
}

/// GET /api/aulas
pub async fn api_aulas_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    respuesta_listado_aulas(obtener_aulas(&estado.notion, &estado.base_datos).await)
}

/// GET /
pub async fn pagina_aulas_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    respuesta_pagina_aulas(obtener_aulas(&estado.notion, &estado.base_datos).await)
}

/// GET /help
pub async fn help_aulas_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "description": "API de solo lectura sobre el inventario de aulas. GET /api/aulas devuelve el listado como JSON; GET / lo muestra como página HTML.",
        "rutas": ["/api/aulas", "/", "/help"],
    }))
}
