use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use super::EstadoApp;
use crate::models::Reserva;
use crate::notion::reservas::obtener_reservas;
use crate::views;

/// Construye el sobre JSON del listado de reservas.
pub fn respuesta_listado_reservas(resultado: Result<Vec<Reserva>, String>) -> HttpResponse {
    match resultado {
        Ok(reservas) => HttpResponse::Ok().json(json!({
            "success": true,
            "total": reservas.len(),
            "data": reservas,
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": e,
        })),
    }
}

/// Construye la página HTML del listado de reservas, o el fragmento de error.
pub fn respuesta_pagina_reservas(resultado: Result<Vec<Reserva>, String>) -> HttpResponse {
    match resultado {
        Ok(reservas) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::reservas::pagina_reservas(&reservas)),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body(views::pagina_error(&e)),
    }
}

/// GET /api/reservas
pub async fn api_reservas_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    respuesta_listado_reservas(obtener_reservas(&estado.notion, &estado.base_datos).await)
}

/// GET /
pub async fn pagina_reservas_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    respuesta_pagina_reservas(obtener_reservas(&estado.notion, &estado.base_datos).await)
}

/// GET /help
pub async fn help_reservas_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "description": "API de solo lectura sobre las reservas de aulas. GET /api/reservas devuelve el listado como JSON; GET / lo muestra como página HTML.",
        "rutas": ["/api/reservas", "/", "/help"],
    }))
}
