// Biblioteca raíz del crate `aulahub`.
// Reexporta los módulos principales y la función `run_server` que arranca el
// servicio HTTP seleccionado por configuración.
pub mod config;
pub mod handlers;
pub mod models;
pub mod notion;
pub mod server;
pub mod views;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
