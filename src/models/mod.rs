// Estructuras de datos principales

/// Aula normalizada a partir de una página de la base de datos remota.
/// `id` es el identificador de la página y siempre está presente; el resto
/// de campos llegan aquí ya con su valor por defecto si faltaban en origen.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Aula {
    pub id: String,
    pub nombre: String,
    pub edificio: String,
    pub planta: String,
    pub capacidad: u32,
    pub estado: String,
}

/// Reserva de un aula. `aula_id` referencia el `id` de un `Aula`, pero la
/// integridad referencial nunca se comprueba: una referencia colgante se
/// muestra tal cual llegó.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserva {
    pub id: String,
    pub aula_id: Option<String>,
    pub fecha_inicio: String,
    pub fecha_fin: Option<String>,
    pub profesor: String,
    pub tipo_reserva: String,
    pub asignatura: String,
    /// Cadena vacía cuando la reserva no tiene curso asociado; se distingue
    /// así "sin curso" de "sin datos".
    pub curso: String,
    pub estado: String,
}
