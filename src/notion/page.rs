use std::collections::HashMap;

use serde::Deserialize;

/// Página cruda tal como la devuelve la consulta a la base de datos.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginaNotion {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, Propiedad>,
}

/// Bolsa de propiedades de una página. La API etiqueta cada propiedad con su
/// tipo y solo rellena el campo de ese tipo, así que aquí todo es opcional y
/// los accesores cortan en el primer nivel ausente en lugar de fallar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Propiedad {
    #[serde(default)]
    pub title: Option<Vec<Fragmento>>,
    #[serde(default)]
    pub rich_text: Option<Vec<Fragmento>>,
    #[serde(default)]
    pub select: Option<Opcion>,
    #[serde(default)]
    pub status: Option<Opcion>,
    #[serde(default)]
    pub number: Option<f64>,
    #[serde(default)]
    pub relation: Option<Vec<Referencia>>,
    #[serde(default)]
    pub date: Option<RangoFecha>,
    #[serde(default)]
    pub people: Option<Vec<Persona>>,
}

/// Fragmento de texto enriquecido (aparece tanto en títulos como en campos
/// de texto).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fragmento {
    #[serde(default)]
    pub text: Option<TextoPlano>,
    #[serde(default)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextoPlano {
    #[serde(default)]
    pub content: Option<String>,
}

/// Opción elegida en una propiedad select o status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Opcion {
    #[serde(default)]
    pub name: Option<String>,
}

/// Referencia a otra página (propiedad relation).
#[derive(Debug, Clone, Deserialize)]
pub struct Referencia {
    pub id: String,
}

/// Rango de una propiedad de fecha: `start` y `end` opcionales.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangoFecha {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub name: Option<String>,
}

impl Propiedad {
    /// Contenido del primer fragmento de un título (`title[0].text.content`).
    pub fn texto_titulo(&self) -> Option<String> {
        self.title.as_ref()?.first()?.text.as_ref()?.content.clone()
    }

    /// Texto plano del primer fragmento enriquecido (`rich_text[0].plain_text`).
    pub fn texto_plano(&self) -> Option<String> {
        self.rich_text.as_ref()?.first()?.plain_text.clone()
    }

    pub fn nombre_select(&self) -> Option<String> {
        self.select.as_ref()?.name.clone()
    }

    pub fn nombre_status(&self) -> Option<String> {
        self.status.as_ref()?.name.clone()
    }

    pub fn numero(&self) -> Option<f64> {
        self.number
    }

    /// Identificador de la primera referencia de una relación, o None si la
    /// lista está vacía o la propiedad no es una relación.
    pub fn primera_relacion(&self) -> Option<String> {
        self.relation.as_ref()?.first().map(|r| r.id.clone())
    }

    pub fn rango_fecha(&self) -> Option<&RangoFecha> {
        self.date.as_ref()
    }

    /// Nombre visible de la primera persona de una lista de personas.
    pub fn primera_persona(&self) -> Option<String> {
        self.people.as_ref()?.first()?.name.clone()
    }
}

/// Evalúa una lista ordenada de nombres de propiedad candidatos y devuelve
/// el primer valor no vacío. El orden resuelve ambigüedades del esquema
/// origen: el nombre primario va siempre en primera posición.
pub fn primer_valor<T, F>(
    props: &HashMap<String, Propiedad>,
    nombres: &[&str],
    extraer: F,
) -> Option<T>
where
    F: Fn(&Propiedad) -> Option<T>,
{
    nombres.iter().find_map(|n| props.get(*n).and_then(|p| extraer(p)))
}
