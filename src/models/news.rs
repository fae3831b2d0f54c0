use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

// 1. Estructura que representa una fila completa de la tabla news
#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct News {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub special: bool,
    pub location_id: Uuid,
    pub category_id: Option<Uuid>,
}

// 2. La misma fila con sus relaciones resueltas (JOIN con locations y categories)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NewsWithRelations {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub special: bool,
    pub location_id: Uuid,
    pub category_id: Option<Uuid>,
    pub location_name: String,
    pub category_name: Option<String>,
}

// 3. Lo que recibimos del panel de administración al crear o editar una noticia.
//    La validación corre ANTES de tocar la base de datos.
#[derive(Debug, Deserialize, Validate)]
pub struct NewsSchema {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub content: String,
    #[garde(skip)]
    pub date: DateTime<Utc>,
    #[garde(inner(custom(url_or_empty)))]
    pub image: Option<String>,
    #[garde(inner(custom(url_or_empty)))]
    pub link: Option<String>,
    #[garde(inner(custom(url_or_empty)))]
    pub whatsapp_link: Option<String>,
    #[garde(skip)]
    pub contact_phone: Option<String>,
    #[garde(skip)]
    pub contact_whatsapp: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub special: bool,
    #[garde(length(min = 1))]
    pub location_id: String,
    #[garde(skip)]
    pub category_id: Option<String>,
}

// Los campos de URL aceptan cadena vacía: el formulario manda "" cuando
// el admin deja el campo en blanco
fn url_or_empty(value: &str, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Ok(());
    }
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|_| garde::Error::new("no es una URL válida"))
}

// 4. Datos ya validados y normalizados, listos para persistir
#[derive(Debug, Clone)]
pub struct NewsData {
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub special: bool,
    pub location_id: Uuid,
    pub category_id: Option<Uuid>,
}

// "" y ausente son lo mismo: nunca guardamos cadenas vacías
fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl NewsSchema {
    // Valida el contrato de campos y normaliza los opcionales vacíos a NULL.
    // Si algo falla, ninguna mutación llega a la base de datos.
    pub fn into_data(self) -> Result<NewsData, AppError> {
        self.validate()?;

        let location_id = Uuid::parse_str(&self.location_id)
            .map_err(|_| AppError::field("location_id", "no es un identificador válido"))?;

        let category_id = match none_if_empty(self.category_id) {
            Some(raw) => Some(
                Uuid::parse_str(&raw)
                    .map_err(|_| AppError::field("category_id", "no es un identificador válido"))?,
            ),
            None => None,
        };

        Ok(NewsData {
            title: self.title,
            content: self.content,
            date: self.date,
            image: none_if_empty(self.image),
            link: none_if_empty(self.link),
            whatsapp_link: none_if_empty(self.whatsapp_link),
            contact_phone: none_if_empty(self.contact_phone),
            contact_whatsapp: none_if_empty(self.contact_whatsapp),
            special: self.special,
            location_id,
            category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_schema() -> NewsSchema {
        NewsSchema {
            title: "Inauguración del puente".to_string(),
            content: "El puente quedó abierto al tráfico".to_string(),
            date: Utc::now(),
            image: None,
            link: None,
            whatsapp_link: None,
            contact_phone: None,
            contact_whatsapp: None,
            special: false,
            location_id: Uuid::new_v4().to_string(),
            category_id: None,
        }
    }

    #[test]
    fn los_opcionales_vacios_se_normalizan_a_null() {
        let mut schema = valid_schema();
        schema.image = Some("".to_string());
        schema.link = Some("".to_string());
        schema.whatsapp_link = Some("".to_string());
        schema.contact_phone = Some("".to_string());
        schema.contact_whatsapp = Some("".to_string());
        schema.category_id = Some("".to_string());

        let data = schema.into_data().unwrap();
        assert_eq!(data.image, None);
        assert_eq!(data.link, None);
        assert_eq!(data.whatsapp_link, None);
        assert_eq!(data.contact_phone, None);
        assert_eq!(data.contact_whatsapp, None);
        assert_eq!(data.category_id, None);
    }

    #[test]
    fn los_opcionales_con_valor_se_conservan() {
        let mut schema = valid_schema();
        schema.image = Some("https://example.com/foto.jpg".to_string());
        schema.contact_phone = Some("+91 9876543210".to_string());

        let data = schema.into_data().unwrap();
        assert_eq!(data.image.as_deref(), Some("https://example.com/foto.jpg"));
        assert_eq!(data.contact_phone.as_deref(), Some("+91 9876543210"));
    }

    #[test]
    fn titulo_vacio_es_rechazado_con_el_campo_senalado() {
        let mut schema = valid_schema();
        schema.title = "".to_string();

        let err = schema.into_data().unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == "title"));
            }
            other => panic!("se esperaba error de validación, llegó {:?}", other),
        }
    }

    #[test]
    fn contenido_vacio_es_rechazado() {
        let mut schema = valid_schema();
        schema.content = "".to_string();
        assert!(matches!(
            schema.into_data(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn una_url_malformada_es_rechazada() {
        let mut schema = valid_schema();
        schema.image = Some("esto no es una url".to_string());

        let err = schema.into_data().unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == "image"));
            }
            other => panic!("se esperaba error de validación, llegó {:?}", other),
        }
    }

    #[test]
    fn location_id_malformado_es_rechazado() {
        let mut schema = valid_schema();
        schema.location_id = "no-soy-un-uuid".to_string();
        assert!(matches!(schema.into_data(), Err(AppError::Validation(_))));
    }

    #[test]
    fn category_id_valido_se_parsea() {
        let cat = Uuid::new_v4();
        let mut schema = valid_schema();
        schema.category_id = Some(cat.to_string());

        let data = schema.into_data().unwrap();
        assert_eq!(data.category_id, Some(cat));
    }
}
