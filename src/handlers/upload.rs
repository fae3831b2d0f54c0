use axum::{
    body::Bytes,
    extract::Multipart,
    response::{IntoResponse, Json},
};
use mime::Mime;
use serde_json::json;
use std::path::Path;
use tokio::fs; // Usamos el sistema de archivos asíncrono
use uuid::Uuid;

use crate::error::AppError;

// Configuración: carpeta raíz donde se guardan las fotos
const UPLOAD_DIR: &str = "uploads";
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024; // 5MB
const DEFAULT_FOLDER: &str = "news";

// POST /api/admin/upload: recibe el campo "image" (y opcionalmente
// "folder") y devuelve la URL pública estable del archivo guardado
pub async fn upload_image_handler(mut multipart: Multipart) -> Result<impl IntoResponse, AppError> {
    let mut folder = DEFAULT_FOLDER.to_string();
    let mut image: Option<(String, Option<Mime>, Bytes)> = None;

    // 1. Recorrer los campos del formulario (el orden no está garantizado)
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Upload("Error al leer el formulario".to_string()))?
    {
        match field.name().unwrap_or("") {
            "folder" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|_| AppError::Upload("Error al leer el formulario".to_string()))?;
                let clean = sanitize_folder(&raw);
                if !clean.is_empty() {
                    folder = clean;
                }
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("unknown.jpg").to_string();
                let content_type: Option<Mime> = field
                    .content_type()
                    .and_then(|ct_str| ct_str.parse::<Mime>().ok());

                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::Upload("Error al leer el archivo".to_string()))?;

                image = Some((file_name, content_type, data));
            }
            _ => {}
        }
    }

    let Some((file_name, content_type, data)) = image else {
        return Err(AppError::Upload("No se envió ningún campo 'image'".to_string()));
    };

    // 2. Validar tamaño
    if data.len() > MAX_IMAGE_BYTES {
        return Err(AppError::Upload(
            "La imagen excede el tamaño máximo de 5MB".to_string(),
        ));
    }

    // 3. Validar MIME (solo imágenes comunes)
    if let Some(ct) = content_type {
        let allowed = matches!(
            (ct.type_().as_str(), ct.subtype().as_str()),
            ("image", "jpeg") | ("image", "png") | ("image", "webp") | ("image", "gif")
        );
        if !allowed {
            return Err(AppError::Upload(
                "Solo se permiten imágenes (jpg, png, webp, gif)".to_string(),
            ));
        }
    }

    // 4. Generar nombre único conservando la extensión
    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("jpg");
    let new_filename = format!("{}.{}", Uuid::new_v4(), extension);

    let dir = format!("{}/{}", UPLOAD_DIR, folder);
    if let Err(e) = fs::create_dir_all(&dir).await {
        tracing::error!("No se pudo preparar la carpeta de subida: {:?}", e);
        return Err(AppError::Internal(
            "No se pudo guardar la imagen".to_string(),
        ));
    }

    // 5. Guardar en el disco
    let filepath = format!("{}/{}", dir, new_filename);
    if let Err(e) = fs::write(&filepath, &data).await {
        tracing::error!("Error guardando imagen: {:?}", e);
        return Err(AppError::Internal(
            "No se pudo guardar la imagen".to_string(),
        ));
    }

    // 6. Devolver la URL pública estable
    let public_url = format!("/uploads/{}/{}", folder, new_filename);

    Ok(Json(json!({
        "url": public_url,
        "original_name": file_name
    })))
}

// Solo borramos URLs que nosotros mismos emitimos; el fallo se registra
// y jamás se propaga al caller
pub async fn delete_uploaded_image(url: &str) {
    let Some(relative) = url.strip_prefix("/uploads/") else {
        return;
    };
    if relative.contains("..") {
        return;
    }

    let path = Path::new(UPLOAD_DIR).join(relative);
    if let Err(e) = fs::remove_file(&path).await {
        tracing::warn!("No se pudo eliminar la imagen {}: {:?}", url, e);
    }
}

// La carpeta destino viaja en el formulario: la reducimos a un nombre plano
fn sanitize_folder(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_carpeta_se_sanea_a_un_nombre_plano() {
        assert_eq!(sanitize_folder("Buraq Media/news"), "buraqmedianews");
        assert_eq!(sanitize_folder("../../etc"), "etc");
        assert_eq!(sanitize_folder("noticias_2024"), "noticias_2024");
        assert_eq!(sanitize_folder("!!!"), "");
    }
}
