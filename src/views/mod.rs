use serde::Serialize;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::location::Location;
use crate::models::news::NewsWithRelations;
use crate::repositories::{location_repository, news_repository};

// Cuántas noticias entran al carrusel destacado y a la franja de últimas
const FEATURED_COUNT: usize = 4;
const LATEST_STRIP: std::ops::Range<usize> = 1..5;

// Composición de vistas: funciones sin estado que arman las formas que
// piden las páginas a partir de lecturas de los repositorios. Ninguna muta.

#[derive(Debug, Serialize)]
pub struct HomeFeed {
    pub featured: Vec<NewsWithRelations>,
    pub latest: Vec<NewsWithRelations>,
    pub locations: Vec<LocationSection>,
}

#[derive(Debug, Serialize)]
pub struct LocationSection {
    pub id: Uuid,
    pub name: String,
    pub news: Vec<NewsWithRelations>,
}

#[derive(Debug, Serialize)]
pub struct LocationFeed {
    pub location: Location,
    pub news: Vec<NewsWithRelations>,
    pub total_count: i64,
    pub total_pages: i64,
    pub page: i64,
}

#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    pub news: NewsWithRelations,
    pub related: Vec<NewsWithRelations>,
}

// GET /: carrusel (primeras 4), franja de últimas ([1..5)) y el grid por
// ubicación. Un feed vacío produce secciones vacías, nunca un error.
pub async fn home_feed(pool: &DbPool) -> Result<HomeFeed, AppError> {
    let feed = news_repository::get_public_feed(pool, news_repository::PUBLIC_FEED_LIMIT).await?;
    let grouped =
        news_repository::get_latest_per_location(pool, news_repository::NEWS_PER_LOCATION).await?;

    let (featured, latest) = split_home_feed(feed);
    let locations = group_by_location(grouped);

    Ok(HomeFeed {
        featured,
        latest,
        locations,
    })
}

// GET /location/:name?page=N: 404 si el nombre no existe; la paginación
// ajusta la página al rango válido
pub async fn location_feed(
    pool: &DbPool,
    name: &str,
    page: Option<String>,
) -> Result<LocationFeed, AppError> {
    let location = location_repository::find_by_name(pool, name)
        .await?
        .ok_or(AppError::NotFound)?;

    let page = parse_page(page);
    let page_data = news_repository::get_paginated(
        pool,
        location.id,
        page,
        news_repository::PAGE_SIZE,
    )
    .await?;

    Ok(LocationFeed {
        location,
        news: page_data.news,
        total_count: page_data.total_count,
        total_pages: page_data.total_pages,
        page: page_data.page,
    })
}

// GET /news/:id: la noticia con relaciones más sus relacionadas (misma
// ubicación o categoría). Un id malformado tampoco resuelve: 404.
pub async fn article_detail(pool: &DbPool, id: &str) -> Result<ArticleDetail, AppError> {
    let id = Uuid::parse_str(id).map_err(|_| AppError::NotFound)?;

    let news = news_repository::find_with_relations(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let related = news_repository::get_related(
        pool,
        news.id,
        news.location_id,
        news.category_id,
        news_repository::RELATED_LIMIT,
    )
    .await?;

    Ok(ArticleDetail { news, related })
}

// Barra lateral compartida entre páginas
pub async fn sidebar_feed(pool: &DbPool) -> Result<Vec<NewsWithRelations>, AppError> {
    news_repository::get_special(pool, news_repository::SPECIAL_LIMIT).await
}

// --- Ayudantes puros ---

// El carrusel muestra las primeras 4; la franja de últimas, los elementos
// [1..5) (el primero ya es el protagonista del carrusel)
fn split_home_feed(feed: Vec<NewsWithRelations>) -> (Vec<NewsWithRelations>, Vec<NewsWithRelations>) {
    let featured = feed.iter().take(FEATURED_COUNT).cloned().collect();
    let latest = feed
        .into_iter()
        .skip(LATEST_STRIP.start)
        .take(LATEST_STRIP.len())
        .collect();
    (featured, latest)
}

// Las filas llegan ordenadas por nombre de ubicación y fecha descendente;
// agrupamos preservando ese orden. Las ubicaciones sin noticias no llegan.
fn group_by_location(rows: Vec<NewsWithRelations>) -> Vec<LocationSection> {
    let mut sections: Vec<LocationSection> = Vec::new();

    for item in rows {
        match sections.last_mut() {
            Some(section) if section.id == item.location_id => section.news.push(item),
            _ => sections.push(LocationSection {
                id: item.location_id,
                name: item.location_name.clone(),
                news: vec![item],
            }),
        }
    }

    sections
}

// parseInt(page || '1') || 1: cualquier cosa que no sea un número es página 1
fn parse_page(raw: Option<String>) -> i64 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn make_news(location_id: Uuid, location_name: &str, age_hours: i64) -> NewsWithRelations {
        NewsWithRelations {
            id: Uuid::new_v4(),
            title: format!("Noticia de {}", location_name),
            content: "contenido".to_string(),
            date: Utc::now() - Duration::hours(age_hours),
            image: None,
            link: None,
            whatsapp_link: None,
            contact_phone: None,
            contact_whatsapp: None,
            special: false,
            location_id,
            category_id: None,
            location_name: location_name.to_string(),
            category_name: None,
        }
    }

    #[test]
    fn el_feed_se_parte_en_carrusel_y_franja() {
        let loc = Uuid::new_v4();
        let feed: Vec<_> = (0..8).map(|i| make_news(loc, "Koodathai", i)).collect();
        let ids: Vec<_> = feed.iter().map(|n| n.id).collect();

        let (featured, latest) = split_home_feed(feed);

        assert_eq!(featured.len(), 4);
        assert_eq!(latest.len(), 4);
        // Carrusel: [0..4); franja: [1..5)
        assert_eq!(featured[0].id, ids[0]);
        assert_eq!(featured[3].id, ids[3]);
        assert_eq!(latest[0].id, ids[1]);
        assert_eq!(latest[3].id, ids[4]);
    }

    #[test]
    fn un_feed_vacio_produce_secciones_vacias() {
        let (featured, latest) = split_home_feed(Vec::new());
        assert!(featured.is_empty());
        assert!(latest.is_empty());
        assert!(group_by_location(Vec::new()).is_empty());
    }

    #[test]
    fn un_feed_de_una_sola_noticia_no_repite_en_la_franja() {
        let loc = Uuid::new_v4();
        let feed = vec![make_news(loc, "Koodathai", 0)];

        let (featured, latest) = split_home_feed(feed);
        assert_eq!(featured.len(), 1);
        assert!(latest.is_empty());
    }

    #[test]
    fn el_grid_agrupa_por_ubicacion_preservando_el_orden() {
        let vadakara = Uuid::new_v4();
        let koodathai = Uuid::new_v4();
        // Orden de llegada: nombre ASC, fecha DESC (como las entrega la query)
        let rows = vec![
            make_news(koodathai, "Koodathai", 1),
            make_news(koodathai, "Koodathai", 2),
            make_news(vadakara, "Vadakara", 1),
        ];

        let sections = group_by_location(rows);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Koodathai");
        assert_eq!(sections[0].news.len(), 2);
        assert_eq!(sections[1].name, "Vadakara");
        assert_eq!(sections[1].news.len(), 1);
    }

    #[test]
    fn la_pagina_no_numerica_o_ausente_es_la_primera() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc".to_string())), 1);
        assert_eq!(parse_page(Some("".to_string())), 1);
        assert_eq!(parse_page(Some("7".to_string())), 7);
    }
}
