use serde::Serialize;
use tokio::sync::broadcast;

// Vistas de listado con caché aguas arriba. Cada mutación declara cuáles
// de estas vistas deja obsoletas; los suscriptores re-consultan en la
// siguiente lectura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewTag {
    AdminNews,
    PublicNews,
    Home,
    Locations,
    Categories,
}

impl ViewTag {
    // La ruta pública que cada etiqueta representa
    pub fn route(&self) -> &'static str {
        match self {
            ViewTag::AdminNews => "/news",
            ViewTag::PublicNews => "/public-news",
            ViewTag::Home => "/",
            ViewTag::Locations => "/locations",
            ViewTag::Categories => "/categories",
        }
    }
}

// Bus de invalidación: canal broadcast sobre el que las mutaciones
// publican sus etiquetas. Publicar sin suscriptores no es un error.
#[derive(Debug, Clone)]
pub struct InvalidationBus {
    tx: broadcast::Sender<ViewTag>,
}

impl InvalidationBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewTag> {
        self.tx.subscribe()
    }

    pub fn invalidate(&self, tags: &[ViewTag]) {
        for tag in tags {
            // send solo falla cuando no hay receptores; en ese caso nadie
            // cachea y no hay nada que invalidar
            let _ = self.tx.send(*tag);
            tracing::debug!("Vista invalidada: {}", tag.route());
        }
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publica_las_etiquetas_declaradas_en_orden() {
        let bus = InvalidationBus::new();
        let mut rx = bus.subscribe();

        bus.invalidate(&[ViewTag::AdminNews, ViewTag::PublicNews, ViewTag::Home]);

        assert_eq!(rx.try_recv().unwrap(), ViewTag::AdminNews);
        assert_eq!(rx.try_recv().unwrap(), ViewTag::PublicNews);
        assert_eq!(rx.try_recv().unwrap(), ViewTag::Home);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn invalidar_sin_suscriptores_no_falla() {
        let bus = InvalidationBus::new();
        bus.invalidate(&[ViewTag::Locations]);
    }

    #[test]
    fn cada_etiqueta_conoce_su_ruta() {
        assert_eq!(ViewTag::PublicNews.route(), "/public-news");
        assert_eq!(ViewTag::Home.route(), "/");
    }
}
