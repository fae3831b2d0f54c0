use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::{
    handlers::{auth, category, feed, location, news, upload},
    state::AppState,
    utils::session::session_middleware,
};

pub fn create_routes(state: AppState) -> Router {
    // 1. Rutas públicas (todo el mundo): las páginas del sitio y el login
    let public_routes = Router::new()
        .route("/api/home", get(feed::home_feed_handler))
        .route("/api/news/public", get(feed::public_feed_handler))
        .route("/api/news/special", get(feed::special_news_handler))
        .route("/api/news/:id", get(feed::article_detail_handler))
        .route("/api/locations", get(location::list_locations_handler))
        .route("/api/locations/:name/news", get(feed::location_feed_handler))
        .route("/api/categories", get(category::list_categories_handler))
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/logout", post(auth::logout_handler))
        .nest_service("/uploads", ServeDir::new("uploads"));

    // 2. Rutas del panel: la cookie de sesión es el único gate
    let admin_routes = Router::new()
        .route(
            "/api/admin/news",
            get(news::list_news_handler).post(news::create_news_handler),
        )
        .route(
            "/api/admin/news/:id",
            put(news::update_news_handler).delete(news::delete_news_handler),
        )
        .route(
            "/api/admin/locations",
            get(location::list_locations_handler).post(location::create_location_handler),
        )
        .route(
            "/api/admin/locations/:id",
            put(location::update_location_handler).delete(location::delete_location_handler),
        )
        .route(
            "/api/admin/categories",
            get(category::list_categories_handler).post(category::create_category_handler),
        )
        .route(
            "/api/admin/categories/:id",
            put(category::update_category_handler).delete(category::delete_category_handler),
        )
        .route(
            "/api/admin/upload",
            // El límite por defecto (2MB) cortaría las imágenes válidas
            // antes de nuestra propia verificación de 5MB
            post(upload::upload_image_handler).layer(DefaultBodyLimit::max(6 * 1024 * 1024)),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    // Fusionamos todo
    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
}
