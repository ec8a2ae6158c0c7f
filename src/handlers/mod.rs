pub mod hotels;
pub mod status;

use actix_web::{middleware, web};

use crate::error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status::index)).service(
        web::scope("/api/hoteis")
            // A non-integer id can never name a hotel.
            .app_data(
                web::PathConfig::default().error_handler(|_, _| ApiError::HotelNotFound.into()),
            )
            .app_data(web::QueryConfig::default().error_handler(|err, _| {
                ApiError::InvalidQuery(err.to_string()).into()
            }))
            .route("", web::get().to(hotels::search_hotels))
            .route("/{id}", web::get().to(hotels::get_hotel_by_id)),
    );
}

/// Permissive CORS for the mobile client.
pub fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*"))
}
