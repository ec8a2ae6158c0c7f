use crate::db::store::HotelStore;
use crate::error::ApiError;
use crate::models::search::{HotelSearchParams, SearchCriteria};
use actix_web::{web, HttpResponse};

pub async fn search_hotels(
    store: web::Data<dyn HotelStore>,
    params: web::Query<HotelSearchParams>,
) -> Result<HttpResponse, ApiError> {
    // Malformed price bounds are rejected here, before the store is touched.
    let criteria = SearchCriteria::try_from(params.into_inner())?;

    let hotels = store.search(&criteria).await?;
    log::debug!("{} hotels matched {:?}", hotels.len(), criteria);

    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_hotel_by_id(
    store: web::Data<dyn HotelStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match store.find_by_id(id).await? {
        Some(hotel) => Ok(HttpResponse::Ok().json(hotel)),
        None => Err(ApiError::HotelNotFound),
    }
}
