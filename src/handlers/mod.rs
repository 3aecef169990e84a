pub mod alert_handlers;
pub mod api_v1;
pub mod tour_handlers;

use actix_web::web;

/// Register every route. Shared by the server and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(|| async {
            actix_web::HttpResponse::SeeOther()
                .insert_header(("Location", "/tours"))
                .finish()
        }))
        // /tours/new BEFORE /tours/{id} routes
        .route("/tours", web::get().to(tour_handlers::list))
        .route("/tours/new", web::get().to(tour_handlers::new_form))
        .route("/tours", web::post().to(tour_handlers::create))
        .route("/tours/{id}/edit", web::get().to(tour_handlers::edit_form))
        .route("/tours/{id}/bookings", web::get().to(tour_handlers::view_bookings))
        .route("/alerts/{id}/dismiss", web::post().to(alert_handlers::dismiss))
        .service(web::scope("/api/v1").configure(api_v1::configure));
}
