const INVALID_INPUT: &str = "Invalid input";

/// Any origin, answered with `*` and never with credentials.
pub(crate) fn cors() -> actix_cors::Cors {
    actix_cors::Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

pub(crate) fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.app_data(
        actix_web::web::JsonConfig::default()
            .limit(usize::MAX)
            .content_type_required(false)
            .content_type(|_| true)
            .error_handler(|error, _request| {
                log::debug!("rejected memo payload: {error}");
                actix_web::error::InternalError::from_response(
                    error,
                    actix_web::HttpResponse::BadRequest()
                        .json(common::ErrorPayload::new(INVALID_INPUT)),
                )
                .into()
            }),
    )
    .service(
        actix_web::web::resource("/memos")
            .route(actix_web::web::get().to(index))
            .route(actix_web::web::post().to(create)),
    );
}

fn storage_failure(error: crate::store::StoreError) -> actix_web::HttpResponse {
    log::error!("memo storage failed: {error}");
    actix_web::HttpResponse::InternalServerError().json(common::ErrorPayload::new(error.to_string()))
}

pub(crate) async fn index(
    app_state: actix_web::web::Data<crate::AppState>,
) -> actix_web::HttpResponse {
    match app_state.store.list().await {
        Ok(memos) => actix_web::HttpResponse::Ok().json(memos),
        Err(error) => storage_failure(error),
    }
}

pub(crate) async fn create(
    app_state: actix_web::web::Data<crate::AppState>,
    payload: actix_web::web::Json<common::NewMemoPayload>,
) -> actix_web::HttpResponse {
    match app_state.store.insert(payload.into_inner().body).await {
        Ok(memo) => actix_web::HttpResponse::Created().json(memo),
        Err(error) => storage_failure(error),
    }
}
