mod memo;
mod store;

const DATABASE_PATH: &str = "./memos.db";
const LISTEN_ADDRESS: (&str, u16) = ("0.0.0.0", 8080);

struct AppState {
    store: store::MemoStore,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = store::MemoStore::open(std::path::Path::new(DATABASE_PATH))
        .await
        .map_err(|error| {
            log::error!("{error}");
            std::io::Error::other(error)
        })?;

    let app_state = actix_web::web::Data::new(AppState {
        store: store.clone(),
    });

    log::info!("listening on {}:{}", LISTEN_ADDRESS.0, LISTEN_ADDRESS.1);
    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .app_data(app_state.clone())
            .wrap(actix_web::middleware::Logger::default())
            .wrap(memo::cors())
            .configure(memo::configure)
    })
    .bind(LISTEN_ADDRESS)?
    .run()
    .await?;

    log::info!("server stopped, closing memo database");
    store.close().await;
    Ok(())
}
