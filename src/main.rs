use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use meeting_scheduler_service::db::init_db_pool;
use meeting_scheduler_service::service::{self, log::init_logger};
use meeting_scheduler_service::{handlers, PGPool};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logger();
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|e| {
        panic!("Failed to get env with name 'DATABASE_URL': {:?}", e);
    });
    let pool: PGPool = init_db_pool(&db_url).await;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .service(handlers::meeting::root)
            .service(
                web::scope("/meetings")
                    .wrap(service::auth::AuthMiddleware)
                    .configure(handlers::meeting::init_routes),
            )
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
