mod auth;
mod error;
mod models;
mod setup;
mod user_handlers;

use actix_web::{middleware::Logger, App, HttpServer};

const BIND_ADDR: (&str, u16) = ("0.0.0.0", 5000);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup::setup()?;

    let server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::new("\"%r\" %s %T"))
            .configure(user_handlers::routes)
    })
    .bind(BIND_ADDR)?;

    tracing::info!("Server running on http://localhost:{}", BIND_ADDR.1);

    server.run().await
}
