use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, App, HttpServer};

use crate::routes::{company_route, default_route};

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(company_route::scrape_linkedin_company)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
