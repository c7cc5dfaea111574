use crate::{domain::LeadEmail, routes, EmailClient};

use std::net::TcpListener;

use {
    actix_web::{dev::Server, web, App, HttpServer},
    tracing_actix_web::TracingLogger,
};

/// Operator address that receives a lead alert for every captured email.
pub struct NotifyEmail(pub LeadEmail);

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    notify_email: LeadEmail,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    let notify_email = web::Data::new(NotifyEmail(notify_email));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/api/send", web::post().to(routes::capture_lead))
            .app_data(email_client.clone())
            .app_data(notify_email.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
