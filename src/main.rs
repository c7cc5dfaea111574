use warpline::*;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("warpline".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");

    let email_client = EmailClient::new(
        configuration.email_client.base_url.clone(),
        configuration
            .email_client
            .sender()
            .expect("Invalid sender email address"),
        configuration.email_client.authorization_token.clone(),
        configuration.email_client.timeout(),
    )
    .expect("Failed to build the email client");

    let notify_email = configuration
        .email_client
        .notify()
        .expect("Invalid lead notification email address");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = std::net::TcpListener::bind(address)?;

    run(listener, email_client, notify_email)?.await
}
