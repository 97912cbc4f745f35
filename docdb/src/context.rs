use docdb_core::{Context, OsEnv};
use docdb_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// Build a context backed by a fresh `reqwest::Client` and the OS environment.
pub fn default_context() -> Context {
    context_with_client(Client::new())
}

/// Build a context backed by the given `reqwest::Client` and the OS environment.
///
/// Configure timeouts, proxies or TLS on the client; the session adds none.
pub fn context_with_client(client: Client) -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv)
}
