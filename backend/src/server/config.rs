//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::web;

use user_records::inbound::http::state::HttpState;

/// Everything [`super::create_server`] needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: web::Data<HttpState>,
}

impl ServerConfig {
    /// Construct a configuration serving `state` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state: web::Data::new(state),
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
