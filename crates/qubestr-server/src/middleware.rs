use axum::{body::Body, http::Request, middleware::Next, response::Response};
use qubestr_types::RequestContext;

/// Header carrying the public key the connection authenticated as.
pub const AUTHED_PUBKEY_HEADER: &str = "X-Qubestr-Pubkey";

/// Middleware that binds the authenticated identity to the request.
///
/// # Security Note
///
/// The relay does not run the NIP-42 challenge itself. The front proxy that
/// terminates the authentication exchange forwards the resulting public key in
/// [`AUTHED_PUBKEY_HEADER`] and must strip that header from client traffic.
///
/// A [`RequestContext`] is always inserted: anonymous when the header is
/// absent, empty or not visible ASCII, so handlers can pass it to the hook
/// chain unconditionally.
pub async fn identity_middleware(mut req: Request<Body>, next: Next) -> Response {
    let ctx = match req.headers().get(AUTHED_PUBKEY_HEADER) {
        Some(val) => match val.to_str() {
            Ok(pubkey) => RequestContext::authenticated(pubkey.trim()),
            Err(_) => {
                tracing::warn!(
                    path = req.uri().path(),
                    "unreadable {} header, treating request as anonymous",
                    AUTHED_PUBKEY_HEADER
                );
                RequestContext::anonymous()
            }
        },
        None => RequestContext::anonymous(),
    };

    tracing::debug!(
        authed = ctx.authed_pubkey().unwrap_or("<anonymous>"),
        path = req.uri().path(),
        "bound request identity"
    );

    req.extensions_mut().insert(ctx);
    next.run(req).await
}
