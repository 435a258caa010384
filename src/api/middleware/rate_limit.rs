//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Sustained requests per second per client.
const PER_SECOND: u64 = 5;

/// Requests a client may burst above the sustained rate.
const BURST_SIZE: u32 = 50;

/// Creates a per-IP rate limiter keyed on the socket peer address.
///
/// # Limits
///
/// - **Rate**: 5 requests per second
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with `into_make_service_with_connect_info::<SocketAddr>`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed on `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded` with a fallback to the peer address.
///
/// Use only when the service runs behind a trusted reverse proxy.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
