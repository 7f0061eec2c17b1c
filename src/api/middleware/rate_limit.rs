//! Rate limiting middleware using token bucket algorithm.

use std::sync::Arc;

use axum::Router;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Sustained requests per second per client IP.
const PER_SECOND: u64 = 5;

/// Burst allowance per client IP.
const BURST: u32 = 50;

/// Applies the public rate limit to a router.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// With `behind_proxy` the client IP is read from `X-Forwarded-For` /
/// `X-Real-IP`; otherwise from the socket peer address. The two extractors
/// have different layer types, hence the branch instead of a returned layer.
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(PER_SECOND)
                .burst_size(BURST)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .unwrap(),
        );

        router.layer(GovernorLayer::new(governor_conf))
    } else {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(PER_SECOND)
                .burst_size(BURST)
                .key_extractor(PeerIpKeyExtractor)
                .finish()
                .unwrap(),
        );

        router.layer(GovernorLayer::new(governor_conf))
    }
}
