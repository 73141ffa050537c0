//! Shared HTTP agent

use std::sync::LazyLock;
use std::time::Duration;

/// Agent reused by every listing request
pub static HTTP_AGENT: LazyLock<ureq::Agent> = LazyLock::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(15)))
        .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
        .http_status_as_error(false)
        .build()
        .into()
});
