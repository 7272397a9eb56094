//! Browser-only helpers with inert fallbacks for SSR and native builds.

#![allow(clippy::unused_async)]

use std::time::Duration;

/// Wait `duration` on the browser event loop. Returns immediately elsewhere.
pub async fn pause(duration: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = duration;
}

/// Today's date as `YYYY-MM-DD` (UTC), or empty when there is no browser clock.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.chars().take(10).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
