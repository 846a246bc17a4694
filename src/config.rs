#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://127.0.0.1:8000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL (same origin)
}

// Opaque third-party values consumed by the page shell. Passed through
// unvalidated.

pub fn get_consent_script_url() -> &'static str {
    "https://app.termly.io/resource-blocker/8e2bffdc-c7a1-4ba1-9655-e4be2242744c?autoBlock=on"
}

pub fn get_analytics_container_id() -> &'static str {
    "GTM-FLEETCLR"
}

pub fn get_scheduler_url() -> &'static str {
    "https://calendly.com/fleet-clarity/priority-review"
}

pub fn get_video_embed_url() -> &'static str {
    "https://player.vimeo.com/video/1092347751"
}
