
#[cfg(debug_assertions)]
pub fn get_base_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_base_url() -> &'static str {
    ""  // data.json is deployed next to index.html
}

pub fn content_url() -> String {
    format!("{}/data.json", get_base_url())
}

// The page is served as static files, so enquiries go to a hosted form service.
pub const CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/enquiries@mobilerepairacademy.in";

pub fn contact_endpoint() -> String {
    CONTACT_ENDPOINT.to_string()
}

pub const SLIDE_INTERVAL_MS: u32 = 4000;
pub const ALERT_DISPLAY_MS: u32 = 5000;
pub const HIGHLIGHT_STAGGER_MS: u32 = 100;
pub const TYPING_START_MS: u32 = 1000;
pub const TYPING_CHAR_MS: u32 = 100;
pub const PRICE_COUNT_MS: u32 = 2000;
pub const PRICE_FRAME_MS: u32 = 16;

// px scrolled before the header switches to its compact style
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
// slack above a section's top at which its nav link lights up
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
// viewport width above which the burger menu is not used
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const WHATSAPP_NUMBER: &str = "919876543210";
pub const WHATSAPP_GREETING: &str = "Hi! I'd like to know more about the Mobile Repairing Master Course.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_endpoint_is_an_external_service() {
        let endpoint = contact_endpoint();
        assert!(endpoint.starts_with("https://"));
        assert!(!endpoint.contains("/api/contact"));
    }
}
