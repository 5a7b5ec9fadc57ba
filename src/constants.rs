/// Web-layer tuning constants.
///
/// These express intended behavior (element ids, timing, cosmetic draw values)
/// and keep magic numbers out of the wiring code. Field and gate tuning lives
/// next to the logic it drives in `core`.
// Canvas element ids, one surface per renderer instance
pub const BACKDROP_CANVAS_ID: &str = "backdrop-canvas";
pub const LIQUID_CANVAS_ID: &str = "liquid-canvas";
pub const MOLECULE_CANVAS_ID: &str = "molecule-canvas";

// The page backdrop spans this many viewport heights
pub const BACKDROP_HEIGHT_FACTOR: f64 = 2.0;

// Splash / page element ids
pub const SPLASH_ID: &str = "splash";
pub const LOAD_BAR_ID: &str = "load-bar";
pub const LOAD_PERCENT_ID: &str = "load-percent";
pub const PAGE_ID: &str = "page";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_STORAGE_KEY: &str = "folio-theme";

// Contact form element ids
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SEND_ID: &str = "contact-send";
pub const CONTACT_SENT_ID: &str = "contact-sent";
pub const TOAST_REGION_ID: &str = "toast-region";

// Outbound delivery
pub const DELIVERY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Notification and sent-state timing (milliseconds)
pub const TOAST_VISIBLE_MS: i32 = 4000;
pub const SENT_RESET_MS: i32 = 3000;

// Edge stroke cosmetics (alpha at zero distance, decaying to 0 at threshold)
pub const EDGE_ALPHA_DARK: f32 = 0.15;
pub const EDGE_ALPHA_LIGHT: f32 = 0.10;
pub const EDGE_WIDTH_DARK: f64 = 1.0;
pub const EDGE_WIDTH_LIGHT: f64 = 0.8;

// Dark-theme node glow
pub const GLOW_RADIUS_FACTOR: f64 = 2.0;
pub const GLOW_ALPHA: f32 = 0.05;
