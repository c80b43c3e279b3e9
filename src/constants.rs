// Page wiring: element ids, selectors, colors and tween settings used by the
// web layer. Pure tuning values live in `core::constants`.

// Element ids
pub const NAV_ID: &str = "navigation";
pub const NAV_MENU_ID: &str = "navMenu";
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FAB_CONTAINER_ID: &str = "fabContainer";
pub const FAB_MAIN_ID: &str = "fabMain";

// Selectors
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_NAV_LINK_SELECTOR: &str = ".nav-link.active";
pub const NAV_INDICATOR_SELECTOR: &str = ".nav-indicator";
pub const SECTION_SELECTOR: &str = ".section";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const FAB_OPTION_SELECTOR: &str = ".fab-option";
pub const CTA_BUTTON_SELECTOR: &str = ".cta-button";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

// Attributes and classes
pub const DATA_SECTION_ATTR: &str = "data-section";
pub const DATA_COLOR_ATTR: &str = "data-color";
pub const DATA_ACTION_ATTR: &str = "data-action";
pub const DATA_SRC_ATTR: &str = "data-src";
pub const LAZY_CLASS: &str = "lazy";
pub const ACTIVE_CLASS: &str = "active";
pub const MODE_CLASSES: [&str; 3] = ["mobile", "compact", "sidebar"];

// Theme custom properties
pub const THEME_PRIMARY_VAR: &str = "--color-primary";
pub const LINK_ACCENT_VAR: &str = "--accent-color";

// Section observer: bias detection toward the upper-middle of the viewport
pub const OBSERVER_ROOT_MARGIN: &str = "-20% 0px -70% 0px";

// Navigation tweens (seconds)
pub const NAV_MORPH_DURATION: f64 = 0.4;
pub const NAV_MORPH_EASE: &str = "back.out(1.7)";
pub const INDICATOR_DURATION: f64 = 0.3;
pub const INDICATOR_EASE: &str = "power2.out";

// Floating action button tweens (seconds)
pub const FAB_TWEEN_DURATION: f64 = 0.3;
pub const FAB_PRESS_DURATION: f64 = 0.2;
pub const FAB_OPEN_ROTATION_DEG: f64 = 45.0;
pub const FAB_RESTING_OPACITY: f64 = 0.7;
pub const FAB_RESTING_SCALE: f64 = 0.9;
pub const FAB_PRESS_SCALE: f64 = 0.8;

// Particle canvas drawing
pub const TRAIL_FILL: &str = "rgba(15, 15, 35, 0.05)";
pub const CONNECTION_STROKE: &str = "rgba(59, 130, 246, 0.1)";
pub const POINTER_STROKE: &str = "rgba(59, 130, 246, 0.2)";
pub const GLOW_BLUR: f64 = 10.0;
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const STATIC_BACKGROUND: &str = "radial-gradient(circle at 20% 80%, rgba(59, 130, 246, 0.05) 0%, transparent 50%), radial-gradient(circle at 80% 20%, rgba(16, 185, 129, 0.05) 0%, transparent 50%)";

// Notification toast
pub const NOTIFY_IN_DURATION: f64 = 0.5;
pub const NOTIFY_OUT_DURATION: f64 = 0.3;
pub const NOTIFY_HOLD_MS: u32 = 3000;
pub const NOTIFY_SUCCESS_BG: &str = "#10B981";
pub const NOTIFY_INFO_BG: &str = "#3B82F6";
pub const FORM_SENT_MESSAGE: &str = "Message sent successfully!";
