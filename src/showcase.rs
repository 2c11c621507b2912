//! Showcase content

use crate::carousel::Item;
use crate::error::CarouselError;

/// Parse a JSON array of items
pub fn items_from_json(json: &str) -> Result<Vec<Item>, CarouselError> {
    serde_json::from_str(json).map_err(CarouselError::Content)
}

/// The built-in showcase ring
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("Neon Forms").with_subtitle("UI Component").with_lines([
            "Animated focus rings",
            "Validation states",
            "Accessible labels",
        ]),
        Item::new("Liquid Button")
            .with_subtitle("Micro Interaction")
            .with_lines(["Morphing SVG blob", "Hover ripple", "ARIA-friendly"]),
        Item::new("Glass Nav").with_subtitle("Navigation").with_lines([
            "Frosted glass look",
            "Active underline",
            "Keyboard support",
        ]),
        Item::new("Tilt Cards")
            .with_subtitle("Showcase")
            .with_lines(["3D parallax tilt", "Soft glow", "Smooth spring"]),
        Item::new("Spectrum Switch").with_subtitle("Theme").with_lines([
            "Dark / Light",
            "Animated gradient",
            "Local storage",
        ]),
        Item::new("Toast Stack").with_subtitle("Feedback").with_lines([
            "Staggered enter",
            "Auto hide",
            "Reduced motion aware",
        ]),
    ]
}
