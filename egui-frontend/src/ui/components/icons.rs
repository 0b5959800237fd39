//! # Subscription Icons
//!
//! Resolves the opaque `IconId` of a subscription into something egui can
//! draw: a short glyph on a brand-coloured badge. Unknown ids fall back to the
//! first letter of the subscription name on a neutral badge.

use eframe::egui;
use egui::Color32;
use shared::Subscription;

/// Drawable form of an icon
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIcon {
    pub glyph: String,
    pub background: Color32,
    pub foreground: Color32,
}

/// Resolve a subscription's icon
pub fn resolve_icon(subscription: &Subscription) -> ResolvedIcon {
    let known = match subscription.icon.as_str() {
        "openai" => Some(("AI", Color32::from_rgb(16, 163, 127))),
        "netflix" => Some(("N", Color32::from_rgb(229, 9, 20))),
        "prime-video" => Some(("P", Color32::from_rgb(0, 168, 225))),
        "disney" => Some(("D+", Color32::from_rgb(17, 60, 207))),
        "spotify" => Some(("♫", Color32::from_rgb(30, 215, 96))),
        "apple-pay" => Some(("Pay", Color32::from_rgb(60, 60, 60))),
        "adobe" => Some(("A", Color32::from_rgb(250, 15, 0))),
        "x" => Some(("X", Color32::BLACK)),
        _ => None,
    };

    match known {
        Some((glyph, background)) => ResolvedIcon {
            glyph: glyph.to_string(),
            background,
            foreground: Color32::WHITE,
        },
        None => ResolvedIcon {
            glyph: fallback_glyph(&subscription.name),
            background: Color32::from_rgb(120, 120, 120),
            foreground: Color32::WHITE,
        },
    }
}

fn fallback_glyph(name: &str) -> String {
    name.chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Paint an icon badge centred on `center`
pub fn paint_icon_badge(painter: &egui::Painter, center: egui::Pos2, diameter: f32, icon: &ResolvedIcon) {
    painter.circle_filled(center, diameter / 2.0, icon.background);

    // Longer glyphs get a smaller font so they stay inside the badge
    let scale = match icon.glyph.chars().count() {
        0 | 1 => 0.6,
        2 => 0.45,
        _ => 0.32,
    };
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        &icon.glyph,
        egui::FontId::new(diameter * scale, egui::FontFamily::Proportional),
        icon.foreground,
    );
}

/// Allocate space in a layout and paint an icon badge into it
pub fn icon_badge(ui: &mut egui::Ui, diameter: f32, subscription: &Subscription) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    paint_icon_badge(ui.painter(), rect.center(), diameter, &resolve_icon(subscription));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icon() {
        let icon = resolve_icon(&Subscription::new("Netflix", "netflix", 15.99, 15));
        assert_eq!(icon.glyph, "N");
        assert_eq!(icon.background, Color32::from_rgb(229, 9, 20));
    }

    #[test]
    fn test_unknown_icon_uses_first_letter() {
        let icon = resolve_icon(&Subscription::new("gym club", "dumbbell", 30.0, 31));
        assert_eq!(icon.glyph, "G");

        let icon = resolve_icon(&Subscription::new("++", "none", 1.0, 1));
        assert_eq!(icon.glyph, "?");
    }
}
