//! Color palette shared by the stylesheet and the chart components.
//!
//! `main.css` reads every color through a `--color-*` custom property;
//! [`Palette::css_variables`] emits those properties so the palette in
//! [`DashboardConfig`](crate::core::config::DashboardConfig) wins over the
//! stylesheet defaults.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub hover: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

impl Palette {
    pub const BRICK_RED: Palette = Palette {
        primary: "#B22222",
        secondary: "#FF6F61",
        background: "#FFF5F5",
        card: "#FFFFFF",
        hover: "#FFE4E1",
        text: "#2C2C2C",
        accent: "#DC143C",
    };

    /// A `:root` rule overriding the theme's color custom properties.
    pub fn css_variables(&self) -> String {
        let vars = [
            ("--color-primary", self.primary),
            ("--color-secondary", self.secondary),
            ("--color-bg", self.background),
            ("--color-surface", self.card),
            ("--color-sidebar", self.hover),
            ("--color-text", self.text),
            ("--color-accent", self.accent),
        ];
        let body: String = vars
            .iter()
            .map(|(name, value)| format!("  {name}: {value};\n"))
            .collect();
        format!(":root {{\n{body}}}\n")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::BRICK_RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_variables_cover_every_color() {
        let css = Palette::BRICK_RED.css_variables();
        assert!(css.starts_with(":root {"));
        for line in [
            "--color-primary: #B22222;",
            "--color-secondary: #FF6F61;",
            "--color-bg: #FFF5F5;",
            "--color-surface: #FFFFFF;",
            "--color-sidebar: #FFE4E1;",
            "--color-text: #2C2C2C;",
            "--color-accent: #DC143C;",
        ] {
            assert!(css.contains(line), "{line} missing from {css}");
        }
    }

    #[test]
    fn other_palettes_override_the_same_properties() {
        let custom = Palette {
            accent: "#000000",
            ..Palette::default()
        };
        assert!(custom.css_variables().contains("--color-accent: #000000;"));
    }
}
