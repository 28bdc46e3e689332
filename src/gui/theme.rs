use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub stroke: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl Default for ThemeColors {
    /// White on black.
    fn default() -> Self {
        Self {
            background: Srgba::new(0.0, 0.0, 0.0, 1.0),
            stroke: Srgba::new(1.0, 1.0, 1.0, 1.0),
            text: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

impl ThemeColors {
    /// Looks up the `gnostic_*` named colors, which users can redefine in their GTK CSS.
    pub fn from_context(context: &gtk::StyleContext, opacity: f64) -> Self {
        let fallback = Self::default();
        Self {
            background: Self::lookup_color(
                context,
                "gnostic_bg_color",
                fallback.background,
                Some(opacity.clamp(0.0, 1.0)),
            ),
            stroke: Self::lookup_color(context, "gnostic_stroke_color", fallback.stroke, None),
            text: Self::lookup_color(context, "gnostic_text_color", fallback.text, None),
        }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        let (r, g, b, _) = self.background.into_components();
        Self {
            background: Srgba::new(r, g, b, opacity.clamp(0.0, 1.0)),
            ..self
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        let color = context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback);
        match alpha_override {
            Some(alpha) => {
                let (r, g, b, _) = color.into_components();
                Srgba::new(r, g, b, alpha)
            }
            None => color,
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color gnostic_bg_color black;
@define-color gnostic_stroke_color white;
@define-color gnostic_text_color white;

.gnostic-window, .gnostic-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
