use crate::operations::fractal::RecursionLevel;

const TEMPLATE: &str = include_str!("page.html");

/// Renders the viewer page with the slider set to `default_level`.
///
/// The page fetches `/api/figure?level=N` on load and on every slider move.
#[must_use]
pub fn render_page(default_level: RecursionLevel) -> String {
    TEMPLATE
        .replace("__MIN_LEVEL__", &RecursionLevel::MIN.to_string())
        .replace("__MAX_LEVEL__", &RecursionLevel::MAX.to_string())
        .replace("__DEFAULT_LEVEL__", &default_level.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn slider_is_bounded_and_defaulted() {
        let html = render_page(RecursionLevel::default());
        assert!(html.contains(r#"type="range" min="0" max="4" step="1" value="1""#));
        assert!(!html.contains("__"));
    }

    #[test]
    fn default_level_is_substituted() {
        let html = render_page(RecursionLevel::try_from(3_i64).unwrap());
        assert!(html.contains(r#"value="3""#));
        assert!(html.contains(r#"<output id="level-value">3</output>"#));
    }

    #[test]
    fn page_fetches_figure_endpoint() {
        let html = render_page(RecursionLevel::default());
        assert!(html.contains("/api/figure?level="));
        assert!(html.contains("Plotly.react"));
    }
}
