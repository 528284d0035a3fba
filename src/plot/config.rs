use serde::Serialize;

/// Mode-bar buttons hidden from the viewer; pan-drag and scroll-zoom stay active.
pub const REMOVED_MODE_BAR_BUTTONS: [&str; 11] = [
    "zoom2d",
    "pan2d",
    "select2d",
    "lasso2d",
    "zoomIn2d",
    "zoomOut2d",
    "autoScale2d",
    "toImage",
    "sendDataToCloud",
    "hoverClosestCartesian",
    "hoverCompareCartesian",
];

/// Interaction settings passed to the chart renderer alongside the figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub scroll_zoom: bool,
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
    pub displaylogo: bool,
    /// Resize with the container instead of keeping the layout width.
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            scroll_zoom: true,
            mode_bar_buttons_to_remove: REMOVED_MODE_BAR_BUTTONS.to_vec(),
            displaylogo: false,
            responsive: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_renderer_field_names() {
        let json = serde_json::to_value(PlotConfig::default()).unwrap();
        assert_eq!(json["scrollZoom"], true);
        assert_eq!(json["displaylogo"], false);
        assert_eq!(json["responsive"], true);
        let removed = json["modeBarButtonsToRemove"].as_array().unwrap();
        assert_eq!(removed.len(), 11);
        assert!(removed.iter().any(|b| b == "lasso2d"));
        assert!(removed.iter().any(|b| b == "toImage"));
    }
}
