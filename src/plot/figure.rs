use serde::Serialize;

use super::PlotConfig;
use crate::error::{PlotError, Result};
use crate::geometry::Polyline;

/// Square plot size in pixels.
const PLOT_SIZE: u32 = 600;

/// Line colour of the snowflake trace.
const LINE_COLOR: &str = "deepskyblue";

/// A line-mode scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub line: LineStyle,
    pub name: String,
    pub hoverinfo: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<&'static str>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    /// Unset when the renderer sizes the plot to its container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub height: u32,
    pub showlegend: bool,
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub dragmode: &'static str,
}

/// Traces plus layout, as the renderer expects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
}

impl Figure {
    /// Describes a snowflake polyline as a single line trace on square,
    /// axis-free, pan-by-default axes.
    #[must_use]
    pub fn snowflake(level: u32, snowflake: &Polyline) -> Self {
        let (x, y) = snowflake.columns();
        let trace = ScatterTrace {
            kind: "scatter",
            x,
            y,
            mode: "lines",
            line: LineStyle { color: LINE_COLOR },
            name: format!("Koch Level {level}"),
            hoverinfo: "skip",
        };
        let layout = Layout {
            title: Title {
                text: format!("Koch Snowflake Level {level}"),
            },
            width: Some(PLOT_SIZE),
            height: PLOT_SIZE,
            showlegend: false,
            margin: Margin { l: 0, r: 0, t: 30, b: 0 },
            xaxis: Axis {
                scaleanchor: Some("y"),
                visible: false,
            },
            yaxis: Axis {
                scaleanchor: None,
                visible: false,
            },
            dragmode: "pan",
        };
        Self {
            data: vec![trace],
            layout,
        }
    }

    /// Bundles the figure with interaction settings.
    ///
    /// A responsive config drops the fixed layout width so the plot follows
    /// its container; the height is kept.
    #[must_use]
    pub fn with_config(self, config: PlotConfig) -> FigureEnvelope {
        let mut layout = self.layout;
        if config.responsive {
            layout.width = None;
        }
        FigureEnvelope {
            data: self.data,
            layout,
            config,
        }
    }
}

/// Everything the page needs for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureEnvelope {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl FigureEnvelope {
    /// Serializes the envelope to JSON.
    ///
    /// # Errors
    ///
    /// Returns `PlotError::Serialize` if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        Ok(json.map_err(PlotError::from)?)
    }
}
