//! Plotly-compatible chart descriptions and the HTML page that draws them.

mod config;
mod figure;
mod page;

pub use config::{PlotConfig, REMOVED_MODE_BAR_BUTTONS};
pub use figure::{Axis, Figure, FigureEnvelope, Layout, LineStyle, Margin, ScatterTrace, Title};
pub use page::render_page;
