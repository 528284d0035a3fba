use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::{ConfigError, KochError};
use crate::operations::fractal::{build_snowflake, RecursionLevel, SnowflakeStats};
use crate::plot::{render_page, Figure, FigureEnvelope, PlotConfig};

/// Query string accepted by the JSON endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LevelQuery {
    pub level: Option<String>,
}

impl LevelQuery {
    /// Resolves the requested level, falling back to `default`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the level is not an integer in range.
    pub fn resolve(&self, default: RecursionLevel) -> Result<RecursionLevel, ConfigError> {
        match self.level.as_deref() {
            None | Some("") => Ok(default),
            Some(raw) => raw.parse(),
        }
    }
}

/// Snowflake points as `[x, y]` pairs plus their measurements.
#[derive(Debug, Serialize)]
pub struct SnowflakeResponse {
    pub level: RecursionLevel,
    pub points: Vec<[f64; 2]>,
    pub stats: SnowflakeStats,
}

impl SnowflakeResponse {
    /// Generates and measures the snowflake for `level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the generated polyline cannot be measured.
    pub fn generate(level: RecursionLevel) -> crate::Result<Self> {
        let polyline = build_snowflake(level.get());
        let stats = SnowflakeStats::measure(level.get(), &polyline)?;
        let points = polyline.points.iter().map(|p| [p.x, p.y]).collect();
        Ok(Self {
            level,
            points,
            stats,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A handler failure, rendered as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub KochError);

impl From<KochError> for ApiError {
    fn from(err: KochError) -> Self {
        Self(err)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self(err.into())
    }
}

fn error_to_status(err: &KochError) -> StatusCode {
    match err {
        KochError::Config(_) => StatusCode::BAD_REQUEST,
        KochError::Geometry(_) | KochError::Plot(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = error_to_status(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "rejected request");
        }
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /` — viewer page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.default_level))
}

/// `GET /api/snowflake?level=N` — snowflake points and measurements.
pub async fn snowflake(
    State(state): State<AppState>,
    Query(query): Query<LevelQuery>,
) -> Result<Json<SnowflakeResponse>, ApiError> {
    let level = query.resolve(state.default_level)?;
    Ok(Json(SnowflakeResponse::generate(level)?))
}

/// `GET /api/figure?level=N` — chart description for the page to draw.
pub async fn figure(
    State(state): State<AppState>,
    Query(query): Query<LevelQuery>,
) -> Result<Json<FigureEnvelope>, ApiError> {
    let level = query.resolve(state.default_level)?;
    let polyline = build_snowflake(level.get());
    let envelope = Figure::snowflake(level.get(), &polyline).with_config(PlotConfig::default());
    Ok(Json(envelope))
}

/// `GET /healthz`
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    fn query(level: Option<&str>) -> Query<LevelQuery> {
        Query(LevelQuery {
            level: level.map(str::to_owned),
        })
    }

    fn state(default_level: i64) -> State<AppState> {
        State(AppState::new(
            RecursionLevel::try_from(default_level).unwrap(),
        ))
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let default = RecursionLevel::try_from(2_i64).unwrap();
        assert_eq!(LevelQuery::default().resolve(default).unwrap(), default);
        let empty = LevelQuery {
            level: Some(String::new()),
        };
        assert_eq!(empty.resolve(default).unwrap(), default);
    }

    #[test]
    fn error_to_status_maps_config_to_bad_request() {
        let err = KochError::from(ConfigError::InvalidLevel("x".into()));
        assert_eq!(error_to_status(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_to_status_maps_geometry_to_server_error() {
        let err = KochError::from(GeometryError::Degenerate("empty".into()));
        assert_eq!(error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn snowflake_uses_requested_level() {
        let Json(resp) = snowflake(state(1), query(Some("2"))).await.unwrap();
        assert_eq!(resp.level.get(), 2);
        assert_eq!(resp.points.len(), 97);
        assert_eq!(resp.stats.point_count, 97);
        assert_eq!(resp.points.first(), resp.points.last());
    }

    #[tokio::test]
    async fn snowflake_defaults_when_level_missing() {
        let Json(resp) = snowflake(state(0), query(None)).await.unwrap();
        assert_eq!(resp.level.get(), 0);
        assert_eq!(resp.points.len(), 7);
    }

    #[tokio::test]
    async fn snowflake_rejects_out_of_range_level() {
        let err = snowflake(state(1), query(Some("-1"))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn figure_rejects_non_integer_level() {
        let err = figure(state(1), query(Some("1.5"))).await.unwrap_err();
        assert!(matches!(err.0, KochError::Config(ConfigError::InvalidLevel(_))));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn figure_titles_by_level() {
        let Json(envelope) = figure(state(1), query(Some("4"))).await.unwrap();
        assert_eq!(envelope.layout.title.text, "Koch Snowflake Level 4");
        assert_eq!(envelope.data[0].x.len(), 6 * 256 + 1);
        assert!(envelope.config.scroll_zoom);
    }

    #[tokio::test]
    async fn index_renders_default_level() {
        let Html(page) = index(state(3)).await;
        assert!(page.contains(r#"value="3""#));
    }

    #[test]
    fn generated_response_serializes_points_as_pairs() {
        let level = RecursionLevel::try_from(1_i64).unwrap();
        let json = serde_json::to_value(SnowflakeResponse::generate(level).unwrap()).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["points"].as_array().unwrap().len(), 25);
        assert_eq!(json["points"][0].as_array().unwrap().len(), 2);
        assert_eq!(json["stats"]["point_count"], 25);
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        assert_eq!(healthz().await, StatusCode::OK);
    }
}
