//! UV forecast fetching from the Open-Meteo forecast API

use crate::models::{Coordinate, ForecastSeries};
use crate::{Result, SpfError};
use tracing::debug;

/// Fetch one day of hourly UV index for a coordinate. The provider is
/// queried with `timezone=auto` so timestamps arrive in the location's
/// own clock alongside its UTC offset.
pub(crate) async fn fetch_uv_forecast(
    client: &reqwest::Client,
    base_url: &str,
    coordinate: Coordinate,
) -> Result<ForecastSeries> {
    let url = format!(
        "{base_url}?latitude={}&longitude={}&hourly=uv_index&daily=uv_index_max&timezone=auto&forecast_days=1",
        coordinate.latitude, coordinate.longitude
    );
    debug!(%url, "fetching UV forecast");

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(SpfError::network(format!(
            "forecast provider returned {}",
            response.status()
        )));
    }

    let forecast_response: openmeteo::ForecastResponse = response
        .json()
        .await
        .map_err(|err| SpfError::parse(format!("malformed forecast response: {err}")))?;

    Ok(forecast_response.into_series())
}

/// `OpenMeteo` forecast API response structures and conversion
mod openmeteo {
    use crate::models::ForecastSeries;
    use serde::Deserialize;

    /// UV forecast response from the `OpenMeteo` forecast API
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub hourly: Option<HourlyUv>,
        pub daily: Option<DailyUv>,
        pub utc_offset_seconds: Option<i64>,
    }

    #[derive(Debug, Deserialize)]
    pub struct HourlyUv {
        pub time: Vec<String>,
        pub uv_index: Option<Vec<Option<f64>>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyUv {
        pub uv_index_max: Option<Vec<Option<f64>>>,
    }

    impl ForecastResponse {
        /// Convert the raw provider payload into the internal snapshot,
        /// so no loosely-typed structure escapes this module
        pub fn into_series(self) -> ForecastSeries {
            let (timestamps, uv_by_hour) = match self.hourly {
                Some(hourly) => {
                    let uv = hourly.uv_index.unwrap_or_default();
                    (hourly.time, uv)
                }
                None => (Vec::new(), Vec::new()),
            };
            let daily_max_uv = self
                .daily
                .and_then(|daily| daily.uv_index_max)
                .and_then(|values| values.into_iter().next())
                .flatten();
            ForecastSeries {
                timestamps,
                uv_by_hour,
                daily_max_uv,
                utc_offset_seconds: self.utc_offset_seconds,
            }
        }
    }
}
