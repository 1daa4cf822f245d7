//! Time-series store trait
//!
//! This trait is the seam between the backup logic and the store. The
//! production implementation is [`InfluxDbClient`](super::InfluxDbClient);
//! tests plug in in-memory stores.

use super::models::PointSet;
use crate::domain::ids::SeriesName;
use crate::domain::Result;
use async_trait::async_trait;

/// Read-only access to a time-series store
///
/// # Example
///
/// ```no_run
/// use influx_backup::adapters::influxdb::{InfluxDbClient, TimeSeriesStore};
/// use influx_backup::config::InfluxDbConfig;
///
/// # async fn example() -> influx_backup::domain::Result<()> {
/// let config = InfluxDbConfig {
///     database: "sensors".to_string(),
///     ..Default::default()
/// };
/// let client = InfluxDbClient::new(&config)?;
///
/// for series in client.list_series().await? {
///     let points = client
///         .query_points(&format!("SELECT * FROM {} LIMIT 1", series.quoted()))
///         .await?;
///     println!("{series}: {} columns", points.columns.len());
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait TimeSeriesStore: Send + Sync {
    /// Discover every series (measurement) name, in the order the store lists them
    ///
    /// # Errors
    ///
    /// Returns an error if the discovery query fails or returns a non-string name.
    async fn list_series(&self) -> Result<Vec<SeriesName>>;

    /// Run a query and return its points
    ///
    /// A query that matches nothing returns an empty [`PointSet`], not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects the query.
    async fn query_points(&self, query: &str) -> Result<PointSet>;
}
