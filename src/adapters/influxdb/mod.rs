//! InfluxDB integration
//!
//! - [`store`] - the [`TimeSeriesStore`] trait the backup logic depends on
//! - [`client`] - HTTP implementation against the InfluxDB 1.x API
//! - [`models`] - response models and the flattened [`PointSet`]

pub mod client;
pub mod models;
pub mod store;

pub use client::{InfluxDbClient, SHOW_MEASUREMENTS};
pub use models::PointSet;
pub use store::TimeSeriesStore;
