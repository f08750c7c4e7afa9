//! Data acquisition and normalization for the Growing Degree Day dashboard.
//!
//! - `params`: the three query inputs and the outbound query they encode to
//! - `response`: lenient model of the two backend response shapes
//! - `normalize`: maps either shape into canonical per-day records
//! - `controller`: request lifecycle with stale-response discarding
//! - `views`: chart points, table rows and the summary line
//! - `source`: the `GddSource` seam used to perform the actual fetch

pub mod config;
pub mod controller;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod params;
pub mod response;
pub mod source;
pub mod views;

pub use config::ServiceConfig;
pub use controller::{Completion, PendingRequest, RequestController, RequestStatus};
pub use error::FetchError;
pub use normalize::{normalize, CanonicalDayRecord, NormalizedResponse, QuerySummary, ReadingKind};
pub use params::{GddQuery, ParameterStore, QueryParameters};
pub use response::RawResponse;
pub use source::GddSource;
pub use views::{build_views, ChartPoint, DashboardView, DerivedViews, TableRow};
