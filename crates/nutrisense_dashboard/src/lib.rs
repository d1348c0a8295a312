//! Monthly wellness dashboard built on the NutriSense API.
//!
//! The pipeline is: fetch history through
//! [`nutrisense_client::NutrisenseClient`], normalize the wire records into
//! [`record::WellnessRecord`], filter to one month with
//! [`period::filter_month`], and reduce to a chart-ready
//! [`aggregate::DashboardSummary`]. Login state is carried by an explicit
//! [`session::SessionContext`] rather than ambient storage.

pub mod aggregate;
pub mod error;
pub mod period;
pub mod record;
pub mod render;
pub mod service;
pub mod session;

pub use aggregate::{DashboardSummary, dashboard_summary};
pub use error::{DashboardError, DashboardResult};
pub use record::{DietCategory, WellnessRecord};
pub use service::DashboardService;
pub use session::{SessionContext, SessionState};
