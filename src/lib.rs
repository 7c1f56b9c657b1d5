//! # Code Review Dashboard
//!
//! Client side of the AI Code Review service: typed access to its metrics
//! and analysis API, the dashboard's page routing, and a terminal rendering
//! of its pages.
//!
//! ## Modules
//!
//! - [`client`]: Shared HTTP client and the pending-request handle
//! - [`services`]: Dashboard and analysis façades plus response models
//! - [`router`]: Path-to-page mapping
//! - [`layout`]: Navigation shell
//! - [`pages`]: Page views built on the façades
//! - [`server`]: Development API server with Axum
//! - [`config`]: File and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use codereview::{ApiClient, Config, Services};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let services = Services::new(ApiClient::new(&config.api)?);
//!
//!     // Last 7 days of dashboard metrics
//!     let metrics = services.dashboard.dashboard(Some(7)).await?;
//!     println!("{} reviews", metrics.summary.total_reviews);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod layout;
pub mod pages;
pub mod router;
pub mod server;
pub mod services;
pub mod telemetry;

pub use client::{ApiClient, ClientError, ClientResult, Pending};

pub use config::{ApiConfig, Config, ConfigError, LoadedConfig, LoggingConfig, ServerConfig};

pub use router::{route, Page};

pub use pages::PageContext;

pub use services::{
    models::{
        AnalysisResult, BatchAnalysis, BatchJob, CodeFile, DashboardMetrics, QualityTrends,
        RepositoryMetrics, ReviewComment, SecurityReport, TeamMetrics,
    },
    AnalysisService, DashboardService, Services, DEFAULT_LOOKBACK_DAYS,
};

pub use server::{build_router, serve, ApiError, AppState};
