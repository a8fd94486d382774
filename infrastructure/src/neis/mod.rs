//! **NEIS meal service adapters**
//!
//! The school meal schedule comes from the NEIS open-data `mealServiceDietInfo`
//! endpoint, which answers in XML.
//!
//! | Adapter | Port | Key Dependency |
//! |---------|------|----------------|
//! | [`NeisMealClient`] | [`MealSource`](meal_application::MealSource) | `reqwest` |
//! | [`NeisXmlParser`] | [`MealDocumentParser`](meal_application::MealDocumentParser) | `roxmltree` |
//!
//! # Relay
//!
//! By default requests go through a public CORS relay that forwards the
//! target URL verbatim (`?url=<percent-encoded NEIS URL>`) and returns the
//! origin body unchanged. The relay can be switched off in configuration.

mod client;
mod parser;

pub use client::{NeisClientConfig, NeisMealClient};
pub use parser::NeisXmlParser;

/// NEIS meal service endpoint
pub const DEFAULT_API_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";

/// Office of education code (`ATPT_OFCDC_SC_CODE`)
pub const DEFAULT_OFFICE_CODE: &str = "J10";

/// School code (`SD_SCHUL_CODE`)
pub const DEFAULT_SCHOOL_CODE: &str = "7530079";

/// Public CORS relay; the target URL goes in its `url` parameter
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw";

pub const DEFAULT_USER_AGENT: &str = concat!("school-meal/", env!("CARGO_PKG_VERSION"));
