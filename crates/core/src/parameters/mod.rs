//! Runtime parameters
//!
//! A fixed-capacity parameter store plus the typed parameter blocks read
//! from it.

pub mod error;
pub mod monitor;
pub mod storage;

pub use error::ParameterError;
pub use monitor::MonitorParams;
pub use storage::{ParamFlags, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
