pub mod config;
pub mod display;
pub mod error;
pub mod navigation;
pub mod payload;
pub mod role;
pub mod scalar;
pub mod view_state;

pub use config::*;
pub use display::{DashboardView, DisplaySection};
pub use error::*;
pub use navigation::*;
pub use payload::*;
pub use role::*;
pub use scalar::*;
pub use view_state::*;
