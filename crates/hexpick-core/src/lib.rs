pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod library;
pub mod magnifier;
pub mod picking;
pub mod sampler;
pub mod session;
pub mod status;
pub mod table;
pub mod transform;
pub mod viewport;

pub use error::{PickerError, Result};
pub use session::{Effect, Event, Session};
