pub mod error;
pub mod event;
pub mod state;

pub use error::{Result, StatusBarError};
pub use event::Message;
pub use state::{BarState, SafeAreaInsets, Style};
