// Utils compartidos

pub mod constants;
pub mod gmaps_ffi;
pub mod notify;

pub use constants::*;
pub use notify::{AlertNotifier, Notifier};
