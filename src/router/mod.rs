//! Client-side navigation: the pre-navigation guard and the injected
//! location/navigation capability.

pub mod guard;
pub mod navigator;

pub use guard::{login_redirect, GuardOutcome, Route, RouteGuard, DEFAULT_LANDING_PATH, LOGIN_PATH};
pub use navigator::{HistoryNavigator, Navigator};
