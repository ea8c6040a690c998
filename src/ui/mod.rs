//! Terminal output helpers
//!
//! Uses `cliclack` for styled step output and spinners in interactive
//! terminals, with plain-text fallback in CI and when output is piped.

mod context;
mod output;
mod progress;
mod theme;

pub use context::UiContext;
pub use output::{outro_success, step_info, step_ok, step_ok_detail, step_warn_hint};
pub use progress::TaskSpinner;
pub use theme::{init_theme, VsixTheme};
