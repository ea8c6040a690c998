//! cliclack theme for step output and the download spinner
//!
//! vsix-pr never prompts, so only the bar colors and the spinner are styled.
//! `gh run download` has no timeout; the spinner shows elapsed time so a
//! slow artifact transfer is visibly still running.

use cliclack::ThemeState;
use console::Style;

/// vsix-pr theme: blue bars and spinner with an elapsed-time suffix
#[derive(Debug, Clone, Default)]
pub struct VsixTheme;

impl cliclack::Theme for VsixTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Active | ThemeState::Submit => Style::new().blue(),
        }
    }

    fn default_spinner_template(&self) -> String {
        "{msg} {elapsed:.dim}".into()
    }

    fn format_progress_start(&self, template: &str, grouped: bool, last: bool) -> String {
        let space = if grouped { " " } else { "  " };
        self.format_progress_with_state(
            &format!("{{spinner:.blue}}{space}{template}"),
            grouped,
            last,
            &ThemeState::Active,
        )
    }
}

/// Install [`VsixTheme`] as the global cliclack theme
pub fn init_theme() {
    cliclack::set_theme(VsixTheme);
}
