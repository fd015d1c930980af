use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::{Flow, Handler as TerminalEventHandler};
use crate::logger::LogBuffer;
use crate::state::State;
use crate::timeline::PhotoLibrary;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

/// Command line values that apply to this session only and are never saved.
///
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub theme_name: Option<String>,
    pub jitter_seed: Option<u64>,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
    theme_name: String,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, overrides: Overrides, log_buffer: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let theme_name = overrides
            .theme_name
            .unwrap_or_else(|| config.theme_name.clone());
        let theme = Theme::from_name(&theme_name).unwrap_or_else(|| {
            warn!("Unknown theme '{}', using default", theme_name);
            Theme::default()
        });
        let jitter_seed = overrides
            .jitter_seed
            .or(config.jitter_seed)
            .unwrap_or_else(rand::random);
        debug!("Using jitter seed {}", jitter_seed);

        let library = PhotoLibrary::sample();
        info!(
            "Loaded {} photos across {} years",
            library.photos().len(),
            library.years().len()
        );

        let mut app = App {
            theme_name: theme.name.clone(),
            state: State::new(
                library,
                log_buffer,
                theme,
                config.hotkeys.clone(),
                jitter_seed,
            ),
            config,
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Prepare the terminal, run the render loop and restore the terminal
    /// whether or not the loop succeeded.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let result = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| self.run(&mut terminal));

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        result
    }

    /// Draw and handle terminal events until an exit is requested.
    ///
    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.hide_cursor()?;
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal
                .draw(|frame| crate::ui::render(frame, &mut self.state))
                .map_err(|e| AppError::Terminal(e.to_string()))?;
            if terminal_event_handler.handle_next(&mut self.state)? == Flow::Exit {
                debug!("Received application exit request.");
                break;
            }
            self.save_theme_if_changed();
        }
        terminal.show_cursor()?;
        Ok(())
    }

    /// Persist the theme once the user switches to another one.
    ///
    fn save_theme_if_changed(&mut self) {
        let theme_name = &self.state.get_theme().name;
        if *theme_name == self.theme_name {
            return;
        }
        self.theme_name = theme_name.clone();
        self.config.theme_name = theme_name.clone();
        if let Err(e) = self.config.save() {
            error!("Failed to save config: {}", e);
        }
    }
}
