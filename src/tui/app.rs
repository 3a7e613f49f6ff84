//! TUI application state and main loop.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event_handler::{handle_key_event, handle_mouse_event, KeyEventResult};
use super::renderer::draw;
use super::state::BrowserState;
use crate::clipboard::Clipboard;
use crate::dataset::Dataset;
use crate::utils::{cleanup_terminal, undo_on_err};
use crate::models::PromptKey;
use crate::view::ViewState;

/// Poll timeout for event loop (100ms keeps "Copied!" expiry responsive).
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI application state.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    dataset: Dataset,
    state: BrowserState,
    clipboard: Box<dyn Clipboard>,
    mouse_enabled: bool,
    /// Flag to prevent double cleanup in Drop.
    cleaned_up: bool,
}

impl TuiApp {
    /// Enter the alternate screen and set up the browser.
    pub fn new(
        dataset: Dataset,
        initial: ViewState,
        clipboard: Box<dyn Clipboard>,
        capture_mouse: bool,
    ) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        undo_on_err(execute!(stdout, EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })
        .context("Failed to enter alternate screen")?;

        crate::utils::install_terminal_panic_hook();

        let mouse_enabled = capture_mouse && execute!(stdout, EnableMouseCapture).is_ok();

        let backend = CrosstermBackend::new(stdout);
        let terminal = undo_on_err(Terminal::new(backend), cleanup_terminal)
            .context("Failed to create terminal")?;

        let state = BrowserState::new(initial, &dataset);

        Ok(Self {
            terminal,
            dataset,
            state,
            clipboard,
            mouse_enabled,
            cleaned_up: false,
        })
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        // Drop may not run when the process is killed by a signal.
        ctrlc::set_handler(|| {
            cleanup_terminal();
            std::process::exit(0);
        })
        .context("Failed to set Ctrl+C handler")?;

        tracing::info!(
            stages = self.dataset.stages().len(),
            prompts = self.dataset.total_prompts(),
            "browser started"
        );

        let result = self.run_event_loop();

        self.cleanup_terminal();

        result
    }

    /// Main event loop - returns on quit.
    fn run_event_loop(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();
            self.state.tick(now);
            self.render(now)?;

            if !event::poll(POLL_TIMEOUT)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key.code, key.modifiers, &mut self.state, &self.dataset)
                    {
                        KeyEventResult::Exit => break,
                        KeyEventResult::Copy(prompt_key) => self.copy_prompt(prompt_key),
                        KeyEventResult::Continue => {}
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(mouse.kind, &mut self.state, &self.dataset);
                }
                _ => {}
            }
        }

        tracing::info!("browser exited");
        Ok(())
    }

    /// Copy one prompt and show its acknowledgement.
    ///
    /// Clipboard failure is reported in the footer, the card is acknowledged
    /// either way.
    fn copy_prompt(&mut self, key: PromptKey) {
        let Some(prompt) = self.dataset.prompt(key) else {
            return;
        };

        if let Err(e) = self.clipboard.set_text(&prompt.text) {
            tracing::warn!(
                stage_id = key.stage_id,
                prompt_id = key.prompt_id,
                error = %e,
                "clipboard write failed"
            );
            self.state.status_message = Some(format!("Clipboard: {e}"));
        }

        self.state.record_copy(key, Instant::now());
    }

    /// Cleanup terminal state (leave alternate screen, disable raw mode).
    /// Sets cleaned_up flag to prevent double cleanup in Drop.
    fn cleanup_terminal(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        let _ = disable_raw_mode();
        if self.mouse_enabled {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }

    /// Render the UI.
    fn render(&mut self, now: Instant) -> Result<()> {
        let dataset = &self.dataset;
        let state = &mut self.state;
        self.terminal.draw(|frame| draw(frame, dataset, state, now))?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        self.cleanup_terminal();
    }
}
