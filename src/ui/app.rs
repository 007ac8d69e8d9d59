//! Terminal setup and the render/event loop.

use std::{
    cell::Cell,
    io,
    rc::Rc,
    time::{Duration, Instant},
};

use color_eyre::eyre::{Context, Result, eyre};
use ratatui::{
    Terminal,
    backend::Backend,
    crossterm::{
        event::{
            self, DisableBracketedPaste, EnableBracketedPaste,
            Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    layout::Rect,
    prelude::CrosstermBackend,
};

use super::{
    store::{Dispatcher, StateGetter, Store, action::Action},
    views::{
        main::MainView,
        traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
    },
};

const POLL_INTERVAL: Duration = Duration::from_millis(60);

pub struct App {
    store: Rc<Store>,
    main_view: MainView,
    modal_timeout: Duration,
    // last drawn frame size, used as the popover area while handling events
    area: Cell<Rect>,
}

impl App {
    pub fn new(store: Rc<Store>) -> Self {
        let modal_timeout = store.get_state().config.modal_timeout();
        let main_view =
            MainView::new(Rc::clone(&store) as Rc<dyn Dispatcher>);

        Self {
            store,
            main_view,
            modal_timeout,
            area: Cell::new(Rect::default()),
        }
    }

    /// Takes over the terminal, runs the UI until the user quits, and
    /// restores the terminal even when the loop fails.
    pub fn launch(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .wrap_err("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).wrap_err("failed to create terminal")?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    pub fn run<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.tick(Instant::now());
            self.draw(terminal)?;

            // poll so the modal timer keeps running without input
            if event::poll(POLL_INTERVAL)? {
                let evt = event::read()?;
                if self.handle_event(&evt) {
                    log::info!("quitting");
                    return Ok(());
                }
            }
        }
    }

    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let state = self.store.get_state();
        let mut rendered = Ok(());

        terminal
            .draw(|f| {
                self.area.set(f.area());
                let ctx = CustomWidgetContext {
                    state: &state,
                    app_area: f.area(),
                };
                rendered =
                    self.main_view.render_ref(f.area(), f.buffer_mut(), &ctx);
            })
            .map_err(|e| eyre!("failed to draw frame: {e}"))?;

        rendered
    }

    /// Routes an event through the views. Returns true when the app should
    /// exit.
    pub fn handle_event(&self, evt: &CrossTermEvent) -> bool {
        if let CrossTermEvent::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            // do not allow overriding ctrl-c
            log::info!("received ctrl-c");
            return true;
        }

        let state = self.store.get_state();
        let ctx = CustomWidgetContext {
            state: &state,
            app_area: self.area.get(),
        };

        let handled = self.main_view.process_event(evt, &ctx);

        // allow views to override q
        !handled
            && matches!(
                evt,
                CrossTermEvent::Key(key)
                    if key.kind == KeyEventKind::Press
                        && key.code == KeyCode::Char('q')
            )
    }

    /// Closes the success modal once it has been up for the configured
    /// timeout.
    pub fn tick(&self, now: Instant) {
        let state = self.store.get_state();

        if let Some(opened) = state.success_modal
            && now.saturating_duration_since(opened) >= self.modal_timeout
        {
            self.store.dispatch(Action::DismissSuccessModal);
        }
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
