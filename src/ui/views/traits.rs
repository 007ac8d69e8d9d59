//! Rendering and event handling traits shared by views and components.

use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event as CrossTermEvent, layout::Rect};

use crate::ui::store::state::{State, ViewID};

/// Handles terminal events, returning true when the event was consumed.
pub trait EventHandler {
    fn process_event(
        &self,
        evt: &CrossTermEvent,
        ctx: &CustomWidgetContext,
    ) -> bool;
}

pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
    // total area for the entire application - useful for calculating
    // popover areas
    pub app_area: Rect,
}

pub trait CustomWidget {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()>;
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    fn id(&self) -> ViewID;
    fn legend(&self, _state: &State) -> &str {
        ""
    }
}
