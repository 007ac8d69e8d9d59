//! Scrollable table component with selection support.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Text,
    widgets::{
        Cell, HighlightSpacing, Row, ScrollbarState, StatefulWidget,
        Table as RatatuiTable, TableState,
    },
};
use std::cell::RefCell;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::views::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef,
};

use super::scrollbar::ScrollBar;

/// Default height for table rows.
pub const DEFAULT_ITEM_HEIGHT: usize = 1;
/// Used for overflow when item exceeds max width
const ELLIPSIS: &str = "…";

/// Scrollable table with optional headers, row selection, and scrollbar.
pub struct Table {
    headers: Option<Vec<String>>,
    items: Vec<Vec<String>>,
    item_height: usize,
    column_sizes: Vec<u16>,
    centering_breaks: String,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl Table {
    /// Creates a new table with the given items, optional headers, and column
    /// sizes.
    pub fn new(
        items: Vec<Vec<String>>,
        headers: Option<Vec<String>>,
        column_sizes: Vec<u16>,
        item_height: usize,
    ) -> Self {
        // line break - hacky way of centering the text in each cell
        let mut line_break_count = item_height / 2;

        if line_break_count > 1 && line_break_count.is_multiple_of(2) {
            line_break_count -= 1;
        }

        let centering_breaks = "\n".repeat(line_break_count);
        let scroll_height = scroll_height(items.len(), item_height);

        Self {
            headers,
            column_sizes,
            items,
            item_height,
            centering_breaks,
            table_state: RefCell::new(TableState::new()),
            scroll_state: RefCell::new(ScrollbarState::new(scroll_height)),
        }
    }

    /// Updates the table items, adjusting selection if needed. Returns the new
    /// selected index if any.
    pub fn update_items(&mut self, items: Vec<Vec<String>>) -> Option<usize> {
        let mut selected = self.table_state.borrow().selected();

        if items.is_empty() {
            selected = None;
        } else if let Some(current) = selected
            && current >= items.len()
        {
            selected = Some(items.len() - 1);
        }

        self.table_state.borrow_mut().select(selected);

        let position = selected.unwrap_or(0) * self.item_height;
        let new_scroll_state =
            ScrollbarState::new(scroll_height(items.len(), self.item_height))
                .position(position);
        self.scroll_state = RefCell::new(new_scroll_state);

        self.items = items;
        selected
    }

    /// Returns the currently selected row index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.table_state.borrow().selected()
    }

    /// Moves selection to the next row.
    pub fn next(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = match self.table_state.borrow().selected() {
            // don't wrap
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };

        self.select(i);
        Some(i)
    }

    /// Moves selection to the previous row.
    pub fn previous(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = match self.table_state.borrow().selected() {
            // prevent wrap with saturating_sub
            Some(i) => i.saturating_sub(1),
            None => 0,
        };

        self.select(i);
        Some(i)
    }

    fn select(&mut self, i: usize) {
        self.table_state.borrow_mut().select(Some(i));

        let new_scroll_state =
            self.scroll_state.borrow().position(i * self.item_height);

        self.scroll_state = RefCell::new(new_scroll_state);
    }
}

impl CustomWidgetRef for Table {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        // main table view + right aligned scrollbar
        let table_rects = Layout::horizontal([
            Constraint::Percentage(100),
            Constraint::Length(3),
        ])
        .split(area);

        let header = self.headers.as_ref().map(|hs| {
            let header_style = Style::default()
                .fg(ctx.state.colors.text)
                .bg(ctx.state.colors.row_header_bg)
                .add_modifier(Modifier::BOLD);

            hs.iter()
                .map(|h| Cell::from(format!(" {h}")))
                .collect::<Row>()
                .style(header_style)
                .height(1)
        });

        let selected_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(ctx.state.colors.selected_row_fg);

        // uses provided column sizes to calculate the remaining available
        // space for the last column. We use this to allow the last column
        // to fill up all remaining space rather than truncating on the
        // explicit provided final col size
        let mut free_for_last_col = area.width;
        self.column_sizes.iter().enumerate().for_each(|(i, s)| {
            if i != self.column_sizes.len() - 1 {
                free_for_last_col =
                    free_for_last_col.saturating_sub(s.to_owned());
            }
        });

        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let bg = if row_idx % 2 == 0 {
                    ctx.state.colors.buffer_bg
                } else {
                    ctx.state.colors.gray
                };

                row.iter()
                    .enumerate()
                    .map(|(i, content)| {
                        // allow the final column to consume the rest of the
                        // available space
                        let max_width = if i == self.column_sizes.len() - 1 {
                            // - scroll width - extra padding
                            free_for_last_col.saturating_sub(5)
                        } else {
                            self.column_sizes.get(i).copied().unwrap_or(10)
                        };
                        let formatted_content =
                            fit_to_width(content, max_width);
                        Cell::from(Text::from(format!(
                            "{} {formatted_content}",
                            self.centering_breaks
                        )))
                    })
                    .collect::<Row>()
                    .style(Style::new().fg(ctx.state.colors.text).bg(bg))
                    .height(self.item_height as u16)
            })
            .collect::<Vec<_>>();

        let constraints = self
            .column_sizes
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == self.column_sizes.len() - 1 {
                    Constraint::Min(w.to_owned())
                } else {
                    Constraint::Max(w.to_owned())
                }
            })
            .collect::<Vec<_>>();

        let mut t = RatatuiTable::new(rows, constraints)
            .row_highlight_style(selected_style)
            .bg(ctx.state.colors.buffer_bg)
            .highlight_spacing(HighlightSpacing::Always);

        if let Some(h) = header {
            t = t.header(h);
        }

        t.render(table_rects[0], buf, &mut self.table_state.borrow_mut());

        let scrollbar = ScrollBar::new()
            .active(self.table_state.borrow().selected().is_some());
        let mut scroll_state = self.scroll_state.borrow_mut();
        scrollbar.render(table_rects[1], buf, &mut scroll_state, ctx);
        Ok(())
    }
}

fn scroll_height(item_count: usize, item_height: usize) -> usize {
    if item_count == 0 {
        item_height
    } else {
        (item_count - 1) * item_height
    }
}

/// Truncates `content` on character boundaries so that it fits in
/// `max_width` columns, appending an ellipsis when anything was cut.
fn fit_to_width(content: &str, max_width: u16) -> String {
    let max_width = max_width as usize;

    if content.width() <= max_width {
        return content.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut value = String::new();

    for c in content.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        value.push(c);
    }

    let mut value = value.trim_end().to_string();
    value.push_str(ELLIPSIS);
    value
}

#[cfg(test)]
#[path = "./table_tests.rs"]
mod tests;
