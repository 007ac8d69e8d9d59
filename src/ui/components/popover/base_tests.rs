use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use crate::ui::{
    components::popover::simple::SimplePopover, store::state::State,
    test_utils::buffer_text,
};

use super::*;

fn render(popover: &Popover, width: u16, height: u16) -> String {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).unwrap();
    let state = State::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            popover
                .render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_centered_area() {
    let area = Rect::new(0, 0, 100, 40);
    let pop = Popover::centered_area(area, 50, 50);
    assert_eq!(pop, Rect::new(25, 10, 50, 20));
}

#[test]
fn test_centered_area_keeps_room_for_content() {
    let area = Rect::new(0, 0, 100, 8);
    let pop = Popover::centered_area(area, 50, 25);
    assert_eq!(pop.height, MIN_HEIGHT);

    let tiny = Rect::new(0, 0, 100, 3);
    assert_eq!(Popover::centered_area(tiny, 50, 25).height, 3);
}

#[test]
fn renders_content_inside_border() {
    let content = SimplePopover::new("inside");
    let popover = Popover::new(&content).width(60).height(60);

    let text = render(&popover, 40, 12);
    assert!(text.contains("inside"));
    assert!(text.contains("╔"));
}

#[test]
fn renders_label_in_top_border() {
    let content = SimplePopover::new("disk full");
    let popover = Popover::new(&content).width(80).height(60).label("Error");

    let text = render(&popover, 40, 12);
    let top = text
        .lines()
        .find(|line| line.contains("╔"))
        .unwrap_or_default();
    assert!(top.contains(" Error "));
    assert!(text.contains("disk full"));
}
