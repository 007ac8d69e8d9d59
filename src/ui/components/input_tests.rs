use ratatui::{Terminal, backend::TestBackend};

use crate::ui::{store::state::State, test_utils::buffer_text};

use super::*;

fn render(input: Input, input_state: &mut InputState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
    let state = State::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            input.render(frame.area(), frame.buffer_mut(), input_state, &ctx);
        })
        .unwrap();

    buffer_text(terminal.backend().buffer())
}

#[test]
fn renders_value_with_label() {
    let mut input_state = InputState {
        editing: false,
        value: "Ada".to_string(),
    };

    let text = render(Input::new("Nombre").placeholder("escribe"), &mut input_state);

    assert!(text.contains(" Nombre "));
    assert!(text.contains("Ada"));
    assert!(!text.contains("escribe"));
    assert!(!text.contains(CURSOR));
}

#[test]
fn renders_placeholder_when_empty() {
    let mut input_state = InputState::default();

    let text = render(Input::new("Nombre").placeholder("escribe"), &mut input_state);

    assert!(text.contains("escribe"));
}

#[test]
fn renders_cursor_in_edit_mode() {
    let mut input_state = InputState {
        editing: true,
        value: "Ada".to_string(),
    };

    let text = render(Input::new("Nombre"), &mut input_state);

    assert!(text.contains(&format!("Ada{CURSOR}")));
}
