use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyEventState},
};

use crate::{
    registration::RegistrationForm,
    ui::{store::MockDispatcher, test_utils::buffer_text},
};

use super::*;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn filled_form() -> RegistrationForm {
    RegistrationForm {
        name: "Ana Pérez".to_string(),
        id_code: "74859612".to_string(),
        affiliation: "Ingeniería de Sistemas".to_string(),
        participant_type: "Estudiante".to_string(),
        email: "ana@example.com".to_string(),
    }
}

fn process(view: &FormView, state: &State, evt: Event) -> bool {
    let ctx = CustomWidgetContext {
        state,
        app_area: Rect::default(),
    };
    view.process_event(&evt, &ctx)
}

#[test]
fn test_typing_dispatches_input_chars() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::InputChar('q'))
        .times(1)
        .return_const(());

    let view = FormView::new(Rc::new(dispatcher));
    assert!(process(&view, &State::default(), key(KeyCode::Char('q'))));
}

#[test]
fn test_control_chars_are_not_typed() {
    let dispatcher = MockDispatcher::new();
    let view = FormView::new(Rc::new(dispatcher));

    let evt = Event::Key(KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    });

    assert!(!process(&view, &State::default(), evt));
}

#[test]
fn test_navigation_keys() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::FocusNext)
        .times(2)
        .return_const(());
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::FocusPrevious)
        .times(2)
        .return_const(());
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::DeleteChar)
        .times(1)
        .return_const(());

    let view = FormView::new(Rc::new(dispatcher));
    let state = State::default();

    assert!(process(&view, &state, key(KeyCode::Tab)));
    assert!(process(&view, &state, key(KeyCode::Down)));
    assert!(process(&view, &state, key(KeyCode::BackTab)));
    assert!(process(&view, &state, key(KeyCode::Up)));
    assert!(process(&view, &state, key(KeyCode::Backspace)));
}

#[test]
fn test_paste_types_each_char() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| matches!(a, Action::InputChar(_)))
        .times(3)
        .return_const(());

    let view = FormView::new(Rc::new(dispatcher));
    assert!(process(
        &view,
        &State::default(),
        Event::Paste("a\nbc".to_string())
    ));
}

#[test]
fn test_submit_incomplete_form_alerts() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::SetAlert(Some(VALIDATION_PROMPT.to_string())))
        .times(1)
        .return_const(());

    let view = FormView::new(Rc::new(dispatcher));
    let state = State {
        form: RegistrationForm {
            email: "   ".to_string(),
            ..filled_form()
        },
        ..State::default()
    };

    assert!(process(&view, &state, key(KeyCode::Enter)));
}

#[test]
fn test_submit_complete_form_dispatches_registration() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| {
            matches!(
                a,
                Action::SubmitRegistration(r)
                    if r.name == "Ana Pérez"
                        && r.email == "ana@example.com"
                        && !r.id.is_empty()
            )
        })
        .times(1)
        .return_const(());

    let view = FormView::new(Rc::new(dispatcher));
    let state = State {
        form: filled_form(),
        ..State::default()
    };

    assert!(process(&view, &state, key(KeyCode::Enter)));
}

#[test]
fn test_form_view_renders_fields() {
    let view = FormView::new(Rc::new(MockDispatcher::new()));
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    let state = State {
        form: RegistrationForm {
            name: "Ana Pérez".to_string(),
            ..RegistrationForm::default()
        },
        ..State::default()
    };

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            view.render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains(TITLE));
    assert!(text.contains(SUBTITLE));
    assert!(text.contains("Nombre y apellidos"));
    assert!(text.contains("Ana Pérez█"));
    assert!(text.contains("Ingresa tu DNI o código"));
    assert!(text.contains("Correo"));
    assert!(text.contains(SUBMIT));
}
