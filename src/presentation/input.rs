use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Menu => Self::handle_menu_mode(app, key),
            AppMode::Form => Self::handle_form_mode(app, key, modifiers),
            AppMode::Pick => Self::handle_pick_mode(app, key),
        }
    }

    fn handle_menu_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous_operation();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next_operation();
            }
            KeyCode::Enter => {
                app.activate_operation();
            }
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => {
                app.submit();
            }
            KeyCode::Esc => {
                app.cancel_input();
            }
            KeyCode::Tab | KeyCode::Down => {
                app.focus_next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus_previous_field();
            }
            KeyCode::Backspace => {
                app.delete_char();
            }
            KeyCode::Delete => {
                app.delete_char_forward();
            }
            KeyCode::Left => {
                app.move_cursor_left();
            }
            KeyCode::Right => {
                app.move_cursor_right();
            }
            KeyCode::Home => {
                app.move_cursor_home();
            }
            KeyCode::End => {
                app.move_cursor_end();
            }
            KeyCode::Char(c) => {
                if !modifiers.contains(KeyModifiers::CONTROL) {
                    app.insert_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_pick_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous_row();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next_row();
            }
            KeyCode::Enter => {
                app.pick_selected();
            }
            KeyCode::Esc => {
                app.cancel_input();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{FormField, Operation};
    use crate::infrastructure::StudentRepository;

    fn app() -> App {
        App::new(StudentRepository::open_in_memory().unwrap())
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_menu_keys_drive_operation_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.operation, Operation::ViewAll);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.operation, Operation::Update);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.operation, Operation::ViewAll);
    }

    #[test]
    fn test_enter_opens_form_and_esc_leaves_it() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Form);

        press(&mut app, KeyCode::Char('A'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.name_input, "Al");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Menu);
        assert!(app.name_input.is_empty());
    }

    #[test]
    fn test_vim_keys_type_text_in_form_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.name_input, "jk");
    }

    #[test]
    fn test_tab_cycles_form_fields() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FormField::Age);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, FormField::Name);
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.name_input.is_empty());
    }

    #[test]
    fn test_pick_mode_keys_drive_row_selection() {
        let mut app = app();
        app.repository.add("Alice", 20, "10th").unwrap();
        app.repository.add("Bob", 21, "11th").unwrap();
        app.operation = Operation::Delete;
        app.activate_operation();
        assert_eq!(app.mode, AppMode::Pick);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_row, 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_row, 1);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_row, 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Menu);
    }
}
