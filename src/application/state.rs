//! Application state management for the student record manager.
//!
//! This module contains the main application state, the operation/mode
//! state machine, and the handlers each user action dispatches to.

use crate::domain::{Student, validate_age, validate_grade, validate_name};
use crate::infrastructure::StudentRepository;

/// The five user-facing flows, as listed in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    ViewAll,
    Update,
    Delete,
    Search,
}

impl Operation {
    /// Sidebar order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::ViewAll,
        Operation::Update,
        Operation::Delete,
        Operation::Search,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add Student",
            Operation::ViewAll => "View All",
            Operation::Update => "Update Student",
            Operation::Delete => "Delete Student",
            Operation::Search => "Search Student",
        }
    }
}

/// Determines how keyboard input is interpreted.
///
/// The sidebar has focus in `Menu`; a form has focus in `Form` (Add,
/// Search, and Update once a record is picked); a record table has focus
/// in `Pick` (Update and Delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    Form,
    Pick,
}

/// Which form input currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    Grade,
    Query,
}

/// Visual weight of a status bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Info,
}

/// One inline feedback message shown in the status bar until the next
/// action replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Warning, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }
}

/// Main application state tying the selected operation, the form buffers,
/// and the cached record lists to the repository behind them.
///
/// Every user action runs synchronously against the repository and leaves
/// its feedback in `status`; nothing carries over when the selected
/// operation changes.
///
/// # Examples
///
/// ```
/// use tsrm::application::{App, AppMode, Operation};
/// use tsrm::infrastructure::StudentRepository;
///
/// let app = App::new(StudentRepository::open_in_memory().unwrap());
/// assert_eq!(app.operation, Operation::Add);
/// assert_eq!(app.mode, AppMode::Menu);
/// ```
pub struct App {
    /// Store behind the five operations
    pub repository: StudentRepository,
    /// Operation highlighted in the sidebar
    pub operation: Operation,
    /// Current input mode
    pub mode: AppMode,
    /// Cached record list for the View All / Update / Delete panes
    pub records: Vec<Student>,
    /// Results of the last submitted search
    pub results: Vec<Student>,
    /// Whether `results` reflects a submitted query
    pub searched: bool,
    /// Form buffer for the name field
    pub name_input: String,
    /// Form buffer for the age field (digits only)
    pub age_input: String,
    /// Form buffer for the grade field
    pub grade_input: String,
    /// Form buffer for the search query
    pub query_input: String,
    /// Field that receives typed characters in `Form` mode
    pub focus: FormField,
    /// Cursor offset in characters within the focused field
    pub cursor_position: usize,
    /// Highlighted row of the record table in `Pick` mode
    pub selected_row: usize,
    /// Id of the record being updated, captured when it was picked
    pub editing_id: Option<i64>,
    /// Pending inline feedback message
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(repository: StudentRepository) -> Self {
        Self {
            repository,
            operation: Operation::Add,
            mode: AppMode::Menu,
            records: Vec::new(),
            results: Vec::new(),
            searched: false,
            name_input: String::new(),
            age_input: String::new(),
            grade_input: String::new(),
            query_input: String::new(),
            focus: FormField::Name,
            cursor_position: 0,
            selected_row: 0,
            editing_id: None,
            status: None,
        }
    }

    /// Moves the sidebar selection down, wrapping at the end.
    pub fn select_next_operation(&mut self) {
        let index = Operation::ALL
            .iter()
            .position(|op| *op == self.operation)
            .unwrap_or(0);
        self.operation = Operation::ALL[(index + 1) % Operation::ALL.len()];
        self.enter_operation();
    }

    /// Moves the sidebar selection up, wrapping at the start.
    pub fn select_previous_operation(&mut self) {
        let index = Operation::ALL
            .iter()
            .position(|op| *op == self.operation)
            .unwrap_or(0);
        self.operation =
            Operation::ALL[(index + Operation::ALL.len() - 1) % Operation::ALL.len()];
        self.enter_operation();
    }

    /// Resets all per-operation state after the sidebar selection changed.
    ///
    /// Operations that show the record table refresh it immediately, so the
    /// pane reflects the store as of this action.
    fn enter_operation(&mut self) {
        self.mode = AppMode::Menu;
        self.clear_form();
        self.editing_id = None;
        self.results.clear();
        self.searched = false;
        self.selected_row = 0;
        self.status = None;

        if matches!(
            self.operation,
            Operation::ViewAll | Operation::Update | Operation::Delete
        ) {
            self.refresh_records();
            if self.status.is_none() && self.records.is_empty() {
                self.status = Some(StatusMessage::info(self.empty_state_text()));
            }
        }
    }

    /// Opens the highlighted operation: forms gain focus, record tables
    /// become pickable, and View All re-reads the store.
    pub fn activate_operation(&mut self) {
        self.status = None;
        match self.operation {
            Operation::Add => {
                self.mode = AppMode::Form;
                self.focus = FormField::Name;
                self.cursor_position = self.char_count(FormField::Name);
            }
            Operation::Search => {
                self.mode = AppMode::Form;
                self.focus = FormField::Query;
                self.cursor_position = self.char_count(FormField::Query);
            }
            Operation::ViewAll => {
                self.refresh_records();
                if self.status.is_none() && self.records.is_empty() {
                    self.status = Some(StatusMessage::info(self.empty_state_text()));
                }
            }
            Operation::Update | Operation::Delete => {
                self.refresh_records();
                if self.status.is_none() {
                    if self.records.is_empty() {
                        self.status = Some(StatusMessage::info(self.empty_state_text()));
                    } else {
                        self.mode = AppMode::Pick;
                        self.selected_row = 0;
                    }
                }
            }
        }
    }

    fn empty_state_text(&self) -> &'static str {
        match self.operation {
            Operation::Update => "No students to update.",
            Operation::Delete => "No students to delete.",
            _ => "No students found.",
        }
    }

    /// Re-reads the full record list from the store. A storage failure is
    /// reported in the status bar and leaves the previous cache in place.
    pub fn refresh_records(&mut self) {
        match self.repository.list_all() {
            Ok(records) => self.records = records,
            Err(err) => self.status = Some(StatusMessage::warning(err.to_string())),
        }
    }

    /// Leaves the current form or record table without writing anything.
    pub fn cancel_input(&mut self) {
        self.mode = AppMode::Menu;
        self.clear_form();
        self.editing_id = None;
        self.status = None;
    }

    fn clear_form(&mut self) {
        self.name_input.clear();
        self.age_input.clear();
        self.grade_input.clear();
        self.query_input.clear();
        self.focus = match self.operation {
            Operation::Search => FormField::Query,
            _ => FormField::Name,
        };
        self.cursor_position = 0;
    }

    // ---- form editing ----

    pub fn focused_input(&self) -> &str {
        match self.focus {
            FormField::Name => &self.name_input,
            FormField::Age => &self.age_input,
            FormField::Grade => &self.grade_input,
            FormField::Query => &self.query_input,
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name_input,
            FormField::Age => &mut self.age_input,
            FormField::Grade => &mut self.grade_input,
            FormField::Query => &mut self.query_input,
        }
    }

    fn char_count(&self, field: FormField) -> usize {
        let value = match field {
            FormField::Name => &self.name_input,
            FormField::Age => &self.age_input,
            FormField::Grade => &self.grade_input,
            FormField::Query => &self.query_input,
        };
        value.chars().count()
    }

    /// Byte offset matching the character-based cursor position.
    fn byte_index(&self) -> usize {
        self.focused_input()
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.focused_input().len())
    }

    /// Inserts a character at the cursor. The age field only accepts ASCII
    /// digits and at most three of them, mirroring a bounded number input.
    pub fn insert_char(&mut self, c: char) {
        if self.focus == FormField::Age && (!c.is_ascii_digit() || self.age_input.len() >= 3) {
            return;
        }
        let index = self.byte_index();
        self.focused_input_mut().insert(index, c);
        self.cursor_position += 1;
    }

    /// Removes the character before the cursor (Backspace).
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let index = self.byte_index();
        self.focused_input_mut().remove(index);
    }

    /// Removes the character under the cursor (Delete).
    pub fn delete_char_forward(&mut self) {
        if self.cursor_position < self.char_count(self.focus) {
            let index = self.byte_index();
            self.focused_input_mut().remove(index);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.char_count(self.focus));
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count(self.focus);
    }

    /// Moves focus to the next form field; the search form has only one.
    pub fn focus_next_field(&mut self) {
        self.focus = match (self.operation, self.focus) {
            (Operation::Search, _) => FormField::Query,
            (_, FormField::Name) => FormField::Age,
            (_, FormField::Age) => FormField::Grade,
            _ => FormField::Name,
        };
        self.cursor_position = self.char_count(self.focus);
    }

    /// Moves focus to the previous form field.
    pub fn focus_previous_field(&mut self) {
        self.focus = match (self.operation, self.focus) {
            (Operation::Search, _) => FormField::Query,
            (_, FormField::Name) => FormField::Grade,
            (_, FormField::Age) => FormField::Name,
            _ => FormField::Age,
        };
        self.cursor_position = self.char_count(self.focus);
    }

    // ---- record picking ----

    pub fn select_next_row(&mut self) {
        if self.selected_row + 1 < self.records.len() {
            self.selected_row += 1;
        }
    }

    pub fn select_previous_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Acts on the highlighted record: Update prefills the edit form,
    /// Delete removes the record outright.
    pub fn pick_selected(&mut self) {
        match self.operation {
            Operation::Update => self.begin_edit_selected(),
            Operation::Delete => self.delete_selected(),
            _ => {}
        }
    }

    /// Loads the highlighted record into the edit form. The id is captured
    /// here; the record may be gone again by the time the form is submitted.
    fn begin_edit_selected(&mut self) {
        let Some(student) = self.records.get(self.selected_row) else {
            return;
        };
        self.editing_id = Some(student.id);
        self.name_input = student.name.clone();
        self.age_input = student.age.to_string();
        self.grade_input = student.grade.clone();
        self.focus = FormField::Name;
        self.cursor_position = self.char_count(FormField::Name);
        self.mode = AppMode::Form;
        self.status = None;
    }

    // ---- submits ----

    /// Submits the focused form for the current operation.
    pub fn submit(&mut self) {
        match self.operation {
            Operation::Add => self.submit_add(),
            Operation::Update => self.submit_update(),
            Operation::Search => self.submit_search(),
            _ => {}
        }
    }

    fn validated_fields(&mut self) -> Option<u32> {
        let checks = validate_name(&self.name_input)
            .and_then(|_| validate_age(&self.age_input))
            .and_then(|age| validate_grade(&self.grade_input).map(|_| age));
        match checks {
            Ok(age) => Some(age),
            Err(err) => {
                self.status = Some(StatusMessage::warning(err.to_string()));
                None
            }
        }
    }

    fn submit_add(&mut self) {
        let Some(age) = self.validated_fields() else {
            return;
        };
        match self.repository.add(&self.name_input, age, &self.grade_input) {
            Ok(_) => {
                self.status = Some(StatusMessage::success(format!(
                    "Student '{}' added successfully!",
                    self.name_input
                )));
                self.clear_form();
            }
            Err(err) => self.status = Some(StatusMessage::warning(err.to_string())),
        }
    }

    fn submit_update(&mut self) {
        let Some(id) = self.editing_id else {
            return;
        };
        let Some(age) = self.validated_fields() else {
            return;
        };
        match self
            .repository
            .update(id, &self.name_input, age, &self.grade_input)
        {
            Ok(true) => {
                self.status = Some(StatusMessage::success(format!(
                    "Student ID {} updated successfully!",
                    id
                )));
            }
            Ok(false) => {
                self.status = Some(StatusMessage::warning(format!(
                    "Student ID {} no longer exists.",
                    id
                )));
            }
            Err(err) => {
                self.status = Some(StatusMessage::warning(err.to_string()));
                return;
            }
        }
        self.editing_id = None;
        self.clear_form();
        self.refresh_records();
        self.mode = if self.records.is_empty() {
            AppMode::Menu
        } else {
            AppMode::Pick
        };
        self.selected_row = self.selected_row.min(self.records.len().saturating_sub(1));
    }

    /// Deletes the highlighted record. The id may have vanished since the
    /// table was rendered; that case reports not-found instead of failing.
    fn delete_selected(&mut self) {
        let Some(student) = self.records.get(self.selected_row) else {
            return;
        };
        let id = student.id;
        match self.repository.delete(id) {
            Ok(true) => {
                self.status = Some(StatusMessage::warning(format!(
                    "Student ID {} deleted successfully!",
                    id
                )));
            }
            Ok(false) => {
                self.status = Some(StatusMessage::warning(format!(
                    "Student ID {} no longer exists.",
                    id
                )));
            }
            Err(err) => {
                self.status = Some(StatusMessage::warning(err.to_string()));
                return;
            }
        }
        self.refresh_records();
        if self.records.is_empty() {
            self.mode = AppMode::Menu;
        } else {
            self.selected_row = self.selected_row.min(self.records.len() - 1);
        }
    }

    fn submit_search(&mut self) {
        if self.query_input.trim().is_empty() {
            self.status = Some(StatusMessage::warning("Please enter a name to search."));
            return;
        }
        match self.repository.search_by_name(&self.query_input) {
            Ok(results) => {
                self.status = if results.is_empty() {
                    Some(StatusMessage::info("No matching students found."))
                } else {
                    None
                };
                self.results = results;
                self.searched = true;
            }
            Err(err) => self.status = Some(StatusMessage::warning(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(StudentRepository::open_in_memory().unwrap())
    }

    fn seeded_app() -> App {
        let app = app();
        app.repository.add("Alice", 20, "10th").unwrap();
        app.repository.add("Bob", 21, "11th").unwrap();
        app
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn test_app_default_state() {
        let app = app();
        assert_eq!(app.operation, Operation::Add);
        assert_eq!(app.mode, AppMode::Menu);
        assert!(app.records.is_empty());
        assert!(app.name_input.is_empty());
        assert!(app.status.is_none());
        assert!(app.editing_id.is_none());
    }

    #[test]
    fn test_operation_selection_wraps_both_ways() {
        let mut app = app();
        app.select_previous_operation();
        assert_eq!(app.operation, Operation::Search);
        app.select_next_operation();
        assert_eq!(app.operation, Operation::Add);

        for expected in [
            Operation::ViewAll,
            Operation::Update,
            Operation::Delete,
            Operation::Search,
            Operation::Add,
        ] {
            app.select_next_operation();
            assert_eq!(app.operation, expected);
        }
    }

    #[test]
    fn test_empty_store_shows_info_per_operation() {
        let mut app = app();
        app.select_next_operation();
        assert_eq!(app.operation, Operation::ViewAll);
        assert_eq!(
            app.status,
            Some(StatusMessage::info("No students found."))
        );

        app.select_next_operation();
        assert_eq!(
            app.status,
            Some(StatusMessage::info("No students to update."))
        );

        app.select_next_operation();
        assert_eq!(
            app.status,
            Some(StatusMessage::info("No students to delete."))
        );
    }

    #[test]
    fn test_activate_add_enters_form() {
        let mut app = app();
        app.activate_operation();
        assert_eq!(app.mode, AppMode::Form);
        assert_eq!(app.focus, FormField::Name);
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_activate_update_on_empty_store_stays_in_menu() {
        let mut app = app();
        app.select_next_operation();
        app.select_next_operation();
        assert_eq!(app.operation, Operation::Update);
        app.status = None;

        app.activate_operation();
        assert_eq!(app.mode, AppMode::Menu);
        assert_eq!(
            app.status,
            Some(StatusMessage::info("No students to update."))
        );
    }

    #[test]
    fn test_age_field_accepts_digits_only() {
        let mut app = app();
        app.activate_operation();
        app.focus_next_field();
        assert_eq!(app.focus, FormField::Age);

        type_str(&mut app, "2a0!");
        assert_eq!(app.age_input, "20");

        type_str(&mut app, "0001");
        assert_eq!(app.age_input, "200");
    }

    #[test]
    fn test_form_focus_cycles_three_fields() {
        let mut app = app();
        app.activate_operation();
        assert_eq!(app.focus, FormField::Name);
        app.focus_next_field();
        assert_eq!(app.focus, FormField::Age);
        app.focus_next_field();
        assert_eq!(app.focus, FormField::Grade);
        app.focus_next_field();
        assert_eq!(app.focus, FormField::Name);
        app.focus_previous_field();
        assert_eq!(app.focus, FormField::Grade);
    }

    #[test]
    fn test_cursor_editing_in_focused_field() {
        let mut app = app();
        app.activate_operation();
        type_str(&mut app, "Alce");
        app.move_cursor_left();
        app.move_cursor_left();
        app.insert_char('i');
        assert_eq!(app.name_input, "Alice");

        app.move_cursor_home();
        app.delete_char_forward();
        assert_eq!(app.name_input, "lice");
        app.move_cursor_end();
        app.delete_char();
        assert_eq!(app.name_input, "lic");
    }

    #[test]
    fn test_submit_add_with_blank_name_writes_nothing() {
        let mut app = app();
        app.activate_operation();
        type_str(&mut app, "   ");
        app.focus_next_field();
        type_str(&mut app, "20");
        app.focus_next_field();
        type_str(&mut app, "10th");

        app.submit();

        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Warning);
        assert!(app.repository.list_all().unwrap().is_empty());
        assert_eq!(app.mode, AppMode::Form);
    }

    #[test]
    fn test_submit_add_with_bad_age_writes_nothing() {
        let mut app = app();
        app.activate_operation();
        type_str(&mut app, "Alice");
        app.focus_next_field();
        type_str(&mut app, "0");
        app.focus_next_field();
        type_str(&mut app, "10th");

        app.submit();

        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Warning);
        assert!(app.repository.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_submit_add_success_reports_name_and_clears_form() {
        let mut app = app();
        app.activate_operation();
        type_str(&mut app, "Alice");
        app.focus_next_field();
        type_str(&mut app, "20");
        app.focus_next_field();
        type_str(&mut app, "10th");

        app.submit();

        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert!(status.text.contains("Alice"));
        assert!(app.name_input.is_empty());
        assert!(app.age_input.is_empty());
        assert_eq!(app.mode, AppMode::Form);

        let students = app.repository.list_all().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].age, 20);
    }

    #[test]
    fn test_update_flow_prefills_and_overwrites() {
        let mut app = seeded_app();
        app.operation = Operation::Update;
        app.activate_operation();
        assert_eq!(app.mode, AppMode::Pick);

        app.select_next_row();
        app.pick_selected();
        assert_eq!(app.mode, AppMode::Form);
        assert_eq!(app.name_input, "Bob");
        assert_eq!(app.age_input, "21");
        assert_eq!(app.grade_input, "11th");
        let id = app.editing_id.unwrap();

        app.focus = FormField::Age;
        app.age_input.clear();
        app.cursor_position = 0;
        type_str(&mut app, "22");
        app.submit();

        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Success);
        assert!(app.editing_id.is_none());
        let students = app.repository.list_all().unwrap();
        assert_eq!(students[1].id, id);
        assert_eq!(students[1].age, 22);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].age, 20);
    }

    #[test]
    fn test_update_vanished_record_reports_not_found() {
        let mut app = seeded_app();
        app.operation = Operation::Update;
        app.activate_operation();
        app.pick_selected();
        let id = app.editing_id.unwrap();

        // Another session deletes the record between render and submit.
        app.repository.delete(id).unwrap();
        app.submit();

        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert!(status.text.contains("no longer exists"));
        assert_eq!(app.repository.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_flow_removes_highlighted_record() {
        let mut app = seeded_app();
        app.operation = Operation::Delete;
        app.activate_operation();
        assert_eq!(app.mode, AppMode::Pick);

        app.pick_selected();

        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert!(status.text.contains("deleted"));
        let students = app.repository.list_all().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Bob");
        assert_eq!(app.mode, AppMode::Pick);
    }

    #[test]
    fn test_delete_last_record_returns_to_menu() {
        let mut app = app();
        app.repository.add("Alice", 20, "10th").unwrap();
        app.operation = Operation::Delete;
        app.activate_operation();

        app.pick_selected();

        assert!(app.records.is_empty());
        assert_eq!(app.mode, AppMode::Menu);
    }

    #[test]
    fn test_delete_vanished_record_reports_not_found() {
        let mut app = seeded_app();
        app.operation = Operation::Delete;
        app.activate_operation();
        let id = app.records[0].id;

        app.repository.delete(id).unwrap();
        app.pick_selected();

        let status = app.status.clone().unwrap();
        assert!(status.text.contains("no longer exists"));
        assert_eq!(app.repository.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_search_empty_query_warns_without_searching() {
        let mut app = seeded_app();
        app.operation = Operation::Search;
        app.activate_operation();
        type_str(&mut app, "  ");

        app.submit();

        assert_eq!(
            app.status,
            Some(StatusMessage::warning("Please enter a name to search."))
        );
        assert!(!app.searched);
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_search_matches_substring() {
        let mut app = seeded_app();
        app.operation = Operation::Search;
        app.activate_operation();
        type_str(&mut app, "ali");

        app.submit();

        assert!(app.searched);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].name, "Alice");
        assert!(app.status.is_none());
    }

    #[test]
    fn test_search_no_matches_shows_info() {
        let mut app = seeded_app();
        app.operation = Operation::Search;
        app.activate_operation();
        type_str(&mut app, "zzz");

        app.submit();

        assert!(app.searched);
        assert!(app.results.is_empty());
        assert_eq!(
            app.status,
            Some(StatusMessage::info("No matching students found."))
        );
    }

    #[test]
    fn test_cancel_input_returns_to_menu_and_clears_form() {
        let mut app = app();
        app.activate_operation();
        type_str(&mut app, "Alice");

        app.cancel_input();

        assert_eq!(app.mode, AppMode::Menu);
        assert!(app.name_input.is_empty());
        assert_eq!(app.cursor_position, 0);
        assert!(app.repository.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_changing_operation_resets_transient_state() {
        let mut app = seeded_app();
        app.operation = Operation::Search;
        app.activate_operation();
        type_str(&mut app, "ali");
        app.submit();
        assert!(!app.results.is_empty());

        app.select_next_operation();

        assert_eq!(app.operation, Operation::Add);
        assert_eq!(app.mode, AppMode::Menu);
        assert!(app.query_input.is_empty());
        assert!(app.results.is_empty());
        assert!(!app.searched);
        assert!(app.status.is_none());
    }
}
