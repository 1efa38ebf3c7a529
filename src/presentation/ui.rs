use crate::application::{App, AppMode, FormField, Operation, StatusKind};
use crate::domain::Student;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_body(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("tsrm - Student Record Management System")
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(area);

    render_sidebar(f, app, columns[0]);
    render_main(f, app, columns[1]);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Operation::ALL
        .iter()
        .map(|op| {
            let style = if *op == app.operation {
                Style::default().bg(Color::LightBlue).fg(Color::Black)
            } else {
                Style::default()
            };
            ListItem::new(op.label()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select Operation"),
    );
    f.render_widget(list, area);
}

fn render_main(f: &mut Frame, app: &App, area: Rect) {
    match app.operation {
        Operation::Add => render_add(f, app, area),
        Operation::ViewAll => {
            render_student_table(f, "All Students", &app.records, None, area);
        }
        Operation::Update => render_update(f, app, area),
        Operation::Delete => {
            let selected = (app.mode == AppMode::Pick).then_some(app.selected_row);
            render_student_table(f, "Delete Student", &app.records, selected, area);
        }
        Operation::Search => render_search(f, app, area),
    }
}

fn render_add(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_field(f, app, FormField::Name, "Enter Student Name", &app.name_input, rows[0]);
    render_field(f, app, FormField::Age, "Enter Age (1-100)", &app.age_input, rows[1]);
    render_field(
        f,
        app,
        FormField::Grade,
        "Enter Grade (e.g. 10th, 12th, etc.)",
        &app.grade_input,
        rows[2],
    );
}

fn render_update(f: &mut Frame, app: &App, area: Rect) {
    if app.mode == AppMode::Form {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let title = match app.editing_id {
            Some(id) => format!("Name (updating ID {})", id),
            None => "Name".to_string(),
        };
        render_field(f, app, FormField::Name, &title, &app.name_input, rows[0]);
        render_field(f, app, FormField::Age, "Age (1-100)", &app.age_input, rows[1]);
        render_field(f, app, FormField::Grade, "Grade", &app.grade_input, rows[2]);
        render_student_table(f, "Update Student", &app.records, None, rows[3]);
    } else {
        let selected = (app.mode == AppMode::Pick).then_some(app.selected_row);
        render_student_table(f, "Update Student", &app.records, selected, area);
    }
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_field(
        f,
        app,
        FormField::Query,
        "Enter part of the student's name",
        &app.query_input,
        rows[0],
    );

    if app.searched {
        render_student_table(f, "Search Results", &app.results, None, rows[1]);
    } else {
        let hint = Paragraph::new("Type a query and press Enter to search by name.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Search Results"));
        f.render_widget(hint, rows[1]);
    }
}

fn render_field(
    f: &mut Frame,
    app: &App,
    field: FormField,
    title: &str,
    value: &str,
    area: Rect,
) {
    let focused = app.mode == AppMode::Form && app.focus == field;
    let style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let widget = Paragraph::new(value)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);

    if focused {
        let x = area.x + 1 + app.cursor_position.min(area.width.saturating_sub(2) as usize) as u16;
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_student_table(
    f: &mut Frame,
    title: &str,
    students: &[Student],
    selected: Option<usize>,
    area: Rect,
) {
    if students.is_empty() {
        let empty = Paragraph::new("No students found.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "Name", "Age", "Grade"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let rows = students.iter().enumerate().map(|(i, student)| {
        let style = if selected == Some(i) {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(student.id.to_string()),
            Cell::from(student.name.clone()),
            Cell::from(student.age.to_string()),
            Cell::from(student.grade.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Success => Style::default().fg(Color::Green),
                StatusKind::Warning => Style::default().fg(Color::Yellow),
                StatusKind::Info => Style::default().fg(Color::Cyan),
            };
            (status.text.clone(), style)
        }
        None => (hint_text(app).to_string(), Style::default()),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn hint_text(app: &App) -> &'static str {
    match (app.mode, app.operation) {
        (AppMode::Menu, _) => "Up/Down: choose operation | Enter: open | q: quit",
        (AppMode::Form, Operation::Search) => "Type query | Enter: search | Esc: back",
        (AppMode::Form, _) => "Tab: next field | Enter: submit | Esc: back",
        (AppMode::Pick, Operation::Delete) => "Up/Down: select student | Enter: delete | Esc: back",
        (AppMode::Pick, _) => "Up/Down: select student | Enter: edit | Esc: back",
    }
}
