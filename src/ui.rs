use crate::models::{Student, Teacher};
use chrono::{NaiveDate, NaiveDateTime};

const PASSWORD_PREVIEW_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

pub fn render_loading() -> String {
    r#"<div class="loading">Loading students...</div>"#.to_string()
}

pub fn render_students(students: &[Student], mode: ViewMode) -> String {
    if students.is_empty() {
        return STUDENTS_EMPTY_STATE.to_string();
    }

    match mode {
        ViewMode::Table => render_student_table(students),
        ViewMode::Card => render_student_cards(students),
    }
}

pub fn render_teachers(teachers: &[Teacher], mode: ViewMode) -> String {
    if teachers.is_empty() {
        return TEACHERS_EMPTY_STATE.to_string();
    }

    match mode {
        ViewMode::Table => render_teacher_table(teachers),
        ViewMode::Card => render_teacher_cards(teachers),
    }
}

fn render_student_table(students: &[Student]) -> String {
    let rows: String = students
        .iter()
        .map(|student| {
            format!(
                r#"<tr>
  <td><span class="student-roll-number">{roll}</span></td>
  <td><span class="student-name">{name}</span></td>
  <td><span class="student-dob">{dob}</span></td>
  <td><span class="student-class">{class}</span></td>
  <td class="student-actions" data-id="{id}"></td>
</tr>
"#,
                roll = student.roll_number,
                name = html_escape(&student.name),
                dob = dob_label(student),
                class = html_escape(&student.class),
                id = student.id,
            )
        })
        .collect();

    format!(
        r#"<table class="students-table">
<thead><tr><th>Roll Number</th><th>Name</th><th>Date of Birth</th><th>Class</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    )
}

fn render_student_cards(students: &[Student]) -> String {
    let cards: String = students
        .iter()
        .map(|student| {
            format!(
                r#"<div class="student-card" data-id="{id}">
  <div class="student-card-header">
    <div class="student-info"><h3>{name}</h3></div>
    <span class="student-roll-number-badge">{roll}</span>
  </div>
  <div class="student-details">
    <div class="student-detail-item">
      <span class="student-detail-label">Date of Birth:</span>
      <span class="student-detail-value">{dob}</span>
    </div>
    <div class="student-detail-item">
      <span class="student-detail-label">Age</span>
      <span class="student-detail-value">{age}</span>
    </div>
    <div class="student-detail-item">
      <span class="student-detail-label">Class/Course:</span>
      <span class="student-detail-value">{class}</span>
    </div>
    <div class="student-detail-item">
      <span class="student-detail-label">Created</span>
      <span class="student-detail-value">{created}</span>
    </div>
{audit}  </div>
</div>
"#,
                id = student.id,
                name = html_escape(&student.name),
                roll = student.roll_number,
                dob = dob_label(student),
                age = age_label(student),
                class = html_escape(&student.class),
                created = student
                    .created_at
                    .as_deref()
                    .map(format_date_time)
                    .unwrap_or_else(|| "N/A".to_string()),
                audit = audit_items(student),
            )
        })
        .collect();

    format!(r#"<div class="students-grid">{cards}</div>"#)
}

fn render_teacher_table(teachers: &[Teacher]) -> String {
    let rows: String = teachers
        .iter()
        .map(|teacher| {
            format!(
                r#"<tr>
  <td><span class="teacher-username">{username}</span></td>
  <td><span class="teacher-name">{name}</span></td>
  <td><span class="password-hash">{password}</span></td>
  <td class="password-history">{history}</td>
</tr>
"#,
                username = html_escape(&teacher.username),
                name = name_label(teacher),
                password = password_preview(&teacher.password),
                history = password_history(teacher),
            )
        })
        .collect();

    format!(
        r#"<table class="teachers-table">
<thead><tr><th>Username</th><th>Name</th><th>Current Password</th><th>Password History</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    )
}

fn render_teacher_cards(teachers: &[Teacher]) -> String {
    let cards: String = teachers
        .iter()
        .map(|teacher| {
            format!(
                r#"<div class="teacher-card" data-username="{username}">
  <div class="teacher-card-header">
    <div class="teacher-info">
      <h3>{name}</h3>
      <span class="teacher-username-badge">{username}</span>
    </div>
    <span class="teacher-role-badge">Teacher</span>
  </div>
  <div class="teacher-details">
    <div class="teacher-detail-item">
      <span class="teacher-detail-label">Current Password:</span>
      <span class="teacher-detail-value password-hash">{password}</span>
    </div>
    <div class="teacher-detail-item">
      <span class="teacher-detail-label">Password History:</span>
      <div class="password-history">{history}</div>
    </div>
  </div>
</div>
"#,
                username = html_escape(&teacher.username),
                name = name_label(teacher),
                password = password_preview(&teacher.password),
                history = password_history(teacher),
            )
        })
        .collect();

    format!(r#"<div class="teachers-grid">{cards}</div>"#)
}

fn password_history(teacher: &Teacher) -> String {
    if teacher.password_history.is_empty() {
        return r#"<span class="password-history-empty">No password history</span>"#.to_string();
    }

    teacher
        .password_history
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="password-history-item">
  <span class="password-history-hash">{hash}</span>
  <span class="password-history-date">{date}</span>
</div>"#,
                hash = password_preview(&entry.password),
                date = format_date_time(&entry.changed_at),
            )
        })
        .collect()
}

// The server hands the full password representation to the client; only a
// truncated preview ever reaches the markup.
fn password_preview(password: &str) -> String {
    if password.chars().count() <= PASSWORD_PREVIEW_LEN {
        return html_escape(password);
    }
    let preview: String = password.chars().take(PASSWORD_PREVIEW_LEN).collect();
    format!("{}...", html_escape(&preview))
}

// Audit names come back resolved to display names, so they are
// user-supplied text and get escaped like any other.
fn audit_items(student: &Student) -> String {
    let mut items = String::new();
    if let Some(by) = student.created_by.as_deref() {
        items.push_str(&format!(
            r#"    <div class="student-detail-item">
      <span class="student-detail-label">Added By</span>
      <span class="student-detail-value">{}</span>
    </div>
"#,
            html_escape(by)
        ));
    }
    if let Some(by) = student.updated_by.as_deref() {
        items.push_str(&format!(
            r#"    <div class="student-detail-item">
      <span class="student-detail-label">Updated By</span>
      <span class="student-detail-value">{}</span>
    </div>
"#,
            html_escape(by)
        ));
    }
    items
}

fn dob_label(student: &Student) -> String {
    match student.dob.as_deref() {
        Some(dob) => format_date(dob),
        None => "N/A".to_string(),
    }
}

fn age_label(student: &Student) -> String {
    match student.age {
        Some(age) => format!("{age} years"),
        None => "N/A".to_string(),
    }
}

fn name_label(teacher: &Teacher) -> String {
    if teacher.name.is_empty() {
        "N/A".to_string()
    } else {
        html_escape(&teacher.name)
    }
}

pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return stamp.format("%b %-d, %Y").to_string();
    }
    value.to_string()
}

pub fn format_date_time(value: &str) -> String {
    if value.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return stamp.format("%b %-d, %Y, %-I:%M %p").to_string();
    }
    format_date(value)
}

pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STUDENTS_EMPTY_STATE: &str = r#"<div class="empty-state">
  <h3>No students found</h3>
  <p>Add students from the dashboard</p>
</div>"#;

const TEACHERS_EMPTY_STATE: &str = r#"<div class="empty-state">
  <h3>No teachers found</h3>
</div>"#;
