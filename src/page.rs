use crate::api::ApiClient;
use crate::errors::PanelError;
use crate::modal::{Modal, ModalState};
use crate::models::{
    ChangePasswordRequest, SessionUser, Student, StudentPayload, Teacher, TeacherUpdate,
};
use crate::notify::{NoticeKind, Notifier};
use crate::session::{Navigation, SessionOutcome, check_session};
use crate::store::RecordStore;
use crate::ui::{self, ViewMode};
use chrono::NaiveDate;

/// What an empty search box does: the list page reloads everything, the
/// dashboard refuses with an informational notice. Both behaviors exist in
/// the panel; which one a page gets is configuration, not a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    ReloadAll,
    RequireQuery,
}

/// After a successful create/update the dashboard navigates to the list
/// page; the list page patches its own store in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    NavigateToList,
    UpdateInPlace,
}

#[derive(Debug, Clone, Copy)]
pub struct PagePolicy {
    pub search: SearchPolicy,
    pub after_submit: AfterSubmit,
}

impl PagePolicy {
    pub fn dashboard() -> Self {
        Self {
            search: SearchPolicy::RequireQuery,
            after_submit: AfterSubmit::NavigateToList,
        }
    }

    pub fn list_page() -> Self {
        Self {
            search: SearchPolicy::ReloadAll,
            after_submit: AfterSubmit::UpdateInPlace,
        }
    }
}

/// Raw form fields as the user typed them. Validation happens on submit.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub name: String,
    pub dob: String,
    pub age: String,
    pub class: String,
}

pub(crate) fn validate_student_form(form: &StudentForm) -> Result<StudentPayload, PanelError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(PanelError::validation("name is required"));
    }

    let class = form.class.trim();
    if class.is_empty() {
        return Err(PanelError::validation("class is required"));
    }

    let dob = form.dob.trim();
    let age_text = form.age.trim();
    if dob.is_empty() && age_text.is_empty() {
        return Err(PanelError::validation("Date of birth or age is required"));
    }

    if !dob.is_empty() && NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
        return Err(PanelError::validation("DOB must be in YYYY-MM-DD format"));
    }

    let age = if age_text.is_empty() {
        None
    } else {
        match age_text.parse::<u32>() {
            Ok(age) if age <= 150 => Some(age),
            _ => {
                return Err(PanelError::validation(
                    "Age must be a whole number between 0 and 150",
                ));
            }
        }
    };

    Ok(StudentPayload {
        name: name.to_string(),
        dob: (!dob.is_empty()).then(|| dob.to_string()),
        age,
        class: class.to_string(),
    })
}

pub struct StudentsPage {
    api: ApiClient,
    policy: PagePolicy,
    user: Option<SessionUser>,
    loading: bool,
    pub store: RecordStore<Student>,
    pub view_mode: ViewMode,
    pub modal: ModalState,
    pub notices: Notifier,
}

impl StudentsPage {
    pub fn new(api: ApiClient, policy: PagePolicy) -> Self {
        Self {
            api,
            policy,
            user: None,
            loading: false,
            store: RecordStore::new(),
            view_mode: ViewMode::default(),
            modal: ModalState::new(),
            notices: Notifier::new(),
        }
    }

    /// Session guard. A redirect means initialization stops here; nothing
    /// else on the page runs.
    pub async fn init(&mut self) -> Option<Navigation> {
        match check_session(&self.api).await {
            SessionOutcome::Authenticated(user) => {
                self.user = Some(user);
                None
            }
            SessionOutcome::RedirectToLogin => Some(Navigation::login()),
        }
    }

    pub fn user_display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.name.as_str())
    }

    /// Shows the loading placeholder until the next fetch settles. The host
    /// calls this before awaiting `load_students` so an intermediate render
    /// has something to show.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load_students(&mut self) {
        self.loading = true;
        match self.api.list_students().await {
            Ok(students) => self.store.replace_all(students),
            Err(err) => {
                self.store.clear();
                self.notices.push(NoticeKind::Error, err.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn add_student(&mut self, form: &StudentForm) -> Option<Navigation> {
        let payload = match validate_student_form(form) {
            Ok(payload) => payload,
            Err(err) => {
                self.notices.push(NoticeKind::Error, err.to_string());
                return None;
            }
        };

        match self.api.create_student(&payload).await {
            Ok(created) => {
                self.notices
                    .push(NoticeKind::Success, "Student added successfully!");
                match self.policy.after_submit {
                    AfterSubmit::NavigateToList => Some(Navigation::students_list()),
                    AfterSubmit::UpdateInPlace => {
                        self.store.prepend(created);
                        None
                    }
                }
            }
            Err(err) => {
                self.notices.push(NoticeKind::Error, err.to_string());
                None
            }
        }
    }

    /// Opens the edit modal for a stored record and returns its fields as a
    /// pre-filled form. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: i64) -> Option<StudentForm> {
        let student = self.store.get(&id)?;
        let form = StudentForm {
            name: student.name.clone(),
            dob: student.dob.clone().unwrap_or_default(),
            age: student.age.map(|age| age.to_string()).unwrap_or_default(),
            class: student.class.clone(),
        };
        self.modal.open(Modal::EditStudent { id });
        Some(form)
    }

    pub async fn update_student(&mut self, form: &StudentForm) -> Option<Navigation> {
        let Some(Modal::EditStudent { id }) = self.modal.current() else {
            return None;
        };
        let id = *id;

        let payload = match validate_student_form(form) {
            Ok(payload) => payload,
            Err(err) => {
                self.notices.push(NoticeKind::Error, err.to_string());
                return None;
            }
        };

        match self.api.update_student(id, &payload).await {
            Ok(updated) => {
                self.modal.close();
                self.notices
                    .push(NoticeKind::Success, "Student updated successfully!");
                match self.policy.after_submit {
                    AfterSubmit::NavigateToList => Some(Navigation::students_list()),
                    AfterSubmit::UpdateInPlace => {
                        if !self.store.patch(updated) {
                            self.load_students().await;
                        }
                        None
                    }
                }
            }
            Err(err) => {
                // modal stays open so the form can be corrected
                self.notices.push(NoticeKind::Error, err.to_string());
                None
            }
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        if let Some(student) = self.store.get(&id) {
            let name = student.name.clone();
            self.modal.open(Modal::DeleteStudent { id, name });
        }
    }

    pub fn cancel_delete(&mut self) {
        self.modal.close();
    }

    pub async fn confirm_delete(&mut self) {
        let Some(Modal::DeleteStudent { id, .. }) = self.modal.current() else {
            return;
        };
        let id = *id;

        match self.api.delete_student(id).await {
            Ok(_) => {
                self.store.remove(&id);
                self.modal.close();
                self.notices
                    .push(NoticeKind::Success, "Student deleted successfully!");
            }
            Err(err) => {
                self.notices.push(NoticeKind::Error, err.to_string());
            }
        }
    }

    pub async fn search(&mut self, query: &str) -> Option<Navigation> {
        let query = query.trim();

        if query.is_empty() {
            return match self.policy.search {
                SearchPolicy::ReloadAll => {
                    self.load_students().await;
                    None
                }
                SearchPolicy::RequireQuery => {
                    self.notices
                        .push(NoticeKind::Info, "Please enter a search term");
                    None
                }
            };
        }

        self.loading = true;
        let searched = self.api.search_students(query).await;
        self.loading = false;

        match searched {
            Ok(results) => {
                if results.is_empty() {
                    self.notices
                        .push(NoticeKind::Info, "No students found matching your search");
                    if self.policy.search == SearchPolicy::ReloadAll {
                        self.store.replace_all(results);
                    }
                    return None;
                }
                match self.policy.search {
                    SearchPolicy::RequireQuery => Some(Navigation::search_results(query)),
                    SearchPolicy::ReloadAll => {
                        self.store.replace_all(results);
                        None
                    }
                }
            }
            Err(err) => {
                self.notices.push(NoticeKind::Error, err.to_string());
                None
            }
        }
    }

    /// Attendance placeholder. The dashboard hands the record off to the
    /// list page; the list page opens the placeholder modal for a stored id.
    pub fn view_attendance(&mut self, id: i64) -> Option<Navigation> {
        match self.policy.after_submit {
            AfterSubmit::NavigateToList => Some(Navigation::attendance(id)),
            AfterSubmit::UpdateInPlace => {
                if self.store.get(&id).is_some() {
                    self.modal.open(Modal::Attendance { id });
                }
                None
            }
        }
    }

    pub fn open_change_password(&mut self) {
        self.modal.open(Modal::ChangePassword);
    }

    pub async fn change_password(&mut self, current: &str, new: &str, confirm: &str) {
        if current.is_empty() || new.is_empty() || confirm.is_empty() {
            self.notices
                .push(NoticeKind::Error, "All fields are required");
            return;
        }
        if new != confirm {
            self.notices
                .push(NoticeKind::Error, "New passwords do not match");
            return;
        }

        let request = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        match self.api.change_password(&request).await {
            Ok(_) => {
                self.modal.close();
                self.notices
                    .push(NoticeKind::Success, "Password changed successfully!");
            }
            Err(err) => {
                self.notices.push(NoticeKind::Error, err.to_string());
            }
        }
    }

    pub async fn logout(&mut self) -> Option<Navigation> {
        match self.api.logout().await {
            Ok(()) => Some(Navigation::login()),
            Err(_) => {
                self.notices.push(NoticeKind::Error, "Logout failed");
                None
            }
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn render(&self) -> String {
        if self.loading {
            return ui::render_loading();
        }
        ui::render_students(self.store.records(), self.view_mode)
    }

    pub fn student_count_label(&self) -> String {
        let total = self.store.len();
        let suffix = if total == 1 { "" } else { "s" };
        format!("{total} student{suffix}")
    }
}

pub struct TeachersPage {
    api: ApiClient,
    user: Option<SessionUser>,
    pub store: RecordStore<Teacher>,
    pub view_mode: ViewMode,
    pub modal: ModalState,
    pub notices: Notifier,
}

impl TeachersPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: None,
            store: RecordStore::new(),
            view_mode: ViewMode::default(),
            modal: ModalState::new(),
            notices: Notifier::new(),
        }
    }

    pub async fn init(&mut self) -> Option<Navigation> {
        match check_session(&self.api).await {
            SessionOutcome::Authenticated(user) => {
                self.user = Some(user);
                None
            }
            SessionOutcome::RedirectToLogin => Some(Navigation::login()),
        }
    }

    pub fn user_display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.name.as_str())
    }

    pub async fn load_teachers(&mut self) {
        match self.api.list_teachers().await {
            Ok(teachers) => self.store.replace_all(teachers),
            Err(err) => {
                self.store.clear();
                self.notices.push(NoticeKind::Error, err.to_string());
            }
        }
    }

    /// Opens the name-edit modal and returns the current display name.
    pub fn begin_edit(&mut self, username: &str) -> Option<String> {
        let teacher = self.store.get(&username.to_string())?;
        let name = teacher.name.clone();
        self.modal.open(Modal::EditTeacher {
            username: username.to_string(),
        });
        Some(name)
    }

    pub async fn submit_name(&mut self, new_name: &str) {
        let Some(Modal::EditTeacher { username }) = self.modal.current() else {
            return;
        };
        let username = username.clone();

        let name = new_name.trim();
        if name.is_empty() {
            self.notices.push(NoticeKind::Error, "Name is required");
            return;
        }

        let update = TeacherUpdate {
            name: name.to_string(),
        };
        match self.api.update_teacher(&username, &update).await {
            Ok(_) => {
                self.modal.close();
                self.load_teachers().await;
                self.notices
                    .push(NoticeKind::Success, "Teacher name updated successfully!");
            }
            Err(err) => {
                self.notices.push(NoticeKind::Error, err.to_string());
            }
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn render(&self) -> String {
        ui::render_teachers(self.store.records(), self.view_mode)
    }
}
