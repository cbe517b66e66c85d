pub mod api;
pub mod errors;
pub mod modal;
pub mod models;
pub mod notify;
pub mod page;
pub mod session;
pub mod store;
pub mod ui;

pub use api::ApiClient;
pub use errors::PanelError;
pub use page::{PagePolicy, StudentForm, StudentsPage, TeachersPage};
pub use session::Navigation;
