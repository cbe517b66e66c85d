#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    EditStudent { id: i64 },
    DeleteStudent { id: i64, name: String },
    Attendance { id: i64 },
    ChangePassword,
    EditTeacher { username: String },
}

/// At most one modal is visible at a time: hidden -> visible -> hidden.
/// Opening records the selected record key; closing clears it.
#[derive(Debug, Default)]
pub struct ModalState {
    open: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, modal: Modal) {
        self.open = Some(modal);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn outside_click(&mut self) {
        self.close();
    }

    pub fn current(&self) -> Option<&Modal> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}
