use crate::api::ApiClient;
use crate::models::SessionUser;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    location: String,
}

impl Navigation {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn login() -> Self {
        Self::to("/login")
    }

    pub fn students_list() -> Self {
        Self::to("/students_list")
    }

    pub fn search_results(query: &str) -> Self {
        Self::to(format!("/students_list?search={}", encode_query(query)))
    }

    pub fn attendance(id: i64) -> Self {
        Self::to(format!("/students_list?attendance={id}"))
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[derive(Debug)]
pub enum SessionOutcome {
    Authenticated(SessionUser),
    RedirectToLogin,
}

/// Startup gate: any failure, transport or status, sends the visitor to the
/// login page. There is no recovery path.
pub async fn check_session(api: &ApiClient) -> SessionOutcome {
    match api.current_user().await {
        Ok(user) => SessionOutcome::Authenticated(user),
        Err(err) => {
            warn!("auth check failed: {err}");
            SessionOutcome::RedirectToLogin
        }
    }
}

fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
