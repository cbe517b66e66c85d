use crate::errors::{GENERIC_MESSAGE, PanelError};
use crate::models::{
    ChangePasswordRequest, MessageResponse, SessionUser, Student, StudentPayload, Teacher,
    TeacherUpdate, TeacherUpdateResponse,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Server error bodies are duck-typed: most handlers respond with
/// `{"error": ...}`, one variant with `{"message": ...}`. Both are adapted
/// to a single message at this boundary.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, PanelError> {
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(PanelError::transport)?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, PanelError> {
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&bytes);
            error!("api error ({status}): {message}");
            return Err(PanelError::api(message));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn current_user(&self) -> Result<SessionUser, PanelError> {
        self.execute(self.http.get(self.url("/api/user"))).await
    }

    pub async fn logout(&self) -> Result<(), PanelError> {
        self.http.get(self.url("/logout")).send().await?;
        Ok(())
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, PanelError> {
        self.execute(self.http.get(self.url("/api/students"))).await
    }

    pub async fn search_students(&self, query: &str) -> Result<Vec<Student>, PanelError> {
        let request = self
            .http
            .get(self.url("/api/students/search"))
            .query(&[("q", query)]);
        self.execute(request).await
    }

    pub async fn get_student(&self, id: i64) -> Result<Student, PanelError> {
        self.execute(self.http.get(self.url(&format!("/api/students/{id}"))))
            .await
    }

    pub async fn create_student(&self, payload: &StudentPayload) -> Result<Student, PanelError> {
        self.execute(self.http.post(self.url("/api/students")).json(payload))
            .await
    }

    pub async fn update_student(
        &self,
        id: i64,
        payload: &StudentPayload,
    ) -> Result<Student, PanelError> {
        self.execute(
            self.http
                .put(self.url(&format!("/api/students/{id}")))
                .json(payload),
        )
        .await
    }

    pub async fn delete_student(&self, id: i64) -> Result<MessageResponse, PanelError> {
        self.execute(self.http.delete(self.url(&format!("/api/students/{id}"))))
            .await
    }

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, PanelError> {
        self.execute(self.http.get(self.url("/api/teachers"))).await
    }

    pub async fn update_teacher(
        &self,
        username: &str,
        update: &TeacherUpdate,
    ) -> Result<TeacherUpdateResponse, PanelError> {
        self.execute(
            self.http
                .put(self.url(&format!("/api/teachers/{username}")))
                .json(update),
        )
        .await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, PanelError> {
        self.execute(self.http.post(self.url("/api/change_password")).json(request))
            .await
    }
}

fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
        Err(_) => GENERIC_MESSAGE.to_string(),
    }
}
