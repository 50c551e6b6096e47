//! In-memory doubles for controller tests.

use super::ChatSessionController;
use crate::ports::chat_backend::{BackendError, ChatBackend, ChatOutcome, ChatReply, ChatRequest};
use crate::ports::user_prompt::UserPrompt;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tutor_domain::{LoadingId, Message, Session, SessionEntry, SessionId};

pub use crate::ports::view_renderer::ViewRenderer;

pub fn sid(id: &str) -> SessionId {
    SessionId::new(id).unwrap()
}

pub fn session(id: &str, title: &str) -> Session {
    Session::new(sid(id), title)
}

// ==================== Backend ====================

pub struct MockBackend {
    sessions: Mutex<Result<Vec<Session>, BackendError>>,
    history: Mutex<Result<Vec<Message>, BackendError>>,
    clear: Mutex<Result<(), BackendError>>,
    chat: Mutex<Result<ChatOutcome, BackendError>>,
    chat_requests: Mutex<Vec<ChatRequest>>,
    list_calls: Mutex<usize>,
    clear_calls: Mutex<usize>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Ok(vec![])),
            history: Mutex::new(Ok(vec![])),
            clear: Mutex::new(Ok(())),
            chat: Mutex::new(Ok(ChatOutcome::Reply(ChatReply::default()))),
            chat_requests: Mutex::new(vec![]),
            list_calls: Mutex::new(0),
            clear_calls: Mutex::new(0),
        }
    }

    pub fn with_sessions(self, sessions: Vec<Session>) -> Self {
        *self.sessions.lock().unwrap() = Ok(sessions);
        self
    }

    pub fn with_sessions_error(self, error: BackendError) -> Self {
        *self.sessions.lock().unwrap() = Err(error);
        self
    }

    pub fn with_history(self, messages: Vec<Message>) -> Self {
        *self.history.lock().unwrap() = Ok(messages);
        self
    }

    pub fn with_history_error(self, error: BackendError) -> Self {
        *self.history.lock().unwrap() = Err(error);
        self
    }

    pub fn with_clear_error(self, error: BackendError) -> Self {
        *self.clear.lock().unwrap() = Err(error);
        self
    }

    pub fn with_chat(self, outcome: Result<ChatOutcome, BackendError>) -> Self {
        *self.chat.lock().unwrap() = outcome;
        self
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn clear_calls(&self) -> usize {
        *self.clear_calls.lock().unwrap()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn list_sessions(&self) -> Result<Vec<Session>, BackendError> {
        *self.list_calls.lock().unwrap() += 1;
        self.sessions.lock().unwrap().clone()
    }

    async fn fetch_history(&self, _session_id: &SessionId) -> Result<Vec<Message>, BackendError> {
        self.history.lock().unwrap().clone()
    }

    async fn clear_history(&self) -> Result<(), BackendError> {
        *self.clear_calls.lock().unwrap() += 1;
        self.clear.lock().unwrap().clone()
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatOutcome, BackendError> {
        self.chat_requests.lock().unwrap().push(request.clone());
        self.chat.lock().unwrap().clone()
    }
}

// ==================== View ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    Message(Message),
    SessionList(Vec<SessionEntry>),
    ShowLoading(String),
    HideLoading(String),
    RemoveLoadingWithPrefix(String),
    Welcome(bool),
    ClearMessages,
    ClearActiveMarks,
    ClearInput,
    Reload,
}

#[derive(Default)]
struct ViewState {
    ops: Vec<ViewOp>,
    messages: Vec<Message>,
    loading: Vec<String>,
    directory: Vec<SessionEntry>,
    welcome: bool,
}

/// Records every call and keeps just enough state to assert on.
pub struct RecordingView {
    state: Mutex<ViewState>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ViewState {
                welcome: true,
                ..Default::default()
            }),
        }
    }

    pub fn ops(&self) -> Vec<ViewOp> {
        self.state.lock().unwrap().ops.clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn loading_ids(&self) -> Vec<String> {
        self.state.lock().unwrap().loading.clone()
    }

    pub fn directory(&self) -> Vec<SessionEntry> {
        self.state.lock().unwrap().directory.clone()
    }

    pub fn active_rows(&self) -> Vec<String> {
        self.directory()
            .into_iter()
            .filter(|e| e.active)
            .map(|e| e.session.id.to_string())
            .collect()
    }

    pub fn welcome_visible(&self) -> bool {
        self.state.lock().unwrap().welcome
    }

    pub fn reloads(&self) -> usize {
        self.count(|op| matches!(op, ViewOp::Reload))
    }

    pub fn input_clears(&self) -> usize {
        self.count(|op| matches!(op, ViewOp::ClearInput))
    }

    fn count(&self, pred: impl Fn(&ViewOp) -> bool) -> usize {
        self.state.lock().unwrap().ops.iter().filter(|op| pred(op)).count()
    }
}

impl ViewRenderer for RecordingView {
    fn render_message(&self, message: &Message) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::Message(message.clone()));
        s.messages.push(message.clone());
    }

    fn render_session_list(&self, entries: &[SessionEntry]) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::SessionList(entries.to_vec()));
        s.directory = entries.to_vec();
    }

    fn show_loading(&self, id: &LoadingId) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::ShowLoading(id.to_string()));
        s.loading.push(id.to_string());
    }

    fn hide_loading(&self, id: &LoadingId) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::HideLoading(id.to_string()));
        s.loading.retain(|l| l != id.as_str());
    }

    fn remove_loading_with_prefix(&self, prefix: &str) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::RemoveLoadingWithPrefix(prefix.to_string()));
        if let Some(pos) = s.loading.iter().position(|l| l.starts_with(prefix)) {
            s.loading.remove(pos);
        }
    }

    fn set_welcome_visible(&self, visible: bool) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::Welcome(visible));
        s.welcome = visible;
    }

    fn clear_messages(&self) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::ClearMessages);
        s.messages.clear();
        s.loading.clear();
    }

    fn clear_active_marks(&self) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::ClearActiveMarks);
        for entry in &mut s.directory {
            entry.active = false;
        }
    }

    fn clear_input(&self) {
        self.state.lock().unwrap().ops.push(ViewOp::ClearInput);
    }

    fn reload(&self) {
        let mut s = self.state.lock().unwrap();
        s.ops.push(ViewOp::Reload);
        s.messages.clear();
        s.loading.clear();
        s.welcome = true;
    }
}

// ==================== Prompt ====================

pub struct MockPrompt {
    answer: bool,
    confirmations: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl MockPrompt {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            confirmations: Mutex::new(vec![]),
            alerts: Mutex::new(vec![]),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            ..Self::accepting()
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl UserPrompt for MockPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

// ==================== Harness ====================

pub struct Harness {
    pub backend: Arc<MockBackend>,
    pub view: Arc<RecordingView>,
    pub prompt: Arc<MockPrompt>,
    pub controller: ChatSessionController,
}

impl Harness {
    pub fn new(backend: MockBackend) -> Self {
        Self::with_prompt(backend, MockPrompt::accepting())
    }

    pub fn with_prompt(backend: MockBackend, prompt: MockPrompt) -> Self {
        let backend = Arc::new(backend);
        let view = Arc::new(RecordingView::new());
        let prompt = Arc::new(prompt);
        let controller = ChatSessionController::new(backend.clone(), view.clone(), prompt.clone());
        Self {
            backend,
            view,
            prompt,
            controller,
        }
    }
}
