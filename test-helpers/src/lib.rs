pub mod mock;

use sidebar::{
    Confirmation, ConfirmationPrompt, Location, PromptRequest, Router,
    RouterEvent, SessionStore,
};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Route test logs through the test harness' captured output. Set RUST_LOG
/// to see them.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env(),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Side effects observed by the fakes, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Prompt(PromptRequest),
    ClearAll,
    Redirect(String),
}

/// Shared log of calls made against the fakes.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Call>>>);

impl Journal {
    pub fn record(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.0.borrow().iter().filter(|c| *c == call).count()
    }
}

/// A confirmation dialog with a scripted answer.
pub struct ScriptedPrompt {
    answer: bool,
    journal: Journal,
}

impl ScriptedPrompt {
    pub fn accepting(journal: &Journal) -> Self {
        Self {
            answer: true,
            journal: journal.clone(),
        }
    }

    pub fn declining(journal: &Journal) -> Self {
        Self {
            answer: false,
            journal: journal.clone(),
        }
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    async fn confirm(&self, request: &PromptRequest) -> Confirmation {
        self.journal.record(Call::Prompt(request.clone()));
        Confirmation {
            confirmed: self.answer,
        }
    }
}

pub struct RecordingStore {
    journal: Journal,
}

impl RecordingStore {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl SessionStore for RecordingStore {
    fn clear_all(&self) {
        self.journal.record(Call::ClearAll);
    }
}

pub struct RecordingLocation {
    journal: Journal,
}

impl RecordingLocation {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl Location for RecordingLocation {
    fn redirect(&self, href: &str) {
        self.journal.record(Call::Redirect(href.to_string()));
    }
}

type Callback = Rc<dyn Fn(&RouterEvent)>;
type Registry = RefCell<Vec<(u64, Callback)>>;

/// An in-memory router. Listeners unregister when their handle drops.
#[derive(Default)]
pub struct FakeRouter {
    url: RefCell<String>,
    listeners: Rc<Registry>,
    next_id: Cell<u64>,
}

pub struct FakeListener {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl FakeRouter {
    pub fn at(url: &str) -> Self {
        let router = Self::default();
        router.url.replace(url.to_string());
        router
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// A successful navigation: start, then end.
    pub fn navigate(&self, url: &str) {
        self.emit(&RouterEvent::NavigationStart {
            url: url.to_string(),
        });
        self.url.replace(url.to_string());
        self.emit(&RouterEvent::NavigationEnd {
            url: url.to_string(),
        });
    }

    /// A navigation that never finishes; the current URL is unchanged.
    pub fn cancelled_navigation(&self, url: &str) {
        self.emit(&RouterEvent::NavigationStart {
            url: url.to_string(),
        });
        self.emit(&RouterEvent::NavigationCancel {
            url: url.to_string(),
        });
    }

    pub fn emit(&self, event: &RouterEvent) {
        // Snapshot so callbacks may register or drop listeners.
        let callbacks: Vec<Callback> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }
}

impl Router for FakeRouter {
    type Listener = FakeListener;

    fn current_url(&self) -> String {
        self.url.borrow().clone()
    }

    fn listen(&self, callback: Box<dyn Fn(&RouterEvent)>) -> FakeListener {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(callback)));
        FakeListener {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }
}
