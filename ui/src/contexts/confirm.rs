use futures::channel::oneshot;
use sidebar::{Confirmation, ConfirmationPrompt, PromptRequest};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::ConfirmDialog;

/// A question waiting for the user. The responder fires at most once.
#[derive(Clone)]
pub struct PendingConfirm {
    pub request: PromptRequest,
    responder: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
}

impl PartialEq for PendingConfirm {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request
            && Rc::ptr_eq(&self.responder, &other.responder)
    }
}

impl PendingConfirm {
    fn respond(&self, confirmed: bool) {
        if let Some(sender) = self.responder.borrow_mut().take() {
            let _ = sender.send(confirmed);
        }
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct ConfirmState {
    pub pending: Option<PendingConfirm>,
}

pub enum ConfirmAction {
    Show(PendingConfirm),
    Dismiss,
}

impl Reducible for ConfirmState {
    type Action = ConfirmAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let pending = match action {
            ConfirmAction::Show(pending) => Some(pending),
            ConfirmAction::Dismiss => None,
        };
        Rc::new(ConfirmState { pending })
    }
}

pub type ConfirmContext = UseReducerHandle<ConfirmState>;

#[derive(Properties, PartialEq)]
pub struct ConfirmProviderProps {
    pub children: Children,
}

/// Hosts the single confirmation dialog for everything below it.
#[function_component]
pub fn ConfirmProvider(props: &ConfirmProviderProps) -> Html {
    let confirm_state = use_reducer(ConfirmState::default);
    let handle = ConfirmHandle::new(confirm_state.clone());

    let dialog = confirm_state.pending.as_ref().map(|pending| {
        let on_answer = {
            let handle = handle.clone();
            Callback::from(move |confirmed: bool| handle.answer(confirmed))
        };
        html! {
            <ConfirmDialog request={pending.request.clone()} {on_answer} />
        }
    });

    html! {
        <ContextProvider<ConfirmContext> context={confirm_state}>
            {props.children.clone()}
            {for dialog}
        </ContextProvider<ConfirmContext>>
    }
}

#[derive(Clone)]
pub struct ConfirmHandle {
    context: ConfirmContext,
}

impl ConfirmHandle {
    pub fn new(context: ConfirmContext) -> Self {
        Self { context }
    }

    /// Resolve the open question, if any, and close the dialog.
    pub fn answer(&self, confirmed: bool) {
        if let Some(pending) = &self.context.pending {
            pending.respond(confirmed);
        }
        self.context.dispatch(ConfirmAction::Dismiss);
    }
}

impl ConfirmationPrompt for ConfirmHandle {
    async fn confirm(&self, request: &PromptRequest) -> Confirmation {
        // A newer question replaces an unanswered one, which counts as a no.
        if let Some(previous) = &self.context.pending {
            previous.respond(false);
        }

        let (sender, receiver) = oneshot::channel();
        self.context.dispatch(ConfirmAction::Show(PendingConfirm {
            request: request.clone(),
            responder: Rc::new(RefCell::new(Some(sender))),
        }));

        // The sender is dropped if the provider unmounts first.
        let confirmed = receiver.await.unwrap_or(false);
        Confirmation { confirmed }
    }
}

#[hook]
pub fn use_confirm() -> ConfirmHandle {
    let context = use_context::<ConfirmContext>()
        .expect("use_confirm must be used within a ConfirmProvider");
    ConfirmHandle::new(context)
}
