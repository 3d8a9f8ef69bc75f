use sidebar::{SidebarConfig, SidebarController};
use std::rc::Rc;
use yew::prelude::*;

pub enum SidebarAction {
    Resize(u32),
    Toggle,
    Close,
}

/// Component-local sidebar state. Dropped with the component.
#[derive(Clone, PartialEq)]
pub struct SidebarState {
    pub controller: SidebarController,
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        match action {
            SidebarAction::Resize(width) => {
                if !controller.on_resize(width) {
                    // nothing changed, skip the re-render
                    return self;
                }
            }
            SidebarAction::Toggle => controller.toggle(),
            SidebarAction::Close => controller.close(),
        }
        Rc::new(SidebarState { controller })
    }
}

#[hook]
pub fn use_sidebar(config: &SidebarConfig) -> UseReducerHandle<SidebarState> {
    let config = config.clone();
    use_reducer(move || SidebarState {
        controller: SidebarController::new(&config),
    })
}
