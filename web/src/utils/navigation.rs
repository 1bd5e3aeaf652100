/// Pages reachable by a full navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Maps,
    Form,
    Results,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Maps => "/maps",
            Page::Form => "/form",
            Page::Results => "/results",
        }
    }
}

/// Loads `page` in the current tab. Each page reads its state from storage on load.
pub fn navigate_to(page: Page) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(page.path());
    }
}
