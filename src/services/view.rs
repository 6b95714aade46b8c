/// The four mutually exclusive render states of the candidate page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Empty,
    Populated,
}

/// Decision order: loading beats error beats empty beats populated.
pub fn resolve_view(loading: bool, error: Option<&str>, filtered_count: usize) -> ViewState {
    if loading {
        return ViewState::Loading;
    }
    if let Some(message) = error {
        return ViewState::Error(message.to_string());
    }
    if filtered_count == 0 {
        return ViewState::Empty;
    }
    ViewState::Populated
}
