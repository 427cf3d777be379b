use log::info;
use yew::Callback;

/// Page-wide color presentation. Provided to descendants through a
/// `ContextProvider<Theme>` owned by the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the root container.
    pub fn root_class(self) -> Option<&'static str> {
        self.is_dark().then_some("dark-mode")
    }

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Click listener for the theme control: pushes the other theme into `set`.
pub fn toggle_listener<E: 'static>(current: Theme, set: Callback<Theme>) -> Callback<E> {
    Callback::from(move |_: E| {
        let next = current.toggled();
        info!("Switching to {:?} theme", next);
        set.emit(next);
    })
}
