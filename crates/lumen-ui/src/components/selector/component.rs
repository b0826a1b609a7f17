use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdX};
use dioxus_free_icons::Icon;

/// Edge the expanding option panel anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectorPosition {
    #[default]
    FromTop,
    FromBottom,
}

impl SelectorPosition {
    /// CSS modifier class applied to the option panel.
    pub fn class(&self) -> &'static str {
        match self {
            SelectorPosition::FromTop => "selector-panel-top",
            SelectorPosition::FromBottom => "selector-panel-bottom",
        }
    }
}

/// A labeled choice offered by a [`Selector`].
///
/// The label doubles as the list key and as the option's identity everywhere
/// in the component, so labels should be unique within one options list. Two
/// distinct values sharing a label are indistinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> SelectorOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Open/selection state behind a [`Selector`] instance.
///
/// Two states: closed (initial) and open. Closed goes to open on a trigger
/// click when not disabled; open goes back to closed on a trigger click, an
/// option click, or a pointer-down on the backdrop. The selection is never
/// validated against the options list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorState<T> {
    open: bool,
    selected: Option<SelectorOption<T>>,
}

impl<T: Clone> SelectorState<T> {
    pub fn new(selected: Option<SelectorOption<T>>) -> Self {
        Self {
            open: false,
            selected,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&SelectorOption<T>> {
        self.selected.as_ref()
    }

    /// Trigger click. No-op while disabled.
    pub fn toggle(&mut self, disabled: bool) {
        if !disabled {
            self.open = !self.open;
        }
    }

    /// Option click: take the selection and toggle the panel.
    ///
    /// Options are only rendered while the panel is open, so the toggle
    /// closes it.
    pub fn choose(&mut self, option: SelectorOption<T>) {
        self.selected = Some(option);
        self.open = !self.open;
    }

    /// Clear affordance click. Leaves the open state alone.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Pointer-down outside the component subtree.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

/// A dropdown selector: a trigger styled like a text input plus a togglable
/// panel listing the options in the order given.
///
/// The instance's mode is fixed at mount. When `value` is supplied on the
/// first render the selector is controlled — the displayed selection always
/// comes from the `value` prop and the caller updates it in response to
/// `on_change`. Otherwise the selection lives in internal state seeded from
/// `default_option` and the caller observes changes only via `on_change`.
///
/// While the panel is open a backdrop sits behind it; a mouse-down on the
/// backdrop closes the panel, so clicks inside the component never dismiss
/// it and the dismissal surface goes away with the panel itself.
#[component]
pub fn Selector<T: Clone + PartialEq + 'static>(
    /// Text shown in the trigger when no option is selected.
    #[props(default = "Select".to_string())]
    placeholder: String,
    /// Selectable choices, rendered in the given order.
    #[props(default)]
    options: Vec<SelectorOption<T>>,
    /// Initial selection for an uncontrolled instance.
    #[props(default)]
    default_option: Option<SelectorOption<T>>,
    /// Controlled selection. Supplying this at mount fixes the instance in
    /// controlled mode.
    #[props(default)]
    value: Option<SelectorOption<T>>,
    /// Suppresses the open/close interaction entirely.
    #[props(default = false)]
    disabled: bool,
    /// Visual-only error styling on the trigger.
    #[props(default = false)]
    error: bool,
    /// Show a clear affordance instead of the chevron while a selection
    /// exists.
    #[props(default = false)]
    clearable: bool,
    /// Edge the panel anchors to.
    #[props(default)]
    position: SelectorPosition,
    /// Called with the new selection, or with `None` when cleared.
    #[props(default)]
    on_change: Option<EventHandler<Option<SelectorOption<T>>>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut state = use_signal(move || SelectorState::new(default_option));
    // Mode is decided once: an instance that mounts controlled stays
    // controlled even if the caller later passes no value.
    let controlled = use_hook(|| value.is_some());

    let selected = if controlled {
        value.clone()
    } else {
        state.read().selected().cloned()
    };
    let is_open = state.read().is_open();
    let panel_class = position.class();

    let base = vec![Attribute::new("class", "selector", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            div {
                class: "input selector-trigger",
                class: if is_open { "selector-trigger-open" },
                class: if error { "selector-trigger-error" },
                class: if disabled { "selector-trigger-disabled" },
                onclick: move |_| state.write().toggle(disabled),

                if let Some(current) = &selected {
                    div { class: "selector-value", "{current.label}" }
                } else {
                    div { class: "selector-placeholder", "{placeholder}" }
                }

                div { class: "selector-controls",
                    if clearable && selected.is_some() {
                        div {
                            class: "selector-clear",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                state.write().clear();
                                if let Some(handler) = &on_change {
                                    handler.call(None);
                                }
                            },
                            Icon { icon: LdX, width: 16, height: 16 }
                        }
                    } else {
                        div { class: "selector-chevron",
                            Icon { icon: LdChevronDown, width: 16, height: 16 }
                        }
                    }
                }
            }

            if is_open {
                // Backdrop to close on outside pointer-down. Mounted only
                // while the panel is, so it is released on every exit path.
                div {
                    class: "selector-backdrop",
                    onmousedown: move |_| state.write().dismiss(),
                }

                div { class: "selector-panel {panel_class}",
                    for option in options.iter() {
                        {
                            let label = option.label.clone();
                            let choice = option.clone();
                            rsx! {
                                div {
                                    key: "{label}",
                                    class: "selector-item",
                                    onclick: move |_| {
                                        state.write().choose(choice.clone());
                                        if let Some(handler) = &on_change {
                                            handler.call(Some(choice.clone()));
                                        }
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
