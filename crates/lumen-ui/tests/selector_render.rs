//! SSR smoke tests for the selector markup: the interactive transitions are
//! covered by the `SelectorState` unit tests, these pin down what actually
//! reaches the DOM for a given set of props.

use dioxus::prelude::*;
use lumen_ui::components::{Input, Selector, SelectorOption, SelectorPosition};
use pretty_assertions::assert_eq;

fn sizes() -> Vec<SelectorOption<u32>> {
    vec![
        SelectorOption::new("Small", 1),
        SelectorOption::new("Medium", 2),
        SelectorOption::new("Large", 3),
    ]
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn placeholder_renders_when_nothing_selected() {
    fn app() -> Element {
        rsx! {
            Selector::<u32> { placeholder: "Pick a size", options: sizes() }
        }
    }

    let html = render(app);
    assert!(html.contains("selector-placeholder"));
    assert!(html.contains("Pick a size"));
    assert!(!html.contains("selector-value"));
}

#[test]
fn default_option_label_renders_in_trigger() {
    fn app() -> Element {
        rsx! {
            Selector::<u32> {
                options: sizes(),
                default_option: SelectorOption::new("Medium", 2),
            }
        }
    }

    let html = render(app);
    assert!(html.contains("selector-value"));
    assert!(html.contains("Medium"));
    assert!(!html.contains("selector-placeholder"));
}

#[test]
fn closed_panel_renders_no_options_or_backdrop() {
    fn app() -> Element {
        rsx! {
            Selector::<u32> { options: sizes(), position: SelectorPosition::FromBottom }
        }
    }

    let html = render(app);
    assert!(!html.contains("selector-panel"));
    assert!(!html.contains("selector-backdrop"));
    assert_eq!(html.matches("selector-item").count(), 0);
}

#[test]
fn error_flag_adds_trigger_modifier() {
    fn app() -> Element {
        rsx! {
            Selector::<u32> { options: sizes(), error: true }
        }
    }

    let html = render(app);
    assert!(html.contains("selector-trigger-error"));
}

#[test]
fn disabled_flag_adds_trigger_modifier() {
    fn app() -> Element {
        rsx! {
            Selector::<u32> { options: sizes(), disabled: true }
        }
    }

    let html = render(app);
    assert!(html.contains("selector-trigger-disabled"));
}

#[test]
fn clear_affordance_requires_clearable_and_a_selection() {
    fn cleared_app() -> Element {
        rsx! {
            Selector::<u32> {
                options: sizes(),
                clearable: true,
                default_option: SelectorOption::new("Small", 1),
            }
        }
    }
    fn empty_app() -> Element {
        rsx! {
            Selector::<u32> { options: sizes(), clearable: true }
        }
    }

    let with_selection = render(cleared_app);
    assert!(with_selection.contains("selector-clear"));
    assert!(!with_selection.contains("selector-chevron"));

    let without_selection = render(empty_app);
    assert!(without_selection.contains("selector-chevron"));
    assert!(!without_selection.contains("selector-clear"));
}

#[test]
fn controlled_value_updates_without_clicks() {
    static CHOICE: GlobalSignal<SelectorOption<u32>> =
        Signal::global(|| SelectorOption::new("Medium", 2));

    fn app() -> Element {
        rsx! {
            Selector::<u32> { options: sizes(), value: CHOICE.cloned() }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("Medium"));

    dom.in_runtime(|| *CHOICE.write() = SelectorOption::new("Large", 3));
    dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Large"));
    assert!(!html.contains("Medium"));
}

#[test]
fn caller_classes_merge_onto_the_root() {
    fn app() -> Element {
        rsx! {
            Selector::<u32> { class: "filters-selector", options: sizes() }
        }
    }

    let html = render(app);
    assert!(html.contains("selector"));
    assert!(html.contains("filters-selector"));
}

#[test]
fn input_renders_label_and_error_modifier() {
    fn app() -> Element {
        rsx! {
            Input { label: "District", placeholder: "Search...", error: true }
        }
    }

    let html = render(app);
    assert!(html.contains("input-label"));
    assert!(html.contains("District"));
    assert!(html.contains("input-error"));
    assert!(html.contains("Search..."));
}
