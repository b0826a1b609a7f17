use dioxus::prelude::*;
use lumen_ui::components::{Input, Selector, SelectorOption, SelectorPosition};
use lumen_ui::theme::{set_theme, ThemeMode, ThemeSeed, ALL_MODES};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn size_options() -> Vec<SelectorOption<u32>> {
    vec![
        SelectorOption::new("Small", 8),
        SelectorOption::new("Medium", 16),
        SelectorOption::new("Large", 32),
    ]
}

#[component]
fn App() -> Element {
    // Controlled instance: the selection lives here and drives the theme.
    let mut theme_choice = use_signal(|| {
        let mode = ThemeMode::default();
        SelectorOption::new(mode.display_name(), mode)
    });

    let theme_options: Vec<SelectorOption<ThemeMode>> = ALL_MODES
        .iter()
        .map(|mode| SelectorOption::new(mode.display_name(), *mode))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeSeed {}

        main { class: "demo",
            h1 { "Lumen selector" }

            section { class: "demo-row",
                h2 { "Uncontrolled, clearable" }
                Selector::<u32> {
                    placeholder: "Pick a size",
                    options: size_options(),
                    clearable: true,
                    on_change: move |picked: Option<SelectorOption<u32>>| match &picked {
                        Some(choice) => tracing::info!(label = %choice.label, "size selected"),
                        None => tracing::info!("size cleared"),
                    },
                }
            }

            section { class: "demo-row",
                h2 { "With a default, anchored from the bottom" }
                Selector::<u32> {
                    options: size_options(),
                    default_option: SelectorOption::new("Medium", 16),
                    position: SelectorPosition::FromBottom,
                }
            }

            section { class: "demo-row",
                h2 { "Disabled and error states" }
                Selector::<u32> { options: size_options(), disabled: true }
                Selector::<u32> {
                    placeholder: "Required",
                    options: size_options(),
                    error: true,
                }
            }

            section { class: "demo-row",
                h2 { "Controlled: theme" }
                Selector::<ThemeMode> {
                    options: theme_options,
                    value: theme_choice(),
                    on_change: move |picked: Option<SelectorOption<ThemeMode>>| {
                        if let Some(choice) = picked {
                            tracing::info!(theme = choice.value.as_str(), "theme changed");
                            set_theme(choice.value);
                            theme_choice.set(choice);
                        }
                    },
                }
            }

            section { class: "demo-row",
                h2 { "Shared input styling" }
                Input { label: "Search", placeholder: "Type to filter..." }
            }
        }
    }
}
