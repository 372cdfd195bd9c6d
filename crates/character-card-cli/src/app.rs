use character_card_core::{CardOptions, Character};
use character_card_ui::{CharacterCard, CharacterCardStyles};
use dioxus::prelude::*;

/// Properties for the preview root
#[derive(Clone, PartialEq, Props)]
pub struct PreviewProps {
    /// Record shown in the card
    pub character: Character,
    /// Initial display options
    pub options: CardOptions,
}

/// Root preview component.
///
/// Owns the favorite state the card itself does not keep, and mounts the
/// card stylesheet.
#[component]
pub fn Preview(props: PreviewProps) -> Element {
    let initial_favorite = props.options.is_favorite;
    let mut is_favorite = use_signal(move || initial_favorite);
    let character_id = props.character.id;

    rsx! {
        CharacterCardStyles {}
        main { class: "preview",
            CharacterCard {
                character_data: Some(props.character.clone()),
                is_favorite: is_favorite(),
                bg_color: props.options.bg_color.clone(),
                max_width: props.options.max_width.clone(),
                on_toggle_favorite: move |_| {
                    is_favorite.toggle();
                    tracing::info!("Character {} favorite: {}", character_id, is_favorite());
                },
            }
        }
    }
}

/// Open the preview in a native window.
#[cfg(feature = "desktop")]
pub fn launch_desktop(character: Character, options: CardOptions) {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let title = format!("Character Card - {}", character.name);
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(480.0, 260.0))
            .with_resizable(true),
    );

    tracing::info!("Opening preview window for character {}", character.id);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(PreviewProps { character, options })
        .launch(DesktopRoot);
}

/// Desktop launches take a plain component, so the props travel as context.
#[cfg(feature = "desktop")]
#[component]
fn DesktopRoot() -> Element {
    let props = use_context::<PreviewProps>();
    rsx! {
        Preview { character: props.character, options: props.options }
    }
}
