use dioxus::prelude::*;
use dioxus_sdk_window::theme::use_system_theme;

use super::alert_dialog::AlertDialog;
use super::home_screen::HomeScreen;
use super::login_screen::LoginScreen;
use super::signup_screen::SignupScreen;
use crate::config::CONFIG;
use crate::navigation::Route;
use crate::state::AppState;
use crate::theme::css_class;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component: owns the application state and gates the screens.
#[component]
pub fn App() -> Element {
    // Session, navigation and alerts live exactly as long as this component
    let state = use_context_provider(|| AppState::new(CONFIG.read().theme.default_theme));

    let system_theme = use_system_theme();
    let theme_class = use_memo(move || css_class(state.theme.resolve(system_theme().ok())));

    // Blank splash before the first screen
    let mut is_loading = use_signal(|| true);
    use_hook(|| {
        let delay = CONFIG.read().startup.splash_delay();
        spawn(async move {
            tokio::time::sleep(delay).await;
            is_loading.set(false);
        });
    });

    let theme_class = theme_class();

    if is_loading() {
        return rsx! {
            document::Stylesheet { href: MAIN_CSS }
            div { class: "app {theme_class}" }
        };
    }

    let route = state.visible_route();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        div {
            class: "app {theme_class}",

            match route {
                Route::Login => rsx! { LoginScreen {} },
                Route::Signup => rsx! { SignupScreen {} },
                Route::Home => rsx! { HomeScreen {} },
            }

            AlertDialog {}
        }
    }
}
