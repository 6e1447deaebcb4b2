//! Page chrome: header, toggles, and footer.

use yew::prelude::*;

use crate::theme::ThemeCtx;

/// Top banner with the department title and the two toggles.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub sidebar_open: bool,
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="header-left">
                <SidebarToggle
                    open={props.sidebar_open}
                    on_toggle={props.on_toggle_sidebar.clone()}
                />
                <div class="header-titles">
                    <h1>{ "COMPUTER SCIENCE AND ENGINEERING" }</h1>
                    <p class="subtitle">{ "Computer Networks Lab Manual" }</p>
                </div>
            </div>
            <div class="header-right">
                <span class="status-badge">{ "Online" }</span>
                <ThemeToggle />
            </div>
        </header>
    }
}

/// Hamburger button controlling the sidebar.
#[derive(Properties, PartialEq)]
pub struct SidebarToggleProps {
    pub open: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(SidebarToggle)]
pub fn sidebar_toggle(props: &SidebarToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let title = if props.open { "Hide Sidebar" } else { "Show Sidebar" };

    html! {
        <button
            class={classes!("sidebar-toggle", props.open.then_some("open"))}
            title={title}
            onclick={onclick}
        >
            <span class="bar"></span>
            <span class="bar"></span>
            <span class="bar"></span>
        </button>
    }
}

/// Theme switch. Reads the current mode from context; the knob shows a sun
/// in light mode and a moon in dark mode.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_context::<ThemeCtx>().expect("no theme context found");
    let is_dark = theme.mode.is_dark();

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let title = if is_dark {
        "Switch to Light Mode"
    } else {
        "Switch to Dark Mode"
    };

    html! {
        <button
            class={classes!("theme-toggle", is_dark.then_some("dark"))}
            title={title}
            onclick={onclick}
        >
            <span class="theme-knob">{ if is_dark { "\u{263E}" } else { "\u{2600}" } }</span>
        </button>
    }
}

/// Footer with resource links, the copyright line, and the build stamp.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-row">
                <span class="footer-brand">
                    <strong>{ "Computer Networks Lab" }</strong>
                    { " | Interactive learning platform for network simulation experiments" }
                </span>
                <span class="footer-links">
                    <a href="https://www.isi.edu/nsnam/ns/" target="_blank">{ "NS2 Documentation" }</a>
                    { " | " }
                    <a href="https://www.nsnam.org/" target="_blank">{ "NS3 Official Site" }</a>
                    { " | " }
                    <a href="https://github.com/sajidhasanapon/NS2" target="_blank">{ "GitHub Repository" }</a>
                </span>
            </div>
            <div class="footer-row">
                <span class="footer-left">
                    { format!("\u{00A9} {year} Computer Networks Lab Manual. All rights reserved.") }
                </span>
                <span class="footer-build">
                    { format!("Build: {} {}", env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </div>
        </footer>
    }
}
