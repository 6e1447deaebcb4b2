//! Experiment list sidebar.

use netlab_rs::{Catalog, Experiment};
use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;

/// Sidebar over the whole catalog. Renders nothing while closed.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub catalog: Rc<Catalog>,
    pub open: bool,
    pub selected: Option<u32>,
    pub expanded: HashSet<u32>,
    pub on_select: Callback<u32>,
    pub on_toggle_expanded: Callback<u32>,
    pub on_close: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class="sidebar-backdrop" onclick={on_backdrop_click}></div>
            <aside class="sidebar">
                <div class="sidebar-header">
                    <div class="sidebar-headings">
                        <h3>{ "Lab Experiments" }</h3>
                        <p class="sidebar-subtitle">{ "Interactive Network Simulations" }</p>
                    </div>
                    <button class="sidebar-close" title="Close sidebar" onclick={on_close_click}>
                        { "\u{00D7}" }
                    </button>
                </div>
                <ul class="experiment-list">
                    { for props.catalog.list().iter().map(|experiment| html! {
                        <SidebarItem
                            key={experiment.id}
                            experiment={experiment.clone()}
                            selected={props.selected == Some(experiment.id)}
                            expanded={props.expanded.contains(&experiment.id)}
                            on_select={props.on_select.clone()}
                            on_toggle_expanded={props.on_toggle_expanded.clone()}
                        />
                    }) }
                </ul>
            </aside>
        </>
    }
}

/// One catalog entry: numbered badge, title, and a chevron that shows the
/// description without changing the selection.
#[derive(Properties, PartialEq)]
pub struct SidebarItemProps {
    pub experiment: Experiment,
    pub selected: bool,
    pub expanded: bool,
    pub on_select: Callback<u32>,
    pub on_toggle_expanded: Callback<u32>,
}

#[function_component(SidebarItem)]
pub fn sidebar_item(props: &SidebarItemProps) -> Html {
    let id = props.experiment.id;

    let on_item_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    // The chevron must not also select the entry.
    let on_chevron_click = {
        let on_toggle_expanded = props.on_toggle_expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle_expanded.emit(id);
        })
    };

    let chevron_title = if props.expanded {
        "Hide description"
    } else {
        "Show description"
    };

    html! {
        <li class={classes!("experiment-item", props.selected.then_some("selected"))}>
            <div class="experiment-row" onclick={on_item_click}>
                <span class="experiment-badge">{ id }</span>
                <h4 class="experiment-title">{ &props.experiment.title }</h4>
                <button
                    class={classes!("expand-button", props.expanded.then_some("rotated"))}
                    title={chevron_title}
                    onclick={on_chevron_click}
                >
                    { "\u{25BE}" }
                </button>
            </div>
            if props.expanded {
                <p class="experiment-description">{ &props.experiment.description }</p>
            }
        </li>
    }
}
