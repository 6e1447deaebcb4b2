//! Content area: renders the selected experiment document.

use netlab_rs::{Catalog, CodeBlockKind, ContentView, Experiment, Step, tokenize};
use std::rc::Rc;
use yew::prelude::*;

/// One copy-button press: the acknowledgement key and the exact clipboard
/// payload.
#[derive(Clone, PartialEq)]
pub struct CopyRequest {
    pub key: String,
    pub text: String,
}

/// Scrollable document area.
#[derive(Properties, PartialEq)]
pub struct MainContentProps {
    pub catalog: Rc<Catalog>,
    pub selected: Option<u32>,
    pub copied: Option<String>,
    pub on_copy: Callback<CopyRequest>,
}

#[function_component(MainContent)]
pub fn main_content(props: &MainContentProps) -> Html {
    let container = use_node_ref();

    // Jump back to the top whenever the selection changes, so the new
    // document never starts mid-scroll.
    {
        let container = container.clone();
        use_effect_with(props.selected, move |_| {
            scroll_to_top(&container);
            || ()
        });
    }

    let body = match ContentView::resolve(&props.catalog, props.selected) {
        ContentView::Welcome => html! {
            <div class="content-placeholder">
                <h2>{ "Welcome to Computer Networks Lab Manual" }</h2>
                <p>{ "Select an experiment from the sidebar to view its details, code, and instructions." }</p>
            </div>
        },
        ContentView::ComingSoon(experiment) => html! {
            <>
                { content_heading(experiment) }
                <div class="content-placeholder">
                    <h3>{ "Coming Soon" }</h3>
                    <p>{ "This experiment is currently under development and will be available soon." }</p>
                </div>
            </>
        },
        ContentView::Full(experiment, content) => html! {
            <>
                { content_heading(experiment) }
                <div class="content-body">
                    <section class="content-section objective">
                        <h3>{ "Objective" }</h3>
                        <p>{ &content.objective }</p>
                    </section>

                    { bullet_section("Software Requirements", "requirements", &content.software_requirements) }

                    <section class="content-section steps">
                        <h3>{ "Step-by-Step Instructions" }</h3>
                        <div class="step-list">
                            { for content.steps.iter().map(|step| html! {
                                <StepCard
                                    key={step.number}
                                    step={step.clone()}
                                    copied={props.copied.clone()}
                                    on_copy={props.on_copy.clone()}
                                />
                            }) }
                        </div>
                    </section>

                    { bullet_section("Expected Output", "expected-output", &content.expected_output) }
                    { bullet_section("Key Observations", "observations", &content.key_observations) }
                </div>
            </>
        },
    };

    html! {
        <main ref={container} class="content">
            { body }
        </main>
    }
}

/// Title and description shown above the document body.
fn content_heading(experiment: &Experiment) -> Html {
    html! {
        <div class="content-heading">
            <h2>{ &experiment.title }</h2>
            <p>{ &experiment.description }</p>
        </div>
    }
}

/// A bulleted list section.
fn bullet_section(title: &'static str, class: &'static str, items: &[String]) -> Html {
    html! {
        <section class={classes!("content-section", class)}>
            <h3>{ title }</h3>
            <ul class="bullet-list">
                { for items.iter().map(|item| html! { <li>{ item }</li> }) }
            </ul>
        </section>
    }
}

/// Scroll the content container back to the top. Smooth where the browser
/// supports it; browsers without smooth scrolling jump immediately.
fn scroll_to_top(container: &NodeRef) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);

    if let Some(element) = container.cast::<web_sys::Element>() {
        element.scroll_to_with_scroll_to_options(&options);
    } else if let Some(window) = web_sys::window() {
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// One instruction step with its optional code attachments.
#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub step: Step,
    pub copied: Option<String>,
    pub on_copy: Callback<CopyRequest>,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    let step = &props.step;

    let is_copied = |kind: CodeBlockKind| {
        let key = step.copy_key(kind);
        props.copied.as_deref() == Some(key.as_str())
    };

    html! {
        <div class="step-card">
            <div class="step-number">{ step.number }</div>
            <div class="step-body">
                <h4 class="step-title">{ &step.title }</h4>
                <p class="step-text">{ &step.content }</p>

                if let Some(code) = &step.code {
                    <CodePanel
                        label="Code"
                        copy_key={step.copy_key(CodeBlockKind::Code)}
                        payload={code.clone()}
                        copied={is_copied(CodeBlockKind::Code)}
                        on_copy={props.on_copy.clone()}
                    >
                        <pre class="code-text"><code>{ code }</code></pre>
                    </CodePanel>
                }

                if let Some(script) = &step.tcl_code {
                    <CodePanel
                        label="TCL Script"
                        copy_key={step.copy_key(CodeBlockKind::Tcl)}
                        payload={script.clone()}
                        copied={is_copied(CodeBlockKind::Tcl)}
                        on_copy={props.on_copy.clone()}
                    >
                        <pre class="code-text"><code>{ tcl_html(script) }</code></pre>
                    </CodePanel>
                }

                if let Some(change) = &step.code_block {
                    <CodePanel
                        label="Code Changes"
                        copy_key={step.copy_key(CodeBlockKind::Change)}
                        payload={change.combined()}
                        copied={is_copied(CodeBlockKind::Change)}
                        on_copy={props.on_copy.clone()}
                    >
                        <p class="change-label">{ "Change from:" }</p>
                        <pre class="change-text">{ &change.from }</pre>
                        <p class="change-label">{ "To:" }</p>
                        <pre class="change-text">{ &change.to }</pre>
                    </CodePanel>
                }

                if let Some(note) = &step.note {
                    <div class="step-note">
                        <p><strong>{ "Note:" }</strong>{ " " }{ note }</p>
                    </div>
                }
            </div>
        </div>
    }
}

/// Shared chrome for the three attachment kinds: a labelled header with a
/// copy button, then the payload body.
#[derive(Properties, PartialEq)]
pub struct CodePanelProps {
    pub label: &'static str,
    pub copy_key: String,
    pub payload: String,
    pub copied: bool,
    pub on_copy: Callback<CopyRequest>,
    pub children: Html,
}

#[function_component(CodePanel)]
pub fn code_panel(props: &CodePanelProps) -> Html {
    let onclick = {
        let on_copy = props.on_copy.clone();
        let request = CopyRequest {
            key: props.copy_key.clone(),
            text: props.payload.clone(),
        };
        Callback::from(move |_: MouseEvent| on_copy.emit(request.clone()))
    };

    html! {
        <div class="code-panel">
            <div class="code-panel-header">
                <span class="code-panel-label">{ props.label }</span>
                <button
                    class={classes!("copy-button", props.copied.then_some("copied"))}
                    title="Copy code"
                    onclick={onclick}
                >
                    { if props.copied { "Copied!" } else { "Copy" } }
                </button>
            </div>
            <div class="code-panel-body">
                { props.children.clone() }
            </div>
        </div>
    }
}

/// Classified spans for a Tcl script. Unclassified slices stay plain text
/// nodes, so the rendered text equals the script exactly.
fn tcl_html(script: &str) -> Html {
    tokenize(script)
        .into_iter()
        .map(|token| {
            let text = token.text.to_string();
            match token.class {
                Some(class) => html! { <span class={class.css_class()}>{ text }</span> },
                None => html! { <>{ text }</> },
            }
        })
        .collect()
}
