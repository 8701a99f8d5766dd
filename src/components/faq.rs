use web_sys::MouseEvent;
use yew::prelude::*;

/// Open state of an accordion: at most one item is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Clicking the open item closes it; clicking another one opens it and
    /// closes whatever was open before.
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

const QUESTIONS: &[(&str, &str)] = &[
    (
        "What areas do you serve?",
        "We cover the city and surrounding suburbs within a 30 mile radius. Call us if you are just outside that range.",
    ),
    (
        "Are your technicians licensed and insured?",
        "Yes. Every technician is fully licensed, insured and background-checked before their first job.",
    ),
    (
        "Do you offer emergency repairs?",
        "We keep a technician on call around the clock for burst pipes, electrical faults and other urgent problems.",
    ),
    (
        "How is pricing calculated?",
        "You get a flat quote before any work starts. No hidden fees, and the quote does not change once accepted.",
    ),
    (
        "Is your work guaranteed?",
        "All labour is guaranteed for 12 months. If something we fixed fails, we come back and fix it free of charge.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |_| accordion.set(accordion.toggle(index)))
                        };
                        html! {
                            <FaqItem question={question.to_string()} open={accordion.is_open(index)} {on_toggle}>
                                <p>{*answer}</p>
                            </FaqItem>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
