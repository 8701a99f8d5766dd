use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use crate::booking::modal::{CloseTicket, ModalState, ModalView, ResetTicket};
use crate::booking::validation::BookingRequest;
use crate::components::booking_form::BookingForm;
use crate::components::faq::Faq;
use crate::components::nav::Nav;
use crate::config::{AUTO_CLOSE_DELAY_MS, MODAL_RESET_DELAY_MS};
use crate::dom::{self, EventListener};
use crate::scroll::anchor::AnchorScroller;
use crate::scroll::reveal::RevealObserver;

pub enum HomeMsg {
    OpenBooking,
    CloseBooking,
    Backdrop(MouseEvent),
    KeyDown(String),
    Submitted(BookingRequest),
    Reset(ResetTicket),
    AutoClose(CloseTicket),
}

pub struct Home {
    modal: ModalState,
    modal_ref: NodeRef,
    form_epoch: u64,
    pending_reset: Option<Timeout>,
    pending_close: Option<Timeout>,
    keydown: Option<EventListener>,
    anchors: Option<AnchorScroller>,
    reveal: Option<RevealObserver>,
}

impl Component for Home {
    type Message = HomeMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            modal: ModalState::default(),
            modal_ref: NodeRef::default(),
            form_epoch: 0,
            pending_reset: None,
            pending_close: None,
            keydown: None,
            anchors: None,
            reveal: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HomeMsg::OpenBooking => {
                self.pending_reset = None;
                self.pending_close = None;
                if self.modal.open() {
                    self.form_epoch += 1;
                }
                dom::set_scroll_locked(self.modal.scroll_locked());
                debug!("Booking modal opened");
                true
            }
            HomeMsg::CloseBooking => {
                self.close(ctx);
                true
            }
            HomeMsg::Backdrop(e) => {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                if target.is_some() && target == self.modal_ref.get() {
                    self.close(ctx);
                    return true;
                }
                false
            }
            HomeMsg::KeyDown(key) => {
                if key == "Escape" && self.modal.is_visible() {
                    self.close(ctx);
                    return true;
                }
                false
            }
            HomeMsg::Submitted(request) => {
                debug!("Booking request for {} accepted", request.service);
                let ticket = self.modal.show_success();
                let link = ctx.link().clone();
                self.pending_close = Some(Timeout::new(AUTO_CLOSE_DELAY_MS, move || {
                    link.send_message(HomeMsg::AutoClose(ticket));
                }));
                true
            }
            HomeMsg::Reset(ticket) => {
                self.pending_reset = None;
                if self.modal.complete_reset(ticket) {
                    self.form_epoch += 1;
                    return true;
                }
                false
            }
            HomeMsg::AutoClose(ticket) => {
                self.pending_close = None;
                match self.modal.auto_close(ticket) {
                    Some(reset) => {
                        self.after_close(ctx, reset);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            warn!("No document available, page enhancements disabled");
            return;
        };

        let link = ctx.link().clone();
        match EventListener::new(&document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                link.send_message(HomeMsg::KeyDown(event.key()));
            }
        }) {
            Ok(listener) => self.keydown = Some(listener),
            Err(e) => warn!("Escape-to-close unavailable: {:?}", e),
        }

        match AnchorScroller::install(&document) {
            Ok(scroller) => self.anchors = Some(scroller),
            Err(e) => warn!("Smooth scrolling unavailable: {:?}", e),
        }

        match RevealObserver::install(&document) {
            Ok(observer) => self.reveal = Some(observer),
            Err(e) => warn!("Fade-in animations unavailable: {:?}", e),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        dom::set_scroll_locked(false);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.link().callback(|_: MouseEvent| HomeMsg::OpenBooking);

        html! {
            <div class="home-page">
                <Nav on_book={open.clone()} />

                <section id="home" class="hero">
                    <div class="container hero-content">
                        <h1 class="hero-title">{"Reliable Home Repairs, Done Right the First Time"}</h1>
                        <p class="hero-subtitle">
                            {"Licensed plumbers, electricians and handymen at your door. Upfront pricing, guaranteed work."}
                        </p>
                        <div class="hero-actions">
                            <button id="bookNowHero" class="btn btn-primary btn-large" onclick={open.clone()}>
                                {"Book a Service"}
                            </button>
                            <a href="#services" class="btn btn-secondary btn-large">{"Our Services"}</a>
                        </div>
                    </div>
                </section>

                <section id="services" class="services">
                    <div class="container">
                        <h2 class="section-title">{"Our Services"}</h2>
                        <div class="services-grid">
                            { for SERVICE_CARDS.iter().map(|(title, blurb)| html! {
                                <div class="card-service">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }) }
                            <div class="card-service card-service-other">
                                <h3>{"Something Else?"}</h3>
                                <p>{"Tell us what needs fixing and we will send the right person."}</p>
                                <button id="bookOtherService" class="btn btn-outline" onclick={open}>
                                    {"Request Other Service"}
                                </button>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="about" class="about">
                    <div class="container">
                        <h2 class="section-title">{"Why Homeowners Choose Us"}</h2>
                        <div class="about-grid">
                            { for ABOUT_CARDS.iter().map(|(title, blurb)| html! {
                                <div class="card">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="testimonials" class="testimonials">
                    <div class="container">
                        <h2 class="section-title">{"What Our Customers Say"}</h2>
                        <div class="testimonials-grid">
                            { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                                <div class="testimonial">
                                    <p class="testimonial-text">{*quote}</p>
                                    <p class="testimonial-author">{*author}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <Faq />

                <section id="contact" class="contact">
                    <div class="container">
                        <h2 class="section-title">{"Get in Touch"}</h2>
                        <p>{"Call "}<a href="tel:5551234567">{"(555) 123-4567"}</a>{" or email "}
                           <a href="mailto:hello@homefixpro.com">{"hello@homefixpro.com"}</a></p>
                        <p>{"Mon-Sat 7am-7pm, emergency line open 24/7."}</p>
                    </div>
                </section>

                <footer class="footer">
                    <div class="container">
                        <p>{"© HomeFix Pro. All rights reserved."}</p>
                        <a href="#home">{"Back to top"}</a>
                    </div>
                </footer>

                { self.render_modal(ctx) }
                <style>{STYLES}</style>
            </div>
        }
    }
}

impl Home {
    fn close(&mut self, ctx: &Context<Self>) {
        self.pending_close = None;
        let ticket = self.modal.close();
        self.after_close(ctx, ticket);
    }

    /// Releases the scroll lock now and wipes the form once the close transition is over.
    fn after_close(&mut self, ctx: &Context<Self>, ticket: ResetTicket) {
        dom::set_scroll_locked(self.modal.scroll_locked());
        debug!("Booking modal closed");
        let link = ctx.link().clone();
        self.pending_reset = Some(Timeout::new(MODAL_RESET_DELAY_MS, move || {
            link.send_message(HomeMsg::Reset(ticket));
        }));
    }

    fn render_modal(&self, ctx: &Context<Self>) -> Html {
        let success = self.modal.view() == ModalView::Success;
        let on_submitted = ctx.link().callback(HomeMsg::Submitted);

        html! {
            <div
                id="bookingModal"
                ref={self.modal_ref.clone()}
                class={classes!("modal", self.modal.is_visible().then(|| "show"))}
                onclick={ctx.link().callback(HomeMsg::Backdrop)}
            >
                <div class="modal-content">
                    <button id="modalClose" class="modal-close" onclick={ctx.link().callback(|_: MouseEvent| HomeMsg::CloseBooking)}>
                        {"×"}
                    </button>
                    <h2 class="modal-title">{"Book Your Service"}</h2>
                    <BookingForm hidden={success} reset_epoch={self.form_epoch} {on_submitted} />
                    <div
                        id="successMessage"
                        class="success-message"
                        style={if success { "display: block;" } else { "display: none;" }}
                    >
                        <h3>{"Booking Request Received!"}</h3>
                        <p>{"Thanks! We'll call you within one business hour to confirm your appointment."}</p>
                    </div>
                </div>
            </div>
        }
    }
}

const SERVICE_CARDS: &[(&str, &str)] = &[
    ("Plumbing", "Leaks, clogs, water heaters and fixture installs."),
    ("Electrical", "Outlets, lighting, panels and troubleshooting."),
    ("Carpentry", "Doors, trim, decks and custom shelving."),
    ("Painting", "Interior and exterior, prep to clean-up."),
    ("Heating & Cooling", "Furnace and AC tune-ups, repairs and replacements."),
];

const ABOUT_CARDS: &[(&str, &str)] = &[
    ("Licensed & Insured", "Every technician is vetted, certified and covered."),
    ("Upfront Pricing", "A flat quote before we start. No surprises."),
    ("12-Month Guarantee", "If our fix fails, we come back for free."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("They fixed a burst pipe at 11pm on a Sunday. Lifesavers.", "Maria G."),
    ("On time, tidy and the price matched the quote exactly.", "Tom R."),
    ("Rewired our kitchen in a day. Highly recommend.", "Priya S."),
];

const STYLES: &str = r#"
    .nav-menu { display: flex; gap: 1.5rem; list-style: none; }
    .nav-link.active { color: #2563eb; font-weight: 600; }
    .nav-toggle { display: none; }
    @media (max-width: 768px) {
        .nav-toggle { display: block; }
        .nav-menu { display: none; flex-direction: column; }
        .nav-menu.active { display: flex; }
    }
    .modal {
        display: none;
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        align-items: center;
        justify-content: center;
        z-index: 1000;
    }
    .modal.show { display: flex; }
    .modal-content {
        background: #fff;
        border-radius: 12px;
        padding: 2rem;
        width: 100%;
        max-width: 520px;
        position: relative;
    }
    .form-input.error, .form-select.error { border-color: #dc2626; }
    .form-error { display: none; color: #dc2626; font-size: 0.85rem; }
    .form-error.show { display: block; }
    .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; }
    .faq-item.active .faq-answer { max-height: 500px; }
"#;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement, HtmlSelectElement};
    use yew::AppHandle;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> (AppHandle<Home>, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<Home>::with_root(root.clone()).render();
        (app, root)
    }

    fn find<T: JsCast>(root: &Element, selector: &str) -> T {
        root.query_selector(selector).unwrap().unwrap().dyn_into::<T>().unwrap()
    }

    fn body_overflow() -> String {
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
        body.style().get_property_value("overflow").unwrap()
    }

    fn modal_shown(root: &Element) -> bool {
        root.query_selector("#bookingModal.show").unwrap().is_some()
    }

    async fn settle(ms: u32) {
        TimeoutFuture::new(ms).await;
    }

    #[wasm_bindgen_test]
    async fn every_trigger_opens_the_same_locked_modal() {
        let (app, root) = mount();
        settle(10).await;

        for trigger in ["#bookNowHeader", "#bookNowHero", "#bookOtherService"] {
            assert!(!modal_shown(&root), "{} started hidden", trigger);
            find::<HtmlElement>(&root, trigger).click();
            settle(10).await;
            assert!(modal_shown(&root), "{} shows the modal", trigger);
            assert_eq!(body_overflow(), "hidden", "{} locks scrolling", trigger);

            find::<HtmlElement>(&root, "#modalClose").click();
            settle(10).await;
            assert!(!modal_shown(&root));
            assert_eq!(body_overflow(), "");
        }

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn closing_restores_an_empty_error_free_form() {
        let (app, root) = mount();
        settle(10).await;

        find::<HtmlElement>(&root, "#bookNowHero").click();
        settle(10).await;

        let service: HtmlSelectElement = find(&root, "#service");
        service.set_value("plumbing");
        let init = EventInit::new();
        init.set_bubbles(true);
        service
            .dispatch_event(&Event::new_with_event_init_dict("change", &init).unwrap())
            .unwrap();
        settle(10).await;

        find::<HtmlElement>(&root, "#bookingForm button[type='submit']").click();
        settle(10).await;
        assert!(root.query_selector("#nameError.show").unwrap().is_some());
        assert!(root.query_selector("#service.error").unwrap().is_none());

        find::<HtmlElement>(&root, "#modalClose").click();
        settle(MODAL_RESET_DELAY_MS + 100).await;

        assert_eq!(service.value(), "");
        assert!(root.query_selector(".form-error.show").unwrap().is_none());
        assert!(root.query_selector(".error").unwrap().is_none());
        let name: web_sys::HtmlInputElement = find(&root, "#name");
        assert_eq!(name.value(), "");

        app.destroy();
        root.remove();
    }
}
