use chrono::{Local, NaiveDate};
use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::form::FormState;
use crate::booking::validation::{earliest_bookable, BookingRequest, Field, DATE_FORMAT, SERVICES};

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    /// Form is replaced by the success view while this is set.
    pub hidden: bool,
    /// Bumped by the modal whenever the form must return to its empty state.
    pub reset_epoch: u64,
    pub on_submitted: Callback<BookingRequest>,
}

pub enum BookingFormMsg {
    Edit(Field, String),
    Submit,
}

pub struct BookingForm {
    state: FormState,
    service_ref: NodeRef,
}

impl Component for BookingForm {
    type Message = BookingFormMsg;
    type Properties = BookingFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::default(),
            service_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().reset_epoch != old_props.reset_epoch {
            self.state.reset();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingFormMsg::Edit(field, value) => {
                self.state.edit(field, value);
                true
            }
            BookingFormMsg::Submit => {
                let Some(request) = self.state.submit(today()) else {
                    let failed: Vec<&str> = self.state.report().failed_fields().map(Field::id).collect();
                    debug!("Booking form rejected: {:?}", failed);
                    return true;
                };

                match serde_wasm_bindgen::to_value(&request) {
                    Ok(object) => gloo_console::log!("Form submitted:", object),
                    Err(e) => gloo_console::log!("Form submitted:", e.to_string()),
                }
                ctx.props().on_submitted.emit(request);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Once an option was picked, the `selected` attribute no longer drives
        // what the select shows, so the current value is written directly.
        if let Some(select) = self.service_ref.cast::<HtmlSelectElement>() {
            let service = &self.state.values().service;
            if select.value() != *service {
                select.set_value(service);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            BookingFormMsg::Submit
        });
        let min_date = earliest_bookable(today()).format(DATE_FORMAT).to_string();
        let display = if ctx.props().hidden { "display: none;" } else { "display: block;" };

        html! {
            <form id="bookingForm" class="booking-form" style={display} novalidate={true} {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    { self.text_input(ctx, Field::Name, "text", "John Smith") }
                    { self.error_message(Field::Name) }
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone Number"}</label>
                    { self.text_input(ctx, Field::Phone, "tel", "(555) 123-4567") }
                    { self.error_message(Field::Phone) }
                </div>
                <div class="form-group">
                    <label for="email">{"Email Address"}</label>
                    { self.text_input(ctx, Field::Email, "email", "john@example.com") }
                    { self.error_message(Field::Email) }
                </div>
                <div class="form-group">
                    <label for="service">{"Service Needed"}</label>
                    <select
                        id="service"
                        ref={self.service_ref.clone()}
                        class={classes!("form-select", self.has_error(Field::Service).then(|| "error"))}
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            BookingFormMsg::Edit(Field::Service, select.value())
                        })}
                    >
                        <option value="" selected={self.state.values().service.is_empty()}>{"Select a service"}</option>
                        { for SERVICES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={self.state.values().service == *value}>{*label}</option>
                        }) }
                    </select>
                    { self.error_message(Field::Service) }
                </div>
                <div class="form-group">
                    <label for="date">{"Preferred Date"}</label>
                    <input
                        type="date"
                        id="date"
                        min={min_date}
                        class={classes!("form-input", self.has_error(Field::Date).then(|| "error"))}
                        value={self.state.values().date.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            BookingFormMsg::Edit(Field::Date, input.value())
                        })}
                    />
                    { self.error_message(Field::Date) }
                </div>
                <button type="submit" class="btn btn-primary btn-block">{"Request Booking"}</button>
            </form>
        }
    }
}

impl BookingForm {
    fn has_error(&self, field: Field) -> bool {
        self.state.error_for(field).is_some()
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, kind: &'static str, placeholder: &'static str) -> Html {
        html! {
            <input
                type={kind}
                id={field.id()}
                placeholder={placeholder}
                class={classes!("form-input", self.has_error(field).then(|| "error"))}
                value={self.state.values().value(field).to_string()}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    BookingFormMsg::Edit(field, input.value())
                })}
            />
        }
    }

    fn error_message(&self, field: Field) -> Html {
        let error = self.state.error_for(field);
        html! {
            <span id={field.error_id()} class={classes!("form-error", error.is_some().then(|| "show"))}>
                { error.map(|e| e.to_string()).unwrap_or_default() }
            </span>
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
