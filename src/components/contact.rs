use gloo_net::http::Request;
use log::{error, info};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::alerts::{Alert, AlertChannel};
use crate::config;
use crate::course::binding::Anchor;
use crate::schedule::Scheduler;

pub const SENT_MESSAGE: &str = "Thank you! We'll contact you soon.";
pub const FAILED_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("could not build form data")]
    FormData,
    #[error("could not reach contact endpoint: {0}")]
    Network(String),
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
}

pub async fn submit_contact(endpoint: &str, form: FormData) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .body(form)
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

/// Shows the outcome of a submission in the alert slot.
pub fn report_submission<S: Scheduler>(alerts: &mut AlertChannel<S>, result: &Result<(), SubmitError>) {
    match result {
        Ok(()) => alerts.success(SENT_MESSAGE),
        Err(_) => alerts.error(FAILED_MESSAGE),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub alert: Option<Alert>,
    pub on_result: Callback<Result<(), SubmitError>>,
}

pub enum ContactFormMsg {
    Submit,
    Finished(Result<(), SubmitError>),
}

pub struct ContactForm {
    form: NodeRef,
    sending: bool,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: NodeRef::default(),
            sending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Submit => {
                if self.sending {
                    return false;
                }
                let data = self
                    .form
                    .cast::<HtmlFormElement>()
                    .and_then(|form| FormData::new_with_form(&form).ok());
                self.sending = true;
                ctx.link().send_future(async move {
                    let result = match data {
                        Some(data) => submit_contact(&config::contact_endpoint(), data).await,
                        None => Err(SubmitError::FormData),
                    };
                    ContactFormMsg::Finished(result)
                });
                true
            }
            ContactFormMsg::Finished(result) => {
                self.sending = false;
                match &result {
                    Ok(()) => {
                        info!("Contact form sent");
                        // only a successful send clears what the user typed
                        if let Some(form) = self.form.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                    }
                    Err(e) => error!("Form submission error: {}", e),
                }
                ctx.props().on_result.emit(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        html! {
            <form class="contact-form" ref={self.form.clone()} {onsubmit}>
                <div id={Anchor::FormAlerts.id()}>
                    {
                        if let Some(alert) = &ctx.props().alert {
                            html! {
                                <div class={alert.kind.class()}>
                                    <i class={alert.kind.icon()}></i>
                                    {" "}{&alert.message}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <input type="text" name="name" placeholder="Your Name" required={true} />
                <input type="tel" name="phone" placeholder="Phone Number" required={true} />
                <input type="email" name="email" placeholder="Email Address" />
                <textarea name="message" rows="4" placeholder="Tell us about yourself" />
                <button type="submit" class="submit-button" disabled={self.sending}>
                    {
                        if self.sending {
                            html! { <><i class="fas fa-spinner fa-spin"></i>{" Sending..."}</> }
                        } else {
                            html! { <><i class="fas fa-paper-plane"></i>{" Send Message"}</> }
                        }
                    }
                </button>
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertKind;
    use crate::schedule::testing::ManualClock;

    #[test]
    fn successful_submission_shows_the_thank_you_alert() {
        let clock = ManualClock::new();
        let mut alerts = AlertChannel::new(clock.clone());
        report_submission(&mut alerts, &Ok(()));

        let alert = alerts.current().unwrap();
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.message, "Thank you! We'll contact you soon.");
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn rejected_submission_shows_the_error_alert() {
        let clock = ManualClock::new();
        let mut alerts = AlertChannel::new(clock.clone());
        report_submission(&mut alerts, &Err(SubmitError::Status(500)));

        let alert = alerts.current().unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "Sorry, there was an error sending your message. Please try again.");

        for _ in 0..clock.advance(u64::from(config::ALERT_DISPLAY_MS)) {
            alerts.expire();
        }
        assert!(alerts.current().is_none());
    }

    #[test]
    fn unreachable_endpoint_is_reported_like_a_rejection() {
        let clock = ManualClock::new();
        let mut alerts = AlertChannel::new(clock.clone());
        report_submission(&mut alerts, &Ok(()));
        report_submission(&mut alerts, &Err(SubmitError::Network("offline".to_string())));

        assert_eq!(alerts.current().map(|a| a.kind), Some(AlertKind::Error));
        assert_eq!(clock.pending(), 1);
    }
}
