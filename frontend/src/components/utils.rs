use super::super::Model;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// Error notice plus, when the server gave one, a remediation hint.
pub fn render_error_message(model: &Model) -> Html {
    let Some(error) = &model.error else {
        return html! {};
    };

    html! {
        <>
            <div class="error-message">
                <p>{ format!("⚠️ {}", error.error) }</p>
            </div>
            {
                if let Some(hint) = &error.hint {
                    html! { <div class="info-message"><p>{ hint }</p></div> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
