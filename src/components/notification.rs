use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::ACKNOWLEDGMENT_DISMISS_MS;

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Toast shown after the contact form is sent. Dismisses itself after a
/// delay or when clicked.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(ACKNOWLEDGMENT_DISMISS_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="notice" role="status" onclick={onclick}>
            <style>
                {r#"
                .notice {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    max-width: 90vw;
                    padding: 1rem 1.5rem;
                    background: var(--bg-card);
                    border: 1px solid var(--accent-primary);
                    border-radius: 12px;
                    color: var(--text-primary);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    animation: noticeIn 0.4s ease-out forwards;
                    cursor: pointer;
                    z-index: 1000;
                }
                @keyframes noticeIn {
                    from { transform: translate(-50%, 100%); opacity: 0; }
                    to { transform: translate(-50%, 0); opacity: 1; }
                }
                "#}
            </style>
            { &props.message }
        </div>
    }
}
