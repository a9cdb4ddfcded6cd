use yew::prelude::*;

use crate::config::COUNTER_DURATION_MS;
use crate::content::Stat;
use crate::interaction::hooks::use_counter;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub stat: Stat,
    /// Gate: counting starts once this turns true.
    pub start: bool,
    pub class: &'static str,
    pub number_class: &'static str,
    pub label_class: &'static str,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let stat = &props.stat;
    let count = use_counter(stat.value, COUNTER_DURATION_MS, props.start && stat.animated);
    let shown = if stat.animated { count } else { stat.value };

    html! {
        <div class={props.class}>
            <div class={props.number_class}>{ format!("{}{}", shown, stat.suffix) }</div>
            <div class={props.label_class}>{ &stat.label }</div>
        </div>
    }
}
