use web_sys::HtmlInputElement;
use yew::{Callback, Children, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CalendarSidebarProps {
    pub picked: Option<String>,
    pub filter_enabled: bool,
    pub on_pick: Callback<Option<String>>,
    pub on_toggle_filter: Callback<bool>,
    pub on_apply_to_form: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CalendarSidebar)]
pub fn calendar_sidebar(props: &CalendarSidebarProps) -> Html {
    let on_pick = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            on_pick.emit((!value.trim().is_empty()).then_some(value));
        })
    };
    let on_toggle_filter = {
        let on_toggle_filter = props.on_toggle_filter.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle_filter.emit(input.checked());
        })
    };
    let on_apply_to_form = props.on_apply_to_form.clone();

    html! {
        <aside class="panel sidebar">
            <div class="header">{ "Calendar" }</div>
            <input
                class="field"
                type="date"
                value={props.picked.clone().unwrap_or_default()}
                onchange={on_pick}
            />
            <label class="check">
                <input type="checkbox" checked={props.filter_enabled} onchange={on_toggle_filter} />
                <span>{ "Filter by date" }</span>
            </label>
            <button
                class="btn"
                disabled={props.picked.is_none()}
                onclick={move |_| on_apply_to_form.emit(())}
            >
                { "Apply date to form" }
            </button>
            { props.children.clone() }
        </aside>
    }
}
