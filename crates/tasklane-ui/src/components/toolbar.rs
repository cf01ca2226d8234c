use tasklane_core::wire::{SortBy, SortOrder, TasksListArgs};
use web_sys::HtmlSelectElement;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub list_args: TasksListArgs,
    pub refreshing: bool,
    pub on_sort_by: Callback<SortBy>,
    pub on_order: Callback<SortOrder>,
    pub on_refresh: Callback<()>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let on_sort_by = {
        let on_sort_by = props.on_sort_by.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<SortBy>() {
                Ok(sort_by) => on_sort_by.emit(sort_by),
                Err(err) => tracing::warn!(error = %err, "ignoring sort key"),
            }
        })
    };

    let on_order = {
        let on_order = props.on_order.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<SortOrder>() {
                Ok(order) => on_order.emit(order),
                Err(err) => tracing::warn!(error = %err, "ignoring sort order"),
            }
        })
    };

    let on_refresh = props.on_refresh.clone();
    let current = props.list_args;

    html! {
        <div class="toolbar">
            <label class="field inline">
                <span>{ "Sort by" }</span>
                <select onchange={on_sort_by}>
                    {
                        for SortBy::all().into_iter().map(|sort_by| html! {
                            <option value={sort_by.as_key()} selected={sort_by == current.sort_by}>
                                { sort_by.label() }
                            </option>
                        })
                    }
                </select>
            </label>
            <label class="field inline">
                <span>{ "Order" }</span>
                <select onchange={on_order}>
                    {
                        for [SortOrder::Asc, SortOrder::Desc].into_iter().map(|order| html! {
                            <option value={order.as_key()} selected={order == current.order}>
                                { order.label() }
                            </option>
                        })
                    }
                </select>
            </label>
            <button
                class={if props.refreshing { "btn refreshing" } else { "btn" }}
                disabled={props.refreshing}
                onclick={move |_| on_refresh.emit(())}
            >
                { if props.refreshing { "Refreshing…" } else { "Refresh" } }
            </button>
        </div>
    }
}
