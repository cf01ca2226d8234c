use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct BulkBarProps {
    pub count: usize,
    pub on_delete: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(BulkBar)]
pub fn bulk_bar(props: &BulkBarProps) -> Html {
    let active = props.count > 0;
    let on_delete = props.on_delete.clone();
    let on_clear = props.on_clear.clone();

    html! {
        <div class={classes!("bulk-bar", active.then_some("active"))}>
            <span class="bulk-count">{ format!("{} selected", props.count) }</span>
            <button class="btn danger" disabled={!active} onclick={move |_| on_delete.emit(())}>
                { "Delete selected" }
            </button>
            <button class="btn" disabled={!active} onclick={move |_| on_clear.emit(())}>
                { "Clear" }
            </button>
        </div>
    }
}
