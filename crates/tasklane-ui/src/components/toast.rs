use tasklane_core::toast::Toast;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_undo: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let Some(toast) = &props.toast else {
        return html! {};
    };

    let on_undo = props.on_undo.clone();
    let on_dismiss = props.on_dismiss.clone();

    html! {
        <div class="toast" role="status">
            <span class="toast-message">{ &toast.message }</span>
            {
                if toast.undo {
                    html! { <button class="btn link" onclick={move |_| on_undo.emit(())}>{ "Undo" }</button> }
                } else {
                    html! {}
                }
            }
            <button class="btn close" aria-label="Dismiss" onclick={move |_| on_dismiss.emit(())}>{ "×" }</button>
        </div>
    }
}
