use yew::prelude::*;

pub(crate) struct Writer {
    input_ref: NodeRef,
}

pub(crate) enum Msg {
    Submit,
}

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) on_submit: Callback<String>,
}

impl Component for Writer {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input_ref: Default::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                if let Some(input) = self.input_ref.cast::<web_sys::HtmlInputElement>() {
                    ctx.props().on_submit.emit(input.value());
                    input.set_value("");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div style="display: flex; gap: 10px;">
                <input
                    style="flex: 1; padding: 10px;"
                    placeholder="New memo..."
                    ref={self.input_ref.clone()}
                />
                <button
                    style="padding: 10px 20px;"
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { "Save" }
                </button>
            </div>
        }
    }
}
