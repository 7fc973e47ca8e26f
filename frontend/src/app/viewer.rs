use yew::prelude::*;

pub(crate) struct Viewer;

#[derive(PartialEq, Properties)]
pub(crate) struct Props {
    pub(crate) value: String,
}

impl Component for Viewer {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div style="padding: 10px; border-bottom: 1px solid #eee;">
                { &ctx.props().value }
            </div>
        }
    }
}
