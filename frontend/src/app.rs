mod fetch;
mod viewer;
mod writer;

use yew::prelude::*;

pub(crate) struct App {
    memos: Vec<common::Memo>,
    error: Option<String>,
}

pub(crate) enum Msg {
    CreateMemo(String),
    OnMemoCreated(common::Memo),
    OnMemosFetched(Vec<common::Memo>),
    OnError(String),
}

/// Blank or whitespace-only input is not sent. The text is posted as typed.
fn new_memo_payload(text: String) -> Option<common::NewMemoPayload> {
    if text.trim().is_empty() {
        None
    } else {
        Some(common::NewMemoPayload { body: text })
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        fetch::get_memos(ctx);
        Self {
            memos: vec![],
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CreateMemo(text) => {
                if let Some(payload) = new_memo_payload(text) {
                    fetch::create_memo(ctx, payload);
                }
                false
            }
            Msg::OnMemoCreated(_) => {
                fetch::get_memos(ctx);
                false
            }
            Msg::OnMemosFetched(memos) => {
                self.memos = memos;
                self.error = None;
                true
            }
            Msg::OnError(error) => {
                self.error = Some(error);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div style="max-width: 500px; margin: 40px auto; font-family: sans-serif;">
                <h1>{ "Memo App" }</h1>
                <writer::Writer on_submit={link.callback(Msg::CreateMemo)}/>
                { for self.error.iter().map(|error| {
                    html!(
                        <div style="color: red;">{ error }</div>
                    )
                })}
                { for self.memos.iter().map(|memo| {
                    html!(
                        <viewer::Viewer key={memo.id.to_string()} value={memo.body.clone()}/>
                    )
                })}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_posted() {
        assert!(new_memo_payload(String::new()).is_none());
        assert!(new_memo_payload("   \n\t".to_string()).is_none());
    }

    #[test]
    fn text_is_posted_as_typed() {
        assert_eq!(
            new_memo_payload("  buy milk ".to_string()),
            Some(common::NewMemoPayload {
                body: "  buy milk ".to_string()
            })
        );
    }
}
