use wasm_bindgen_futures::spawn_local;
use yew::{prelude::*, virtual_dom::AttrValue};

use crate::dark_mode;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
}

/// Page header hosting the dark mode toggle. Creating it applies the stored
/// preference once.
pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        spawn_local(async {
            dark_mode::init();
        });

        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
          <header>
            <h1>{ctx.props().title.to_string()}</h1>
            <button class="theme-toggle" title="Toggle dark mode" onclick={Callback::from(|_| {
                dark_mode::toggle();
            })} />
          </header>
        }
    }
}
