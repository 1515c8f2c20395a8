use header::{Header, HeaderProps};

mod class_list;
mod dark_mode;
mod error;
mod header;
mod preference;
mod storage;
#[cfg(test)]
mod testing;

fn main() {
    yew::Renderer::<Header>::with_props(HeaderProps {
        title: "Explorer".into(),
    })
    .render();
}
