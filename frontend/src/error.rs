use wasm_bindgen::{JsCast, JsValue};

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("no global window object")]
    NoWindow,
    #[error("document has no body element")]
    NoBody,
    #[error("local storage is not available")]
    NoStorage,
    #[error("javascript error {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        // prefer the message of a thrown Error (e.g. a QuotaExceededError or SecurityError)
        match value.dyn_ref::<js_sys::Error>() {
            Some(error) => Error::Js(String::from(error.message())),
            None => Error::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value))),
        }
    }
}
