use dioxus::prelude::*;

use crate::client::component::{ErrorPage, Header};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Header {  }
        ErrorPage { status: 404, message: format!("Nothing lives at /{}", path) }
    }
}
