use dioxus::prelude::*;

use crate::client::{
    component::{Header, ToastContainer},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        Outlet::<Route> {}
        ToastContainer {  }
    })
}
