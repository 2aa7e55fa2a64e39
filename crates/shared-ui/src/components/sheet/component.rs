use dioxus::prelude::*;

/// Which edge of the screen the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    #[default]
    Left,
    Right,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Left => "left",
            SheetSide::Right => "right",
        }
    }
}

/// Sliding drawer over the page. Used for the dashboard side panel on
/// narrow viewports.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sheet-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            "aria-label": "Close menu",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
