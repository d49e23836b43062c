use dioxus::prelude::*;

use crate::components::NavBar;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "lg-layout",
            header {
                NavBar {}
            }
            main {
                class: "lg-main", {
                    children
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../../../assets/main.css");

    #[test]
    fn layout_classes_are_styled() {
        for class in ["lg-layout", "lg-main"] {
            assert!(STYLESHEET.contains(&format!(".{class}")), "missing .{class}");
        }
    }
}
