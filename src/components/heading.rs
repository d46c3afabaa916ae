use yew::prelude::*;

use crate::hooks::{reveal_classes, reveal_delay, use_reveal};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Left,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub align: Align,
}

/// Section title with an optional subtitle and the pink rule underneath.
/// Title and subtitle fade up once, the first time the heading scrolls into view.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    let (text_align, rule_align) = match props.align {
        Align::Center => ("text-center", Some("mx-auto")),
        Align::Left => ("text-left", None),
    };

    html! {
        <div ref={node} class={classes!("mb-12", text_align)}>
            <h2 class={classes!(reveal_classes(visible), "text-3xl", "md:text-4xl", "font-display", "font-bold", "text-[#1F2C40]", "mb-4")}>
                { props.title.clone() }
            </h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <p
                            class={classes!(reveal_classes(visible), "text-lg", "text-gray-600", "max-w-2xl", "mx-auto")}
                            style={reveal_delay(Some(0.1))}
                        >
                            { subtitle.clone() }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <div class={classes!("h-1", "w-20", "bg-[#F0B1F0]", "mt-6", rule_align, "rounded-full")} />
        </div>
    }
}
