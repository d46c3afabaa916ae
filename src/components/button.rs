use yew::prelude::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center px-6 py-3 rounded-lg font-medium transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-[#F0B1F0] hover:bg-[#E090E0] text-[#1F2C40] font-bold shadow-lg shadow-fuchsia-500/20 focus:ring-fuchsia-400",
            ButtonVariant::Secondary => "bg-[#B099CB] hover:bg-[#9F86C0] text-white shadow-md focus:ring-purple-400",
            ButtonVariant::Outline => "border-2 border-white text-white hover:bg-white/10 focus:ring-white",
        }
    }
}

/// Base classes, then the variant's, then whatever the caller adds.
pub fn button_classes(variant: ButtonVariant, extra: &Classes) -> Classes {
    classes!(BASE_CLASSES, variant.classes(), extra.clone())
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class={button_classes(props.variant, &props.class)}
            type={props.button_type.clone()}
            id={props.id.clone()}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
