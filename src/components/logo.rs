use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NovaLogoProps {
    /// White wordmark for dark backgrounds.
    #[prop_or_default]
    pub light: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(NovaLogo)]
pub fn nova_logo(props: &NovaLogoProps) -> Html {
    let (wordmark_color, tagline_color) = if props.light {
        ("text-white", "text-gray-300")
    } else {
        ("text-[#1F2C40]", "text-gray-500")
    };

    html! {
        <div class={classes!("flex", "items-center", "gap-4", props.class.clone())}>
            // Wing mark
            <svg width="58" height="38" viewBox="0 0 58 38" fill="none" xmlns="http://www.w3.org/2000/svg" class="shrink-0">
                <path d="M0 12C15 12 45 2 58 0V12C45 14 15 22 0 22V12Z" fill="#B099CB" />
                <path d="M0 24C15 24 42 18 55 14V24C42 28 15 32 0 32V24Z" fill="#D946EF" />
                <path d="M0 34C12 34 35 30 45 26V38H0V34Z" fill="#F0B1F0" />
            </svg>
            <div class="flex flex-col justify-center">
                <div class={classes!("flex", "items-baseline", "leading-none", wordmark_color)}>
                    <span class="font-display font-bold text-3xl tracking-tight">{"NOVA"}</span>
                    <span class="font-sans font-light text-3xl ml-1 opacity-90">{"ES"}</span>
                </div>
                <span class={classes!("text-[0.65rem]", "uppercase", "tracking-wider", "mt-1", tagline_color)}>
                    {"Agência de Atração de Investimentos"}
                </span>
            </div>
        </div>
    }
}
