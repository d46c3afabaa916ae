use yew::prelude::*;

pub mod config;
pub mod content;
pub mod hooks;
pub mod menu;
pub mod components {
    pub mod button;
    pub mod cards;
    pub mod heading;
    pub mod icon;
    pub mod logo;
}
pub mod sections {
    pub mod cta;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod sectors;
    pub mod services;
    pub mod why_invest;
}

use hooks::use_scrolled;
use menu::{MenuAction, MenuState};
use sections::{
    cta::CallToAction,
    footer::Footer,
    header::Header,
    hero::Hero,
    sectors::Sectors,
    services::Services,
    why_invest::WhyInvest,
};

/// Entrance animations. Tailwind handles everything else.
const ANIMATIONS_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }

    .reveal {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.5s ease-out, transform 0.5s ease-out, box-shadow 150ms cubic-bezier(0.4, 0, 0.2, 1);
    }

    .reveal.is-visible {
        opacity: 1;
        transform: none;
    }

    @keyframes fadeUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .animate-fade-up {
        animation: fadeUp 0.8s ease-out both;
    }

    @keyframes scrollHint {
        0%, 100% { opacity: 1; transform: translateY(0); }
        50% { opacity: 1; transform: translateY(10px); }
    }

    .animate-scroll-hint {
        opacity: 0;
        animation: scrollHint 2s ease-in-out 1s infinite;
    }

    @keyframes menuDrop {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .mobile-menu {
        animation: menuDrop 0.3s ease-out both;
    }

    @media (prefers-reduced-motion: reduce) {
        .reveal, .animate-fade-up, .animate-scroll-hint, .mobile-menu {
            animation: none;
            transition: none;
            opacity: 1;
            transform: none;
        }
    }
"#;

/// Page shell. Owns the two pieces of UI state: whether the page is scrolled
/// past the header threshold, and whether the mobile menu is open.
#[function_component(App)]
pub fn app() -> Html {
    let scrolled = use_scrolled(config::SCROLL_THRESHOLD_PX);
    let menu = use_reducer(MenuState::default);

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <div class="min-h-screen bg-[#F5F5F5] font-sans text-gray-800 overflow-x-hidden">
            <style>{ANIMATIONS_CSS}</style>
            <Header
                scrolled={scrolled}
                menu_open={menu.open}
                on_toggle_menu={toggle_menu}
                on_close_menu={close_menu}
            />
            <Hero />
            <Services />
            <WhyInvest />
            <Sectors />
            <CallToAction />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let start = css.find(&format!("{selector} {{")).expect("selector present");
        let end = css[start..].find('}').expect("rule closed");
        &css[start..start + end]
    }

    #[test]
    fn reveal_transition_keeps_card_hover_shadow() {
        // Un-layered, so it replaces Tailwind's `transition-shadow` on the same element
        let reveal = rule(ANIMATIONS_CSS, ".reveal");
        assert!(reveal.contains("transition: opacity"));
        assert!(reveal.contains("box-shadow"));
    }
}
