use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::{Icon, IconView};
use crate::components::logo::NovaLogo;
use crate::content::NAV_LINKS;

pub fn header_classes(scrolled: bool) -> Classes {
    let state = if scrolled {
        "bg-[#1F2C40]/95 backdrop-blur-md py-3 shadow-lg"
    } else {
        "bg-transparent py-6"
    };
    classes!("fixed", "top-0", "left-0", "right-0", "z-50", "transition-all", "duration-300", state)
}

pub fn nav_link_classes(scrolled: bool) -> Classes {
    let tone = if scrolled { "text-gray-200" } else { "text-white/90" };
    classes!("text-sm", "font-medium", "hover:text-[#F0B1F0]", "transition-colors", tone)
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<MouseEvent>,
    pub on_close_menu: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { scrolled, menu_open, on_toggle_menu, on_close_menu } = props;

    let (menu_icon, menu_label) = if *menu_open {
        (Icon::Close, "Fechar menu")
    } else {
        (Icon::Menu, "Abrir menu")
    };

    html! {
        <header class={header_classes(*scrolled)}>
            <div class="container mx-auto px-4 md:px-6 flex items-center justify-between">
                <a href="#" class="group">
                    <NovaLogo light={true} />
                </a>

                // Desktop nav
                <nav class="hidden md:flex items-center gap-8">
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.href} class={nav_link_classes(*scrolled)}>
                                {link.label}
                            </a>
                        }).collect::<Html>()
                    }
                    <Button variant={ButtonVariant::Primary} class="!py-2 !px-4 text-sm gap-2">
                        <IconView icon={Icon::Phone} class="w-4 h-4" />
                        {"WhatsApp"}
                    </Button>
                </nav>

                <button
                    class="md:hidden text-white p-2"
                    type="button"
                    aria-label={menu_label}
                    aria-expanded={menu_open.to_string()}
                    onclick={on_toggle_menu.clone()}
                >
                    <IconView icon={menu_icon} />
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu absolute top-full left-0 right-0 bg-[#1F2C40] border-t border-white/10 p-4 shadow-xl md:hidden flex flex-col gap-4">
                            {
                                // No prevent_default: the browser still follows the fragment
                                NAV_LINKS.iter().map(|link| html! {
                                    <a
                                        key={link.label}
                                        href={link.href}
                                        onclick={on_close_menu.clone()}
                                        class="text-gray-200 hover:text-[#F0B1F0] py-2 px-4 rounded-lg hover:bg-white/5 transition-colors"
                                    >
                                        {link.label}
                                    </a>
                                }).collect::<Html>()
                            }
                            <Button variant={ButtonVariant::Primary} class="w-full justify-center gap-2">
                                <IconView icon={Icon::Phone} class="w-4 h-4" />
                                {"Fale no WhatsApp"}
                            </Button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_header_is_transparent_and_tall() {
        let classes = header_classes(false).to_string();
        assert!(classes.contains("bg-transparent"));
        assert!(classes.contains("py-6"));
        assert!(!classes.contains("shadow-lg"));
    }

    #[test]
    fn scrolled_header_is_opaque_and_compact() {
        let classes = header_classes(true).to_string();
        assert!(classes.contains("bg-[#1F2C40]/95"));
        assert!(classes.contains("py-3"));
        assert!(!classes.contains("bg-transparent"));
    }

    #[test]
    fn nav_links_dim_once_scrolled() {
        assert!(nav_link_classes(true).contains("text-gray-200"));
        assert!(nav_link_classes(false).contains("text-white/90"));
    }
}
