use log::debug;
use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::IconView;
use crate::components::logo::NovaLogo;
use crate::content::{ContactItem, CONTACT, COPYRIGHT, LEGAL_LINKS, QUICK_LINKS, SOCIAL_LINKS};

fn contact_item(item: &ContactItem) -> Html {
    // Multi-line entries (the address) align to the top of the icon
    let alignment = if item.lines.len() > 1 { "items-start" } else { "items-center" };
    let last = item.lines.len().saturating_sub(1);

    html! {
        <li class={classes!("flex", "gap-3", alignment)}>
            <IconView icon={item.icon} class="w-5 h-5 text-[#F0B1F0] shrink-0" />
            <span>
                {
                    item.lines.iter().enumerate().map(|(idx, line)| html! {
                        <>
                            {*line}
                            if idx < last { <br /> }
                        </>
                    }).collect::<Html>()
                }
            </span>
        </li>
    }
}

/// Newsletter sign-up. There is no subscription endpoint; submitting only keeps
/// the browser from reloading the page.
#[function_component(Newsletter)]
fn newsletter() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("newsletter form submitted, nothing to send it to");
    });

    html! {
        <div>
            <h4 class="text-white font-bold mb-6">{"Newsletter"}</h4>
            <p class="text-sm mb-4">{"Receba novidades sobre oportunidades de investimento no ES."}</p>
            <form class="flex flex-col gap-3" onsubmit={onsubmit}>
                <input
                    type="email"
                    placeholder="Seu e-mail corporativo"
                    class="bg-white/5 border border-white/10 rounded-lg px-4 py-3 text-white focus:outline-none focus:border-[#F0B1F0] transition-colors"
                />
                <Button variant={ButtonVariant::Primary} button_type="submit" class="w-full">
                    {"Inscrever-se"}
                </Button>
            </form>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="bg-[#151e2e] text-gray-400 py-16 border-t border-white/5">
            <div class="container mx-auto px-4 md:px-6">
                <div class="grid md:grid-cols-4 gap-12 mb-12">
                    <div class="col-span-1 md:col-span-1">
                        <a href="#" class="block mb-6">
                            <NovaLogo light={true} />
                        </a>
                        <p class="text-sm leading-relaxed mb-6">
                            {"A NOVA ES conecta oportunidades, constrói pontes e cria o ambiente certo para quem quer investir no estado mais sólido do Brasil."}
                        </p>
                        <div class="flex gap-4">
                            {
                                SOCIAL_LINKS.iter().map(|social| html! {
                                    <a
                                        key={social.label}
                                        href={social.href}
                                        aria-label={social.label}
                                        class="w-10 h-10 rounded-full bg-white/5 flex items-center justify-center hover:bg-[#F0B1F0] hover:text-[#1F2C40] transition-all"
                                    >
                                        <IconView icon={social.icon} class="w-5 h-5" />
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div>
                        <h4 class="text-white font-bold mb-6">{"Links Rápidos"}</h4>
                        <ul class="space-y-3 text-sm">
                            {
                                QUICK_LINKS.iter().map(|label| html! {
                                    <li key={*label}>
                                        <a href="#" class="hover:text-[#F0B1F0] transition-colors">{*label}</a>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-bold mb-6">{"Contato"}</h4>
                        <ul class="space-y-4 text-sm">
                            { for CONTACT.iter().map(contact_item) }
                        </ul>
                    </div>

                    <Newsletter />
                </div>

                <div class="pt-8 border-t border-white/5 flex flex-col md:flex-row justify-between items-center gap-4 text-xs">
                    <p>{COPYRIGHT}</p>
                    <div class="flex gap-6">
                        {
                            LEGAL_LINKS.iter().map(|label| html! {
                                <a key={*label} href="#" class="hover:text-white transition-colors">{*label}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </footer>
    }
}
