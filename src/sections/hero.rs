use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::{Icon, IconView};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="relative h-screen min-h-[600px] flex items-center justify-center overflow-hidden">
            // Background gradient with overlay
            <div class="absolute inset-0 z-0">
                <div class="w-full h-full bg-gradient-to-br from-[#1F2C40] via-[#2b3d5a] to-[#B099CB]" />
                <div class="absolute inset-0 bg-[#1F2C40]/70" />
            </div>

            <div class="container mx-auto px-4 md:px-6 relative z-10 pt-20">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="animate-fade-up">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-display font-medium text-white leading-tight mb-8 tracking-tight">
                            {"Escolha o crescimento. "}
                            <br />
                            {"Invista no "}
                            <span class="text-[#F0B1F0]">{"Espírito Santo"}</span>
                            {"."}
                        </h1>
                        <p class="text-lg md:text-xl text-gray-200 mb-10 max-w-2xl mx-auto leading-relaxed font-light">
                            {"O ambiente de negócios mais seguro e competitivo do Brasil espera por sua empresa. "}
                            {"Conectamos oportunidades a investidores com suporte completo."}
                        </p>
                        <div class="flex flex-col sm:flex-row justify-center gap-4">
                            <Button variant={ButtonVariant::Primary} class="gap-2 text-lg">
                                {"Fale Conosco"}
                                <IconView icon={Icon::ArrowRight} class="w-5 h-5" />
                            </Button>
                            <Button variant={ButtonVariant::Outline} class="text-lg">
                                {"Conheça Nossos Serviços"}
                            </Button>
                        </div>
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="animate-scroll-hint absolute bottom-8 left-1/2 -translate-x-1/2 text-white/50">
                <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center pt-2">
                    <div class="w-1 h-2 bg-white/50 rounded-full" />
                </div>
            </div>
        </section>
    }
}
