use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="py-20 bg-[#1F2C40] relative overflow-hidden">
            <div class="absolute top-0 right-0 w-1/3 h-full bg-[#B099CB]/10 skew-x-12 transform translate-x-20" />
            <div class="container mx-auto px-4 md:px-6 relative z-10 text-center">
                <h2 class="text-3xl md:text-5xl font-display font-bold text-white mb-6">
                    {"Pronto para expandir seus horizontes?"}
                </h2>
                <p class="text-xl text-gray-300 mb-10 max-w-2xl mx-auto">
                    {"Agende uma reunião com nossos especialistas e descubra todos os benefícios fiscais e logísticos que o ES tem para oferecer."}
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <Button variant={ButtonVariant::Primary} class="text-lg px-8 py-4">
                        {"Falar com Consultor"}
                    </Button>
                    <Button
                        variant={ButtonVariant::Outline}
                        class="text-lg px-8 py-4 border-gray-500 text-gray-300 hover:text-white hover:border-white"
                    >
                        {"Baixar Guia de Investimentos"}
                    </Button>
                </div>
            </div>
        </section>
    }
}
