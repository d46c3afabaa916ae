use yew::prelude::*;

use crate::components::cards::ServiceCard;
use crate::components::heading::SectionHeading;
use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="py-20 md:py-32 bg-white relative">
            <div class="container mx-auto px-4 md:px-6">
                // "Quem Somos" lands on the agency presentation
                <div id="about" class="scroll-mt-24">
                    <SectionHeading
                        title="Seu Ponto Focal Estratégico"
                        subtitle="A NOVA ES atua como one-stop-shop para empresas que buscam investir no estado, oferecendo suporte técnico, institucional e estratégico."
                    />
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {
                        SERVICES.iter().map(|card| html! {
                            <ServiceCard
                                key={card.title}
                                icon={card.icon}
                                title={card.title}
                                description={card.description}
                                delay={card.delay}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
