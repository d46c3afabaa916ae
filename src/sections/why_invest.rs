use yew::prelude::*;

use crate::components::cards::StatCard;
use crate::components::heading::{Align, SectionHeading};
use crate::components::icon::{Icon, IconView};
use crate::content::REASONS;

#[function_component(WhyInvest)]
pub fn why_invest() -> Html {
    html! {
        <section id="why-invest" class="py-20 bg-[#F5F5F5]">
            <div class="container mx-auto px-4 md:px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    <div>
                        <SectionHeading
                            title="Por Que Investir no ES?"
                            subtitle="Solidez institucional e oportunidades reais de investimento."
                            align={Align::Left}
                        />

                        <div class="grid gap-6 mt-8">
                            {
                                REASONS.iter().map(|card| html! {
                                    <StatCard
                                        key={card.title}
                                        icon={card.icon}
                                        title={card.title}
                                        description={card.description}
                                    />
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="relative sticky top-24">
                        <div class="absolute -inset-4 bg-[#B099CB]/20 rounded-2xl transform rotate-3" />
                        <div class="relative rounded-2xl shadow-2xl w-full h-[800px] overflow-hidden bg-gradient-to-br from-[#1F2C40] via-[#B099CB] to-[#F0B1F0]">
                            <div class="absolute inset-0 bg-black/20" />
                            <div class="absolute inset-0 flex items-center justify-center">
                                <div class="flex flex-col items-center gap-4 text-white/90">
                                    <IconView icon={Icon::Anchor} class="w-16 h-16" />
                                    <span class="text-lg font-semibold">{"Imagem ilustrativa"}</span>
                                </div>
                            </div>
                        </div>
                        <div class="absolute bottom-8 left-8 right-8 bg-white/90 backdrop-blur p-6 rounded-xl shadow-lg">
                            <div class="flex items-center gap-4">
                                <div class="bg-[#1F2C40] p-3 rounded-full text-white">
                                    <IconView icon={Icon::TrendingUp} />
                                </div>
                                <div>
                                    <p class="text-sm text-gray-500 uppercase font-bold tracking-wider">{"PIB em Crescimento"}</p>
                                    <p class="text-2xl font-bold text-[#1F2C40]">{"+4.5% acima da média nacional"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
