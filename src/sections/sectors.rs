use yew::prelude::*;

use crate::components::cards::SectorCard;
use crate::components::heading::SectionHeading;
use crate::content::SECTORS;

#[function_component(Sectors)]
pub fn sectors() -> Html {
    html! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="Setores em Destaque"
                    subtitle="O Espírito Santo é terra fértil para diversos segmentos econômicos."
                />

                <div class="grid md:grid-cols-3 gap-6">
                    {
                        SECTORS.iter().map(|sector| html! {
                            <SectorCard key={sector.title} icon={sector.icon} title={sector.title} tag={sector.tag} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
