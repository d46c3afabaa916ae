//! Card treatments used by the services, why-invest and sectors sections.

use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::hooks::{reveal_classes, reveal_delay, use_reveal};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    /// Seconds to wait before the entrance animation starts.
    #[prop_or_default]
    pub delay: Option<f64>,
}

/// Elevated card with a top accent border, revealed on first view.
#[function_component(ServiceCard)]
pub fn service_card(props: &CardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!(
                reveal_classes(visible),
                "bg-white", "p-8", "rounded-2xl", "shadow-lg", "hover:shadow-xl", "transition-shadow",
                "border-t-4", "border-[#B099CB]", "group", "h-full"
            )}
            style={reveal_delay(props.delay)}
        >
            <div class="w-14 h-14 bg-[#F5F5F5] rounded-xl flex items-center justify-center mb-6 group-hover:bg-[#1F2C40] transition-colors duration-300">
                <IconView icon={props.icon} class="w-7 h-7 text-[#1F2C40] group-hover:text-white transition-colors duration-300" />
            </div>
            <h3 class="text-xl font-display font-bold text-[#1F2C40] mb-3">{ props.title.clone() }</h3>
            <p class="text-gray-600 leading-relaxed text-sm">{ props.description.clone() }</p>
        </div>
    }
}

/// Bordered row: icon chip and title on one line, description below.
#[function_component(StatCard)]
pub fn stat_card(props: &CardProps) -> Html {
    html! {
        <div class="flex flex-col items-start text-left p-6 bg-white rounded-xl shadow-sm hover:shadow-md hover:-translate-y-1 transition-all border-l-4 border-[#F0B1F0]">
            <div class="flex items-center gap-3 mb-3">
                <div class="p-2 bg-[#1F2C40]/5 rounded-lg text-[#1F2C40]">
                    <IconView icon={props.icon} class="w-6 h-6" />
                </div>
                <h3 class="text-lg font-display font-bold text-[#1F2C40]">{ props.title.clone() }</h3>
            </div>
            <p class="text-sm text-gray-600 leading-relaxed">{ props.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectorCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub tag: AttrValue,
}

#[function_component(SectorCard)]
pub fn sector_card(props: &SectorCardProps) -> Html {
    html! {
        <div class="group relative overflow-hidden rounded-2xl shadow-lg h-80 cursor-pointer transition-transform duration-300 hover:-translate-y-2.5">
            <div class="w-full h-full bg-gradient-to-br from-[#1F2C40] via-[#B099CB] to-[#F0B1F0] flex items-center justify-center">
                <IconView icon={props.icon} class="w-16 h-16 text-white/80 drop-shadow" />
            </div>
            <div class="absolute inset-0 bg-gradient-to-t from-[#1F2C40] via-transparent to-transparent opacity-80" />
            <div class="absolute bottom-0 left-0 p-6">
                <span class="text-[#F0B1F0] text-xs font-bold uppercase tracking-wider mb-2 block">{ props.tag.clone() }</span>
                <h3 class="text-2xl font-bold text-white">{ props.title.clone() }</h3>
            </div>
        </div>
    }
}
