//! Copy and iconography shown on the page. Array order is render order.

use crate::components::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Icon, title and description of a service or highlight card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Entrance-animation delay in seconds.
    pub delay: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sector {
    pub icon: Icon,
    pub title: &'static str,
    pub tag: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactItem {
    pub icon: Icon,
    pub lines: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Início", href: "#home" },
    NavLink { label: "Quem Somos", href: "#about" },
    NavLink { label: "Serviços", href: "#services" },
    NavLink { label: "Por que ES?", href: "#why-invest" },
    NavLink { label: "Contato", href: "#contact" },
];

pub const SERVICES: [Card; 3] = [
    Card {
        icon: Icon::CheckCircle,
        title: "One Stop Shop",
        description: "Atuamos como ponto focal estratégico. Centralizamos informações e processos para empresas que buscam investir no estado, reduzindo atritos e acelerando decisões.",
        delay: Some(0.1),
    },
    Card {
        icon: Icon::TrendingUp,
        title: "Suporte Full a Investidores",
        description: "Oferecemos suporte técnico, institucional e estratégico. Desde dados e geo-inteligência para definição de localização até identificação de benefícios fiscais e linhas de financiamento.",
        delay: Some(0.2),
    },
    Card {
        icon: Icon::MapPin,
        title: "Acompanhamento Ponta a Ponta",
        description: "Gestão personalizada do início à operação. Acompanhamento dedicado, confidencial e articulação com órgãos públicos e licenciadores.",
        delay: Some(0.3),
    },
];

pub const REASONS: [Card; 5] = [
    Card {
        icon: Icon::MapPin,
        title: "Localização Estratégica",
        description: "Próxima a 70% do PIB do Brasil, com gateway sólido de importação e exportação.",
        delay: None,
    },
    Card {
        icon: Icon::Truck,
        title: "Logística Integrada",
        description: "Infraestrutura logística integrada com portos, rodovias e ferrovias.",
        delay: None,
    },
    Card {
        icon: Icon::Landmark,
        title: "Fundo Soberano",
        description: "Único estado com Fundo Soberano próprio, garantindo estabilidade e capacidade de investimento público contínuo.",
        delay: None,
    },
    Card {
        icon: Icon::Globe,
        title: "Primeira ZPE Privada",
        description: "Primeira ZPE privada do Brasil, com benefícios federais garantidos por até 20 anos.",
        delay: None,
    },
    Card {
        icon: Icon::Award,
        title: "Gestão Fiscal Nota A",
        description: "14 anos consecutivos com Gestão Fiscal Nota A, sinônimo de solidez financeira e previsibilidade.",
        delay: None,
    },
];

pub const SECTORS: [Sector; 3] = [
    Sector { icon: Icon::TrendingUp, title: "Indústria 4.0", tag: "Tecnologia & Produção" },
    Sector { icon: Icon::Truck, title: "Logística Avançada", tag: "Hub de Distribuição" },
    Sector { icon: Icon::Landmark, title: "Comércio Atacadista", tag: "Incentivos Fiscais" },
];

pub const QUICK_LINKS: [&str; 5] = [
    "Quem Somos",
    "Nossos Serviços",
    "Setores Estratégicos",
    "Incentivos Fiscais",
    "Notícias",
];

pub const CONTACT: [ContactItem; 3] = [
    ContactItem {
        icon: Icon::MapPin,
        lines: &["Rua Manoel Feu Subtil, 60 - 2º andar", "Enseada do Suá, Vitória/ES"],
    },
    ContactItem { icon: Icon::Phone, lines: &["+55 (27) 98107-9000"] },
    ContactItem { icon: Icon::Mail, lines: &["negocios@nova-es.org.br"] },
];

// Profiles are not published yet, the icons link back to the page top.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: Icon::Instagram, label: "Instagram", href: "#" },
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "#" },
    SocialLink { icon: Icon::Facebook, label: "Facebook", href: "#" },
];

pub const LEGAL_LINKS: [&str; 2] = ["Política de Privacidade", "Termos de Uso"];

pub const COPYRIGHT: &str = "© 2024 NOVA ES. Todos os direitos reservados.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_ordered_fragments() {
        let pairs: Vec<_> = NAV_LINKS.iter().map(|link| (link.label, link.href)).collect();
        assert_eq!(
            pairs,
            [
                ("Início", "#home"),
                ("Quem Somos", "#about"),
                ("Serviços", "#services"),
                ("Por que ES?", "#why-invest"),
                ("Contato", "#contact"),
            ]
        );
    }

    #[test]
    fn service_delays_are_staggered() {
        let delays: Vec<_> = SERVICES.iter().map(|card| card.delay).collect();
        assert_eq!(delays, [Some(0.1), Some(0.2), Some(0.3)]);
        assert!(REASONS.iter().all(|card| card.delay.is_none()));
    }

    #[test]
    fn cards_carry_non_empty_copy() {
        for card in SERVICES.iter().chain(REASONS.iter()) {
            assert!(!card.title.is_empty());
            assert!(card.description.ends_with('.'), "{} description is cut", card.title);
        }
    }
}
