//! Renders the page natively through Yew's server renderer and checks the markup.

use nova_es::components::button::{Button, ButtonProps, ButtonVariant};
use nova_es::components::heading::{Align, SectionHeading, SectionHeadingProps};
use nova_es::components::logo::{NovaLogo, NovaLogoProps};
use nova_es::content::{NAV_LINKS, REASONS, SERVICES};
use nova_es::hooks::past_threshold;
use nova_es::sections::header::{Header, HeaderProps};
use nova_es::{config, App};
use pretty_assertions::assert_eq;
use yew::prelude::*;
use yew::ServerRenderer;

async fn render_app() -> String {
    ServerRenderer::<App>::new().hydratable(false).render().await
}

async fn render_header(scrolled: bool, menu_open: bool) -> String {
    ServerRenderer::<Header>::with_props(move || HeaderProps {
        scrolled,
        menu_open,
        on_toggle_menu: Callback::noop(),
        on_close_menu: Callback::noop(),
    })
    .hydratable(false)
    .render()
    .await
}

/// Byte offsets of each nav label, in `NAV_LINKS` order, starting the search at `from`.
fn label_positions(html: &str, from: usize) -> Vec<usize> {
    let mut cursor = from;
    NAV_LINKS
        .iter()
        .map(|link| {
            let needle = format!(">{}</a>", link.label);
            let found = html[cursor..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{} missing after byte {cursor}", link.label));
            cursor += found + needle.len();
            cursor
        })
        .collect()
}

#[tokio::test]
async fn header_state_follows_scroll_offset() {
    for offset in [0.0, 49.0, 50.0, 51.0, 1000.0] {
        let scrolled = past_threshold(offset, config::SCROLL_THRESHOLD_PX);
        let html = render_header(scrolled, false).await;
        if offset > 50.0 {
            assert!(html.contains("bg-[#1F2C40]/95 backdrop-blur-md py-3 shadow-lg"), "offset {offset}");
            assert!(!html.contains("bg-transparent"), "offset {offset}");
        } else {
            assert!(html.contains("bg-transparent py-6"), "offset {offset}");
            assert!(!html.contains("backdrop-blur-md"), "offset {offset}");
        }
    }
}

#[tokio::test]
async fn closed_menu_hides_the_overlay() {
    let html = render_header(false, false).await;
    assert!(!html.contains("Fale no WhatsApp"));
    assert!(html.contains(r#"aria-label="Abrir menu""#));
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[tokio::test]
async fn open_menu_lists_every_link_again() {
    let html = render_header(false, true).await;
    assert!(html.contains("Fale no WhatsApp"));
    assert!(html.contains(r#"aria-label="Fechar menu""#));

    // Desktop nav first, then the overlay repeats the same sequence
    let desktop = label_positions(&html, 0);
    let overlay = label_positions(&html, *desktop.last().unwrap());
    assert_eq!(desktop.len(), 5);
    assert_eq!(overlay.len(), 5);
    for link in NAV_LINKS {
        assert_eq!(html.matches(&format!(r#"href="{}""#, link.href)).count(), 2, "{}", link.href);
    }
}

#[tokio::test]
async fn navigation_has_the_five_anchors_in_order() {
    let html = render_app().await;
    let positions = label_positions(&html, 0);
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    let anchors: Vec<_> = NAV_LINKS.iter().map(|link| link.href).collect();
    assert_eq!(anchors, ["#home", "#about", "#services", "#why-invest", "#contact"]);
    for anchor in anchors {
        let id = format!(r#"id="{}""#, anchor.trim_start_matches('#'));
        assert!(html.contains(&id), "no element carries {id}");
    }
}

#[tokio::test]
async fn cards_render_their_copy_verbatim() {
    let html = render_app().await;
    for card in SERVICES.iter().chain(REASONS.iter()) {
        assert!(html.contains(&format!(">{}</h3>", card.title)), "{}", card.title);
        assert!(html.contains(&format!(">{}</p>", card.description)), "{}", card.title);
    }
}

#[tokio::test]
async fn service_cards_carry_their_delays() {
    let html = render_app().await;
    for delay in ["0.1s", "0.2s", "0.3s"] {
        assert!(html.contains(&format!("transition-delay: {delay}")), "{delay}");
    }
}

#[tokio::test]
async fn newsletter_button_submits_the_form() {
    let html = render_app().await;
    assert!(html.contains(r#"placeholder="Seu e-mail corporativo""#));
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains("Inscrever-se"));
}

#[tokio::test]
async fn rendering_is_idempotent() {
    let first = render_app().await;
    let second = render_app().await;
    assert_eq!(first, second);
}

async fn render_logo(light: bool) -> String {
    ServerRenderer::<NovaLogo>::with_props(move || NovaLogoProps { light, class: Classes::new() })
        .hydratable(false)
        .render()
        .await
}

async fn render_heading(align: Align, subtitle: Option<&'static str>) -> String {
    ServerRenderer::<SectionHeading>::with_props(move || SectionHeadingProps {
        title: AttrValue::from("Setores em Destaque"),
        subtitle: subtitle.map(AttrValue::from),
        align,
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn logo_on_light_background_uses_dark_text() {
    let html = render_logo(false).await;
    assert!(html.contains("text-[#1F2C40]"));
    assert!(html.contains("text-gray-500"));
    assert!(!html.contains("text-white"));
    assert!(!html.contains("text-gray-300"));
}

#[tokio::test]
async fn logo_on_dark_background_uses_light_text() {
    let html = render_logo(true).await;
    assert!(html.contains("text-white"));
    assert!(html.contains("text-gray-300"));
    assert!(!html.contains("text-[#1F2C40]"));
    assert!(!html.contains("text-gray-500"));
}

#[tokio::test]
async fn left_heading_keeps_the_rule_on_the_left() {
    let html = render_heading(Align::Left, None).await;
    assert!(html.contains(r#"class="mb-12 text-left""#));
    assert!(html.contains(r#"class="h-1 w-20 bg-[#F0B1F0] mt-6 rounded-full""#));
    assert!(!html.contains("mx-auto"));
    assert!(!html.contains("<p"));
}

#[tokio::test]
async fn centered_heading_centers_text_and_rule() {
    let html = render_heading(Align::Center, Some("O Espírito Santo é terra fértil.")).await;
    assert!(html.contains(r#"class="mb-12 text-center""#));
    assert!(html.contains(r#"class="h-1 w-20 bg-[#F0B1F0] mt-6 mx-auto rounded-full""#));
    assert!(html.contains(">O Espírito Santo é terra fértil.</p>"));
}

#[tokio::test]
async fn button_forwards_its_attributes() {
    let html = ServerRenderer::<Button>::with_props(|| ButtonProps {
        variant: ButtonVariant::Secondary,
        class: classes!("w-full"),
        button_type: AttrValue::from("submit"),
        id: Some(AttrValue::from("newsletter-submit")),
        aria_label: Some(AttrValue::from("Inscrever-se na newsletter")),
        disabled: true,
        onclick: Some(Callback::noop()),
        children: Children::new(vec![html! { "Inscrever-se" }]),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.starts_with("<button"));
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains(r#"id="newsletter-submit""#));
    assert!(html.contains(r#"aria-label="Inscrever-se na newsletter""#));
    assert!(html.contains(r#"disabled="disabled""#));
    assert!(html.contains("bg-[#B099CB]"));
    assert!(html.contains(">Inscrever-se</button>"));
}

#[tokio::test]
async fn button_defaults_to_an_enabled_plain_button() {
    let html = ServerRenderer::<Button>::with_props(|| ButtonProps {
        variant: ButtonVariant::Primary,
        class: Classes::new(),
        button_type: AttrValue::from("button"),
        id: None,
        aria_label: None,
        disabled: false,
        onclick: None,
        children: Children::new(vec![html! { "WhatsApp" }]),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains(r#"type="button""#));
    assert!(!html.contains("id="));
    assert!(!html.contains("aria-label"));
    assert!(!html.contains("disabled="));
}
