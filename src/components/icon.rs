//! Inline stroke icons (lucide outlines, 24x24 grid).
//!
//! Cards and buttons pick a glyph from the closed [`Icon`] set instead of
//! taking an arbitrary renderable, so every glyph the page can show is listed here.

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    ArrowRight,
    CheckCircle,
    TrendingUp,
    Truck,
    Landmark,
    MapPin,
    Phone,
    Mail,
    Instagram,
    Linkedin,
    Facebook,
    Anchor,
    Globe,
    Award,
}

/// One SVG primitive of an icon outline.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Shape {
    Path(&'static str),
    Circle { cx: u8, cy: u8, r: u8 },
    Rect { x: u8, y: u8, width: u8, height: u8, rx: u8 },
}

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::Menu => &[Path("M4 12h16"), Path("M4 6h16"), Path("M4 18h16")],
            Icon::Close => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            Icon::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Icon::CheckCircle => &[Circle { cx: 12, cy: 12, r: 10 }, Path("m9 12 2 2 4-4")],
            Icon::TrendingUp => &[Path("M22 7 13.5 15.5 8.5 10.5 2 17"), Path("M16 7h6v6")],
            Icon::Truck => &[
                Path("M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2"),
                Path("M15 18H9"),
                Path("M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14"),
                Circle { cx: 17, cy: 18, r: 2 },
                Circle { cx: 7, cy: 18, r: 2 },
            ],
            Icon::Landmark => &[
                Path("M3 22h18"),
                Path("M6 18v-7"),
                Path("M10 18v-7"),
                Path("M14 18v-7"),
                Path("M18 18v-7"),
                Path("M12 2 20 7H4z"),
            ],
            Icon::MapPin => &[
                Path("M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0"),
                Circle { cx: 12, cy: 10, r: 3 },
            ],
            Icon::Phone => &[Path(
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            )],
            Icon::Mail => &[
                Rect { x: 2, y: 4, width: 20, height: 16, rx: 2 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Instagram => &[
                Rect { x: 2, y: 2, width: 20, height: 20, rx: 5 },
                Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Path("M17.5 6.5h.01"),
            ],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect { x: 2, y: 9, width: 4, height: 12, rx: 0 },
                Circle { cx: 4, cy: 4, r: 2 },
            ],
            Icon::Facebook => &[Path("M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z")],
            Icon::Anchor => &[
                Path("M12 22V8"),
                Path("M5 12H2a10 10 0 0 0 20 0h-3"),
                Circle { cx: 12, cy: 5, r: 3 },
            ],
            Icon::Globe => &[
                Circle { cx: 12, cy: 12, r: 10 },
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            Icon::Award => &[
                Path("m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526"),
                Circle { cx: 12, cy: 8, r: 6 },
            ],
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Circle { cx, cy, r } => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Rect { x, y, width, height, rx } => html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx={rx.to_string()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class={props.class.clone()}
        >
            { for props.icon.shapes().iter().map(render_shape) }
        </svg>
    }
}
