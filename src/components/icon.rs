use yew::prelude::*;

/// Symbolic glyph referenced by the content tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ChartLine,
    ChessKnight,
    Cogs,
    GraduationCap,
    Lightbulb,
    PuzzlePiece,
    Rocket,
    Bolt,
    Shield,
    Coins,
}

impl Icon {
    /// SVG path data on a 24x24 stroked grid.
    pub fn path(self) -> &'static str {
        match self {
            Icon::ChartLine => "M3 3v18h18 M7 15l4-4 3 3 5-6",
            Icon::ChessKnight => "M7 21h10 M8 18h8 M9 18c0-4 1-6 3-8l-3-1 1-4 4 1c3 2 4 6 3 12",
            Icon::Cogs => "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8 M12 2v3 M12 19v3 M2 12h3 M19 12h3 M4.9 4.9l2.1 2.1 M17 17l2.1 2.1 M4.9 19.1l2.1-2.1 M17 7l2.1-2.1",
            Icon::GraduationCap => "M2 9l10-5 10 5-10 5z M6 11v5c3 2 9 2 12 0v-5",
            Icon::Lightbulb => "M9 18h6 M10 21h4 M12 3a6 6 0 0 0-4 10.5c1 1 1 2 1 3h6c0-1 0-2 1-3A6 6 0 0 0 12 3z",
            Icon::PuzzlePiece => "M4 7h4a2 2 0 1 1 4 0h4v4a2 2 0 1 1 0 4v4H4z",
            Icon::Rocket => "M12 2c4 3 5 8 3 13H9C7 10 8 5 12 2z M9 15l-3 4h4 M15 15l3 4h-4",
            Icon::Bolt => "M13 2L4 14h7l-1 8 9-12h-7z",
            Icon::Shield => "M12 2l8 3v6c0 5-3.5 9-8 11-4.5-2-8-6-8-11V5z M8 12l3 3 5-6",
            Icon::Coins => "M12 4c4.4 0 8 1.3 8 3s-3.6 3-8 3-8-1.3-8-3 3.6-3 8-3z M4 7v10c0 1.7 3.6 3 8 3s8-1.3 8-3V7 M4 12c0 1.7 3.6 3 8 3s8-1.3 8-3",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d={props.icon.path()} />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use yew::ServerRenderer;

    const ALL: [Icon; 10] = [
        Icon::ChartLine,
        Icon::ChessKnight,
        Icon::Cogs,
        Icon::GraduationCap,
        Icon::Lightbulb,
        Icon::PuzzlePiece,
        Icon::Rocket,
        Icon::Bolt,
        Icon::Shield,
        Icon::Coins,
    ];

    #[test]
    fn every_icon_has_its_own_drawing() {
        let paths: HashSet<&str> = ALL.iter().map(|icon| icon.path()).collect();
        assert_eq!(paths.len(), ALL.len());
        assert!(paths.iter().all(|p| p.starts_with('M')));
    }

    #[tokio::test]
    async fn glyph_draws_the_path_for_its_icon() {
        let html = ServerRenderer::<Glyph>::with_props(|| GlyphProps {
            icon: Icon::Rocket,
            class: classes!("tile-icon"),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"class="icon tile-icon""#));
        assert!(html.contains(&format!(r#"d="{}""#, Icon::Rocket.path())));
    }
}
