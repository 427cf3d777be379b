use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::Glyph;
use crate::components::team_member::TeamMember;
use crate::components::tile::Tile;
use crate::config::{COMPANY_NAME, COPYRIGHT, LOGO_PATH};
use crate::content::{APPROACH_STEPS, BENEFITS, SERVICES, TEAM};
use crate::navigation::{scroll_in_document, SECTIONS};
use crate::styles::STYLES;
use crate::theme::{toggle_listener, Theme};

/// One button per page section; clicking scrolls that section into view.
#[function_component(SectionLinks)]
fn section_links() -> Html {
    html! {
        <div class="nav-links">
            {
                SECTIONS.iter().map(|&(id, label)| {
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_in_document(id);
                    });
                    html! {
                        <button key={id} class="nav-link" onclick={onclick}>{label}</button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <header class="top-nav">
            <nav>
                <SectionLinks />
            </nav>
            <button class="theme-toggle" onclick={props.on_toggle_theme.clone()}>
                {theme.toggle_label()}
            </button>
        </header>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_state(Theme::default);

    let on_toggle_theme = {
        let handle = theme.clone();
        toggle_listener::<MouseEvent>(*theme, Callback::from(move |next| handle.set(next)))
    };

    html! {
        <LandingView theme={*theme} on_toggle_theme={on_toggle_theme} />
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingViewProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
}

/// The whole page for a given theme, which it also provides to descendants.
#[function_component(LandingView)]
pub fn landing_view(props: &LandingViewProps) -> Html {
    let theme = props.theme;

    html! {
        <ContextProvider<Theme> context={theme}>
            <div class={classes!("landing-page", theme.root_class())}>
                <style>{STYLES}</style>
                <Header on_toggle_theme={props.on_toggle_theme.clone()} />

                <div class="hero">
                    <img src={LOGO_PATH} alt="Logo" class="logo" />
                    <h1>{COMPANY_NAME}</h1>
                </div>

                <section id="services" class="section alt">
                    <h2>{"Comprehensive AI Consulting Services"}</h2>
                    <div class="grid">
                        {
                            SERVICES.iter().enumerate().map(|(index, service)| html! {
                                <Tile
                                    key={index}
                                    title={service.title}
                                    description={service.description}
                                    icon={service.icon}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="approach" class="section">
                    <h2>{"Our Proven Approach to AI Success"}</h2>
                    <div class="approach-list">
                        {
                            APPROACH_STEPS.iter().enumerate().map(|(index, step)| html! {
                                <div key={index} class="approach-step">
                                    <Glyph icon={step.icon} />
                                    <div>
                                        <h4>{step.name}</h4>
                                        <p>{step.description}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="benefits" class="section alt">
                    <h2>{"Why Partner With Us"}</h2>
                    <div class="grid">
                        {
                            BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                                <Tile
                                    key={index}
                                    title={benefit.title}
                                    description={benefit.description}
                                    icon={benefit.icon}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="team" class="section">
                    <h2>{"Meet the Team Behind Your AI Transformation"}</h2>
                    <p class="team-intro">
                        {"We are a team of AI and business strategy experts with deep experience in developing and implementing AI solutions across various industries."}
                    </p>
                    <div class="grid">
                        {
                            TEAM.iter().enumerate().map(|(index, member)| html! {
                                <TeamMember key={index} member={member} />
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <footer id="contact" class="footer">
                    <p>{COPYRIGHT}</p>
                    <SectionLinks />
                </footer>
            </div>
        </ContextProvider<Theme>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::recorder;
    use yew::ServerRenderer;

    async fn render_landing() -> String {
        ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await
    }

    /// Byte offset of the text node `text`, asserting it occurs exactly once.
    fn position_of(html: &str, text: &str) -> usize {
        let needle = format!(">{}<", text);
        assert_eq!(html.matches(&needle).count(), 1, "{:?} should render once", text);
        html.find(&needle).expect("text rendered")
    }

    fn assert_in_order(html: &str, texts: impl IntoIterator<Item = &'static str>) {
        let positions: Vec<usize> = texts
            .into_iter()
            .filter(|text| !text.is_empty())
            .map(|text| position_of(html, text))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {:?}", positions);
    }

    #[tokio::test]
    async fn services_render_once_in_order() {
        let html = render_landing().await;
        assert_in_order(&html, SERVICES.iter().flat_map(|s| [s.title, s.description]));
    }

    #[tokio::test]
    async fn approach_steps_render_once_in_order() {
        let html = render_landing().await;
        assert_in_order(&html, APPROACH_STEPS.iter().flat_map(|s| [s.name, s.description]));
    }

    #[tokio::test]
    async fn benefits_render_once_in_order() {
        let html = render_landing().await;
        assert_in_order(&html, BENEFITS.iter().flat_map(|b| [b.title, b.description]));
    }

    #[tokio::test]
    async fn team_renders_once_in_order() {
        let html = render_landing().await;
        assert_in_order(&html, TEAM.iter().flat_map(|m| [m.name, m.description]));

        let ben = html.find("<h4>Ben</h4>").expect("Ben rendered");
        let empty = html[ben..].find(r#"<p class="member-description"></p>"#);
        assert!(empty.is_some(), "Ben's empty description should still render");
    }

    #[tokio::test]
    async fn starts_in_light_mode() {
        let html = render_landing().await;
        assert!(html.contains(r#"<div class="landing-page">"#));
        assert!(!html.contains("landing-page dark-mode"));
        assert!(html.contains(">Dark Mode<"));
    }

    async fn render_view(theme: Theme) -> String {
        ServerRenderer::<LandingView>::with_props(move || LandingViewProps {
            theme,
            on_toggle_theme: Callback::from(|_: MouseEvent| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn toggling_n_times_is_dark_iff_n_is_odd() {
        let (set, seen) = recorder();
        let mut theme = Theme::default();

        for n in 0..6 {
            let html = render_view(theme).await;
            if n % 2 == 1 {
                assert!(html.contains(r#"<div class="landing-page dark-mode">"#), "after {} toggles", n);
                assert!(html.contains(">Light Mode<"));
            } else {
                assert!(html.contains(r#"<div class="landing-page">"#), "after {} toggles", n);
                assert!(html.contains(">Dark Mode<"));
            }

            toggle_listener::<()>(theme, set.clone()).emit(());
            theme = *seen.borrow().last().expect("toggle recorded");
        }
    }

    #[tokio::test]
    async fn every_nav_target_exists_on_the_page() {
        let html = render_landing().await;
        for (id, label) in SECTIONS {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing section {}", id);
            // Header and footer both carry the link.
            assert_eq!(html.matches(&format!(">{}<", label)).count(), 2);
        }
    }

    #[tokio::test]
    async fn hero_shows_logo_and_company() {
        let html = render_landing().await;
        assert!(html.contains(&format!(r#"src="{}""#, LOGO_PATH)));
        assert!(html.contains(&format!("<h1>{}</h1>", COMPANY_NAME)));
        assert!(html.contains(COPYRIGHT));
    }
}
