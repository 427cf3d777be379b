use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::hover::{hover_listeners, Hover};
use crate::components::icon::{Glyph, Icon};

#[derive(Properties, PartialEq)]
pub struct TileProps {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// Flip card: icon and title on the front, description on the back while hovered.
#[function_component(Tile)]
pub fn tile(props: &TileProps) -> Html {
    let hover = use_state(Hover::default);

    let listeners = {
        let hover = hover.clone();
        hover_listeners::<MouseEvent>(props.title, *hover, Callback::from(move |next| hover.set(next)))
    };

    html! {
        <div
            class="tile"
            onmouseenter={listeners.onmouseenter}
            onmouseleave={listeners.onmouseleave}
        >
            <TileFaces
                title={props.title}
                description={props.description}
                icon={props.icon}
                flipped={hover.is_hovered()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TileFacesProps {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub flipped: bool,
}

/// Both faces stay in the markup; `flipped` only decides which one is shown.
#[function_component(TileFaces)]
pub fn tile_faces(props: &TileFacesProps) -> Html {
    html! {
        <div class={classes!("tile-inner", props.flipped.then_some("flipped"))}>
            <div class="tile-front">
                <Glyph icon={props.icon} class="tile-icon" />
                <h3>{props.title}</h3>
            </div>
            <div class="tile-back">
                <p>{props.description}</p>
            </div>
        </div>
    }
}
