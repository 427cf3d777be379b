use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::hover::{hover_listeners, Hover};
use crate::config::FALLBACK_TEAM_PHOTO;
use crate::content;

#[derive(Properties, PartialEq)]
pub struct TeamMemberProps {
    pub member: &'static content::TeamMember,
}

/// Circular avatar that reveals the member's details while hovered.
#[function_component(TeamMember)]
pub fn team_member(props: &TeamMemberProps) -> Html {
    let member = props.member;
    let hover = use_state(Hover::default);
    let image_failed = use_state(|| false);

    let listeners = {
        let hover = hover.clone();
        hover_listeners::<MouseEvent>(member.name, *hover, Callback::from(move |next| hover.set(next)))
    };

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            if !*image_failed {
                warn!("photo for {} failed to load, using fallback", member.name);
                image_failed.set(true);
            }
        })
    };

    html! {
        <div
            class="team-member"
            onmouseenter={listeners.onmouseenter}
            onmouseleave={listeners.onmouseleave}
        >
            <img
                src={photo_src(member, *image_failed)}
                alt={member.name}
                class="team-photo"
                onerror={onerror}
            />
            <MemberOverlay member={member} visible={hover.is_hovered()} />
        </div>
    }
}

fn photo_src(member: &content::TeamMember, image_failed: bool) -> &'static str {
    if image_failed || member.image_url.is_empty() {
        FALLBACK_TEAM_PHOTO
    } else {
        member.image_url
    }
}

#[derive(Properties, PartialEq)]
pub struct MemberOverlayProps {
    pub member: &'static content::TeamMember,
    pub visible: bool,
}

#[function_component(MemberOverlay)]
pub fn member_overlay(props: &MemberOverlayProps) -> Html {
    let member = props.member;
    html! {
        <div class={classes!("member-overlay", props.visible.then_some("visible"))}>
            <h4>{member.name}</h4>
            <p class="member-title">{member.title}</p>
            // An empty description still gets its element.
            <p class="member-description">{member.description}</p>
            <a
                href={member.profile_url}
                class="member-link"
                target="_blank"
                rel="noopener noreferrer"
            >
                {"LinkedIn"}
            </a>
        </div>
    }
}
