//! Pure Yew view components shared by the dashboard and place screens.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use yew::prelude::*;

/// Rounded primary call-to-action button.
#[derive(Properties, PartialEq)]
pub struct TextButtonProps {
    pub label: String,
    #[prop_or_default]
    pub class: Classes,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(TextButton)]
pub fn text_button(props: &TextButtonProps) -> Html {
    html! {
        <button class={classes!("text-button", props.class.clone())} onclick={props.onclick.clone()}>
            { &props.label }
        </button>
    }
}

/// Call-to-action button with a leading icon.
#[derive(Properties, PartialEq)]
pub struct TextIconButtonProps {
    pub label: String,
    /// Asset path of the leading icon.
    pub icon: String,
    #[prop_or_default]
    pub class: Classes,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(TextIconButton)]
pub fn text_icon_button(props: &TextIconButtonProps) -> Html {
    html! {
        <button class={classes!("text-icon-button", props.class.clone())} onclick={props.onclick.clone()}>
            <img class="button-icon" src={props.icon.clone()} alt="" />
            <span>{ &props.label }</span>
        </button>
    }
}

/// Header bar with a round back button, a centered title and an
/// optional settings button on the right edge.
#[derive(Properties, PartialEq)]
pub struct HeaderBarProps {
    #[prop_or_default]
    pub title: String,
    pub on_left: Callback<MouseEvent>,
    #[prop_or(false)]
    pub right: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(HeaderBar)]
pub fn header_bar(props: &HeaderBarProps) -> Html {
    html! {
        <div class={classes!("header-bar", props.class.clone())}>
            <button class="header-round-button" onclick={props.on_left.clone()}>
                <img src="assets/icons/left_arrow.svg" alt="back" />
            </button>
            <div class="header-title">{ &props.title }</div>
            if props.right {
                <button class="header-round-button">
                    <img src="assets/icons/settings.svg" alt="settings" />
                </button>
            } else {
                <div class="header-round-spacer"></div>
            }
        </div>
    }
}

/// One star icon per whole rating point, partial points rounding up.
#[derive(Properties, PartialEq)]
pub struct RatingProps {
    pub rate: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Rating)]
pub fn rating(props: &RatingProps) -> Html {
    let stars = props.rate.ceil().max(0.0) as usize;
    html! {
        <div class={classes!("rating-row", props.class.clone())}>
            { (0..stars).map(|i| html! {
                <img key={format!("full-{i}")} class="rating-star"
                    src="assets/icons/star.svg" alt="star" />
            }).collect::<Html>() }
        </div>
    }
}
