//! Browser tests for the components and the suspending script hook.
//!
//! Run with `wasm-pack test --headless --chrome crates/applepay-yew`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use applepay_core::{ButtonKind, ButtonStyle, SdkConfig};
use applepay_yew::{use_sdk_script, ApplePayButton};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew::suspense::Suspense;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_point() -> web_sys::Element {
    let mount = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&mount).unwrap();
    mount
}

#[function_component(StyledButton)]
fn styled_button() -> Html {
    html! {
        <ApplePayButton
            button_style={ButtonStyle::WhiteOutline}
            kind={ButtonKind::Buy}
            locale="de-DE"
        />
    }
}

#[wasm_bindgen_test]
async fn button_renders_custom_element_with_attributes() {
    let mount = mount_point();
    yew::Renderer::<StyledButton>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(50)).await;

    let button = mount
        .query_selector("apple-pay-button")
        .unwrap()
        .expect("custom element should be rendered");
    assert_eq!(
        button.get_attribute("buttonstyle").as_deref(),
        Some("white-outline")
    );
    assert_eq!(button.get_attribute("type").as_deref(), Some("buy"));
    assert_eq!(button.get_attribute("locale").as_deref(), Some("de-DE"));
}

#[derive(Properties, PartialEq)]
struct ClickHostProps {
    onclick: Callback<MouseEvent>,
}

#[function_component(ClickHost)]
fn click_host(props: &ClickHostProps) -> Html {
    html! { <ApplePayButton onclick={props.onclick.clone()} /> }
}

#[wasm_bindgen_test]
async fn button_click_reaches_explicit_handler() {
    let clicks = Rc::new(Cell::new(0u32));
    let counter = clicks.clone();
    let onclick = Callback::from(move |_| counter.set(counter.get() + 1));

    let mount = mount_point();
    yew::Renderer::<ClickHost>::with_root_and_props(mount.clone(), ClickHostProps { onclick })
        .render();
    sleep(Duration::from_millis(50)).await;

    let button = mount
        .query_selector("apple-pay-button")
        .unwrap()
        .expect("custom element should be rendered");
    let event = web_sys::MouseEvent::new("click").unwrap();
    button.dispatch_event(&event).unwrap();

    sleep(Duration::from_millis(10)).await;
    assert_eq!(clicks.get(), 1);
}

#[function_component(SdkProbe)]
fn sdk_probe() -> HtmlResult {
    let config = SdkConfig::new("data:text/javascript,void%200;//hook-test").without_cross_origin();
    let loaded = use_sdk_script(&config, false)?;
    let status = match loaded {
        Ok(loaded) => loaded.to_string(),
        Err(err) => err.to_string(),
    };
    Ok(html! { <span id="sdk-status">{ status }</span> })
}

#[function_component(SdkHost)]
fn sdk_host() -> Html {
    let fallback = html! { <span id="sdk-loading">{"loading"}</span> };
    html! {
        <Suspense {fallback}>
            <SdkProbe />
        </Suspense>
    }
}

#[wasm_bindgen_test]
async fn sdk_hook_suspends_then_reports_loaded() {
    let mount = mount_point();
    yew::Renderer::<SdkHost>::with_root(mount.clone()).render();

    // While the script load is in flight the fallback is shown
    sleep(Duration::from_millis(10)).await;
    assert!(mount.query_selector("#sdk-loading").unwrap().is_some());

    sleep(Duration::from_millis(300)).await;
    let status = mount
        .query_selector("#sdk-status")
        .unwrap()
        .expect("probe should have resumed");
    assert_eq!(status.text_content().as_deref(), Some("true"));
}
