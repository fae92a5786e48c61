#![cfg(target_arch = "wasm32")]
use js_sys::JSON;
use slipview_wasm::{abi_version, SlipviewCarousel};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

// 384px viewport + the default 16px gap gives a 400px slide-to-slide
// distance, so index targets land on multiples of 400.
const VIEWPORT: f32 = 384.0;

fn parse_json(text: &str) -> JsValue {
    JSON::parse(text).expect("test JSON parses")
}

fn test_images() -> JsValue {
    parse_json(r#"["a.jpg", "b.jpg", "c.jpg"]"#)
}

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let carousel = SlipviewCarousel::new(test_images(), VIEWPORT, JsValue::UNDEFINED);
    assert!(carousel.is_ok());
}

#[wasm_bindgen_test]
fn construct_with_partial_options() {
    let opts = parse_json(r#"{ "default_index": 2 }"#);
    let carousel = SlipviewCarousel::new(test_images(), VIEWPORT, opts).unwrap();
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.indicator(), "3 / 3");
}

#[wasm_bindgen_test]
fn flick_and_update() {
    let mut carousel = SlipviewCarousel::new(test_images(), VIEWPORT, JsValue::NULL).unwrap();

    let trace = parse_json(
        r#"{
            "commands": [
                "GestureStart",
                { "GestureMove": { "offset_x": 50.0 } },
                { "GestureRelease": { "offset_x": 50.0, "velocity_x": 0.3, "direction_x": 1.0 } }
            ]
        }"#,
    );
    let outputs = carousel.update(0.0, trace).unwrap();

    // Outputs should be an object with { events }
    let obj = js_sys::Object::from(outputs);
    let events = js_sys::Reflect::get(&obj, &JsValue::from_str("events")).unwrap();
    let array = js_sys::Array::from(&events);
    assert_eq!(array.length(), 1);

    // Tick until the snap animation settles on slide 1.
    for _ in 0..1200 {
        carousel.update(1.0 / 60.0, JsValue::UNDEFINED).unwrap();
        if carousel.position() == 400.0 {
            break;
        }
    }
    assert_eq!(carousel.position(), 400.0);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.indicator(), "2 / 3");
}

#[wasm_bindgen_test]
fn pointer_callbacks_buffer_until_update() {
    let mut carousel = SlipviewCarousel::new(test_images(), VIEWPORT, JsValue::UNDEFINED).unwrap();

    carousel.gesture_start();
    carousel.gesture_move(250.0);
    // Nothing applied until the frame tick.
    assert_eq!(carousel.position(), 0.0);

    carousel.update(0.0, JsValue::UNDEFINED).unwrap();
    assert_eq!(carousel.position(), 250.0);
    assert_eq!(carousel.indicator(), "2 / 3");

    carousel.gesture_release(250.0, 0.0, 1.0);
    let outputs = carousel.update(0.0, JsValue::UNDEFINED).unwrap();
    let obj = js_sys::Object::from(outputs);
    let events = js_sys::Reflect::get(&obj, &JsValue::from_str("events")).unwrap();
    assert_eq!(js_sys::Array::from(&events).length(), 1);
}

#[wasm_bindgen_test]
fn zoom_callback_locks_navigation() {
    let mut carousel = SlipviewCarousel::new(test_images(), VIEWPORT, JsValue::UNDEFINED).unwrap();

    carousel.set_zoom(0, 2.0);
    carousel.gesture_start();
    carousel.gesture_move(300.0);
    carousel.gesture_release(300.0, 0.5, 1.0);
    let outputs = carousel.update(0.0, JsValue::UNDEFINED).unwrap();

    let obj = js_sys::Object::from(outputs);
    let events = js_sys::Reflect::get(&obj, &JsValue::from_str("events")).unwrap();
    assert_eq!(js_sys::Array::from(&events).length(), 0);
    assert_eq!(carousel.position(), 0.0);
}

#[wasm_bindgen_test]
fn swipe_to_animates() {
    let mut carousel = SlipviewCarousel::new(test_images(), VIEWPORT, JsValue::UNDEFINED).unwrap();
    carousel.swipe_to(2);
    let outputs = carousel.update(1.0 / 60.0, JsValue::UNDEFINED).unwrap();
    // Imperative navigation does not emit committed-index events.
    let obj = js_sys::Object::from(outputs);
    let events = js_sys::Reflect::get(&obj, &JsValue::from_str("events")).unwrap();
    assert_eq!(js_sys::Array::from(&events).length(), 0);
    assert!(carousel.position() > 0.0);
}

// Negative/error-path tests

/// it should error cleanly on an empty image list
#[wasm_bindgen_test]
fn empty_images_errors() {
    let images = parse_json("[]");
    let res = SlipviewCarousel::new(images, VIEWPORT, JsValue::UNDEFINED);
    assert!(res.is_err());
}

/// it should error cleanly when images is not a string array
#[wasm_bindgen_test]
fn malformed_images_errors() {
    let res = SlipviewCarousel::new(JsValue::from_f64(123.0), VIEWPORT, JsValue::UNDEFINED);
    assert!(res.is_err());
}

/// it should error cleanly when update receives invalid inputs JSON
#[wasm_bindgen_test]
fn invalid_inputs_errors() {
    let mut carousel = SlipviewCarousel::new(test_images(), VIEWPORT, JsValue::NULL).unwrap();
    let bad_inputs = JsValue::from_str("not-inputs");
    let res = carousel.update(0.016, bad_inputs);
    assert!(res.is_err());
}
