use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use slipview_core::{Carousel, CarouselOptions, Command, Inputs, Outputs};

#[wasm_bindgen]
pub struct SlipviewCarousel {
    core: Carousel,
    /// Commands buffered by the pointer-callback methods between frames,
    /// drained (in arrival order) ahead of the batch passed to `update`.
    pending: Inputs,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl SlipviewCarousel {
    /// Create a carousel over an ordered image list. Pass a JSON options
    /// object or undefined/null for defaults.
    /// Example:
    ///   new SlipviewCarousel(["a.jpg", "b.jpg"], 384, { default_index: 1 })
    #[wasm_bindgen(constructor)]
    pub fn new(
        images: JsValue,
        viewport_width: f32,
        options: JsValue,
    ) -> Result<SlipviewCarousel, JsError> {
        console_error_panic_hook::set_once();

        let images: Vec<String> = swb::from_value(images)
            .map_err(|e| JsError::new(&format!("images error: {e}")))?;
        let opts: CarouselOptions = if jsvalue_is_undefined_or_null(&options) {
            CarouselOptions::default()
        } else {
            swb::from_value(options).map_err(|e| JsError::new(&format!("options error: {e}")))?
        };

        let core = Carousel::new(images, viewport_width, opts)
            .map_err(|e| JsError::new(&format!("carousel error: {e}")))?;
        Ok(SlipviewCarousel {
            core,
            pending: Inputs::default(),
        })
    }

    /// Step the carousel by dt (seconds) with inputs JSON (or undefined/null
    /// for none). Commands buffered by the pointer callbacks since the last
    /// frame run first. Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let extra: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let mut inputs = std::mem::take(&mut self.pending);
        inputs.commands.extend(extra.commands);
        let out: &Outputs = self.core.update(dt, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Pointer-down on the slide strip.
    #[wasm_bindgen(js_name = gesture_start)]
    pub fn gesture_start(&mut self) {
        self.pending.commands.push(Command::GestureStart);
    }

    /// Pointer-move sample; `offset_x` is the absolute horizontal scroll
    /// offset implied by the finger, in pixels from slide 0.
    #[wasm_bindgen(js_name = gesture_move)]
    pub fn gesture_move(&mut self, offset_x: f32) {
        self.pending.commands.push(Command::GestureMove { offset_x });
    }

    /// Pointer-up. `velocity_x` is the release speed magnitude in px/ms and
    /// `direction_x` is -1, 0, or 1.
    #[wasm_bindgen(js_name = gesture_release)]
    pub fn gesture_release(&mut self, offset_x: f32, velocity_x: f32, direction_x: f32) {
        self.pending.commands.push(Command::GestureRelease {
            offset_x,
            velocity_x,
            direction_x,
        });
    }

    /// Zoom factor report from a slide's own pinch gesture layer.
    #[wasm_bindgen(js_name = set_zoom)]
    pub fn set_zoom(&mut self, slide: usize, factor: f32) {
        self.pending.commands.push(Command::ZoomChanged { slide, factor });
    }

    /// Single-tap report for a slide.
    #[wasm_bindgen]
    pub fn tap(&mut self, slide: usize) {
        self.pending.commands.push(Command::Tap { slide });
    }

    /// Animate to a slide index. Out-of-range indices are honored as-is;
    /// keeping the argument in bounds is the caller's job.
    #[wasm_bindgen(js_name = swipe_to)]
    pub fn swipe_to(&mut self, index: i32) {
        self.core.swipe_to(index);
    }

    /// Live "current / total" page indicator text.
    #[wasm_bindgen]
    pub fn indicator(&self) -> String {
        self.core.indicator()
    }

    /// Continuous scroll position in pixels, for the host's render transform.
    #[wasm_bindgen]
    pub fn position(&self) -> f32 {
        self.core.position()
    }

    #[wasm_bindgen(js_name = current_index)]
    pub fn current_index(&self) -> usize {
        self.core.current_index()
    }

    #[wasm_bindgen]
    pub fn count(&self) -> usize {
        self.core.count()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
