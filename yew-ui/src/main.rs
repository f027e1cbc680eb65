/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use tutorials_ui::AppRoot;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Failed to initialise logging: {e}").into());
    }
    yew::Renderer::<AppRoot>::new().render();
}
