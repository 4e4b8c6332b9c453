// Utility helpers shared by the components.

use crate::model::Size;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn format_scale(scale: f64) -> String {
    format!("{:.2}", scale)
}

pub fn format_size(size: &Size) -> String {
    format!("{}x{}", size.width as i64, size.height as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_scale_and_size() {
        assert_eq!(format_scale(0.400390625), "0.40");
        assert_eq!(
            format_size(&Size {
                width: 410.2,
                height: 307.8
            }),
            "410x307"
        );
    }
}
