//! Browser collation through `Intl.Collator`.

use js_sys::{Array, Intl, Object};
use shared::{Collation, KanaCollation};
use std::cmp::Ordering;
use std::sync::Arc;
use wasm_bindgen::JsValue;
use zoon::SendWrapper;

pub const DISPLAY_LOCALE: &str = "ja";

/// `Intl.Collator` for the display locale. Falls back to [`KanaCollation`]
/// when the collator returns something that is not a number.
#[derive(Clone)]
pub struct IntlCollation {
    collator: Arc<SendWrapper<Intl::Collator>>,
}

impl IntlCollation {
    pub fn new(locale: &str) -> Self {
        let locales = Array::of1(&JsValue::from_str(locale));
        let collator = Intl::Collator::new(&locales, &Object::new());
        Self {
            collator: Arc::new(SendWrapper::new(collator)),
        }
    }

    pub fn display_locale() -> Self {
        Self::new(DISPLAY_LOCALE)
    }
}

impl Collation for IntlCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let result = self.collator.compare().call2(
            &JsValue::UNDEFINED,
            &JsValue::from_str(a),
            &JsValue::from_str(b),
        );
        match result.ok().and_then(|value| value.as_f64()) {
            Some(order) if order < 0.0 => Ordering::Less,
            Some(order) if order > 0.0 => Ordering::Greater,
            Some(_) => Ordering::Equal,
            None => KanaCollation.compare(a, b),
        }
    }
}
