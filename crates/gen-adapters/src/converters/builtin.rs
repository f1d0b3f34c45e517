//! Converters que el repo trae consigo.
//!
//! Ambos aceptan `serde_json::Value` (el tipo que produce el backend
//! `json`); como el registro es por tipo exacto sólo uno de los dos puede
//! estar activo en un registry dado: la configuración elige.

use gen_core::typed_converter;

typed_converter! {
    JsonPrettyConverter for serde_json::Value {
        convert(value) {
            serde_json::to_string_pretty(value).map_err(|e| e.to_string())
        }
    }
}

typed_converter! {
    JsonCompactConverter for serde_json::Value {
        convert(value) {
            serde_json::to_string(value).map_err(|e| e.to_string())
        }
    }
}
