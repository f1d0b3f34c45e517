//! Canonical JSON minimal – claves de objeto ordenadas, sin espacios.
//! La forma canónica alimenta los hashes de configuración y de corrida; dos
//! estructuras iguales deben producir exactamente los mismos bytes.

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => serde_json::to_string(s).unwrap(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let mut tree = BTreeMap::new();
            for (k, v) in map {
                tree.insert(k, to_canonical_json(v));
            }
            let items: Vec<String> = tree
                .into_iter()
                .map(|(k, v)| format!("{}:{}", serde_json::to_string(&k).unwrap(), v))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ordena_claves_de_objeto() {
        let a = json!({"b": 1, "a": [true, null]});
        assert_eq!(to_canonical_json(&a), r#"{"a":[true,null],"b":1}"#);
    }

    #[test]
    fn misma_estructura_misma_forma() {
        let x = json!({"k": {"z": 1, "y": 2}});
        let y = json!({"k": {"y": 2, "z": 1}});
        assert_eq!(to_canonical_json(&x), to_canonical_json(&y));
    }
}
