//! Hash helpers – abstracción para permitir cambiar de algoritmo sin tocar
//! el resto del core.

use blake3::Hasher;

use super::to_canonical_json;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hashea un `Value` JSON sobre su forma canónica.
pub fn hash_value(value: &serde_json::Value) -> String {
    hash_str(&to_canonical_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_estable_por_forma_canonica() {
        let a = hash_value(&json!({"x": 1, "y": 2}));
        let b = hash_value(&json!({"y": 2, "x": 1}));
        assert_eq!(a, b);
        assert_ne!(a, hash_value(&json!({"x": 1, "y": 3})));
    }
}
