//! Macro utilitaria para reducir boilerplate al definir converters tipados.
//!
//! Exportada en la raíz del crate para poder usarla como:
//!   use gen_core::typed_converter;

/// Declara un `Converter` para un tipo concreto.
///
/// Forma:
/// - typed_converter!(Name for ValueTy { convert(v) { ...expr Result<String, String>... } });
///
/// Genera un struct unitario con `new()` que implementa
/// `gen_core::render::Converter` con lookup por `TypeId` exacto; el cuerpo
/// recibe `v: &ValueTy` ya downcasteado.
#[macro_export]
macro_rules! typed_converter {
    (
        $name:ident for $value_ty:ty {
            convert($v_ident:ident) $body:block
        }
    ) => {
        #[derive(Clone, Debug)]
        pub struct $name;
        impl $name {
            pub fn new() -> Self { Self }
        }
        impl Default for $name {
            fn default() -> Self { Self::new() }
        }
        impl $crate::render::Converter for $name {
            fn value_type(&self) -> ::std::any::TypeId {
                ::std::any::TypeId::of::<$value_ty>()
            }
            fn value_type_name(&self) -> &'static str {
                ::std::any::type_name::<$value_ty>()
            }
            fn convert(&self, value: &dyn ::std::any::Any) -> Result<String, String> {
                let $v_ident: &$value_ty = match value.downcast_ref() {
                    Some(v) => v,
                    None => return Err(format!("valor no es {}", ::std::any::type_name::<$value_ty>())),
                };
                $body
            }
        }
    };
}
