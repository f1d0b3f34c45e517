//! Documento de marcado estructurado.
//!
//! Un `Document` es el valor en forma de árbol que un script puede producir
//! en lugar de texto plano. El serializador es determinista:
//! - atributos en orden de inserción (`IndexMap`),
//! - sin pretty-printing ni espacios extra,
//! - escapado completo de texto y atributos.
//!
//! La única garantía de formato es que `parse_document(doc.serialize())`
//! reconstruye un documento estructuralmente igual (ver `markup_parser`).

use std::fmt;

use indexmap::IndexMap;

use crate::DomainError;

/// Documento completo: una raíz obligatoria.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

/// Elemento con nombre, atributos ordenados e hijos.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

/// Nodo hijo: sub-elemento o texto.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serialización determinista al texto de marcado.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.root.write_into(&mut out);
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Caracteres válidos para iniciar un nombre de elemento/atributo.
fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Caracteres válidos dentro de un nombre.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start(first) && chars.all(is_name_char),
        None => false,
    };
    if !valid {
        return Err(DomainError::Validation(format!("nombre de elemento inválido: {name:?}")));
    }
    Ok(())
}

impl Element {
    /// Crea un elemento validando el nombre.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        validate_name(name)?;
        Ok(Self { name: name.to_string(),
                  attributes: IndexMap::new(),
                  children: Vec::new() })
    }

    /// Variante para nombres conocidos en tiempo de compilación.
    /// Panica sólo ante un nombre literal inválido (error de programación).
    pub fn named(name: &'static str) -> Self {
        Self::new(name).expect("nombre literal de elemento inválido")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Builder: fija o reemplaza un atributo (mantiene orden de inserción).
    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Builder: agrega un sub-elemento.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder: agrega un nodo de texto.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub(crate) fn push_attr(&mut self, key: String, value: String) {
        self.attributes.insert(key, value);
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        self.children.push(node);
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (k, v) in &self.attributes {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            escape_attr(v, out);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_into(out),
                Node::Text(t) => escape_text(t, out),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializa_elemento_vacio_autocerrado() {
        let doc = Document::new(Element::named("root"));
        assert_eq!(doc.serialize(), "<root/>");
    }

    #[test]
    fn serializa_atributos_en_orden_de_insercion() {
        let doc = Document::new(Element::named("cfg").attr("b", "2").attr("a", "1"));
        assert_eq!(doc.serialize(), r#"<cfg b="2" a="1"/>"#);
    }

    #[test]
    fn escapa_texto_y_atributos() {
        let doc = Document::new(Element::named("m")
                                    .attr("q", "a\"b<c")
                                    .text("x & y < z"));
        assert_eq!(doc.serialize(), r#"<m q="a&quot;b&lt;c">x &amp; y &lt; z</m>"#);
    }

    #[test]
    fn rechaza_nombres_invalidos() {
        assert!(Element::new("").is_err());
        assert!(Element::new("1abc").is_err());
        assert!(Element::new("con espacio").is_err());
        assert!(Element::new("ns:ok-name_1.x").is_ok());
    }
}
