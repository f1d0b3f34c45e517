//! Parser de ida y vuelta para `Document`.
//!
//! Descenso recursivo sobre un cursor de caracteres, suficiente para
//! reconstruir cualquier salida de `Document::serialize` y para leer marcado
//! externo razonable (declaración inicial, comentarios, atributos con
//! comillas simples o dobles, entidades con nombre y numéricas).
//!
//! No es un parser de XML completo: sin DOCTYPE, sin CDATA, sin namespaces
//! resueltos. El contrato que importa al pipeline es la propiedad de ida y
//! vuelta: `parse_document(doc.serialize()) == doc` estructuralmente.

use crate::document::{is_name_char, Document, Element, Node};
use crate::DomainError;

/// Parsea el texto completo como un documento con una única raíz.
pub fn parse_document(input: &str) -> Result<Document, DomainError> {
    let chars: Vec<char> = input.chars().collect();
    let mut cur = Cursor { chars: &chars, pos: 0 };

    cur.skip_prolog()?;
    let root = cur.parse_element()?;
    cur.skip_misc()?;
    if !cur.at_end() {
        return Err(cur.error("contenido después del elemento raíz"));
    }
    Ok(Document::new(root))
}

struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn starts_with(&self, pat: &str) -> bool {
        pat.chars().enumerate().all(|(i, p)| self.chars.get(self.pos + i) == Some(&p))
    }

    fn eat(&mut self, pat: &str) -> bool {
        if self.starts_with(pat) {
            self.pos += pat.chars().count();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, pat: &str) -> Result<(), DomainError> {
        if self.eat(pat) {
            Ok(())
        } else {
            Err(self.error(&format!("se esperaba {pat:?}")))
        }
    }

    fn error(&self, message: &str) -> DomainError {
        DomainError::Markup { offset: self.pos, message: message.to_string() }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// Declaración `<?...?>` y comentarios previos a la raíz.
    fn skip_prolog(&mut self) -> Result<(), DomainError> {
        self.skip_ws();
        if self.starts_with("<?") {
            while !self.eat("?>") {
                if self.bump().is_none() {
                    return Err(self.error("declaración sin cerrar"));
                }
            }
        }
        self.skip_misc()
    }

    /// Espacios y comentarios entre construcciones de nivel superior.
    fn skip_misc(&mut self) -> Result<(), DomainError> {
        loop {
            self.skip_ws();
            if self.starts_with("<!--") {
                self.skip_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), DomainError> {
        self.expect("<!--")?;
        while !self.eat("-->") {
            if self.bump().is_none() {
                return Err(self.error("comentario sin cerrar"));
            }
        }
        Ok(())
    }

    fn parse_name(&mut self) -> Result<String, DomainError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_name_char(c)) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error("se esperaba un nombre"));
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_element(&mut self) -> Result<Element, DomainError> {
        self.expect("<")?;
        let name = self.parse_name()?;
        let mut element = Element::new(&name)?;

        loop {
            self.skip_ws();
            if self.eat("/>") {
                return Ok(element);
            }
            if self.eat(">") {
                break;
            }
            let key = self.parse_name()?;
            self.skip_ws();
            self.expect("=")?;
            self.skip_ws();
            let value = self.parse_attr_value()?;
            element.push_attr(key, value);
        }

        // Hijos hasta la etiqueta de cierre.
        loop {
            if self.starts_with("<!--") {
                self.skip_comment()?;
                continue;
            }
            if self.starts_with("</") {
                self.expect("</")?;
                let close = self.parse_name()?;
                if close != name {
                    return Err(self.error(&format!("cierre {close:?} no coincide con {name:?}")));
                }
                self.skip_ws();
                self.expect(">")?;
                return Ok(element);
            }
            if self.starts_with("<") {
                let child = self.parse_element()?;
                element.push_node(Node::Element(child));
                continue;
            }
            if self.at_end() {
                return Err(self.error(&format!("elemento {name:?} sin cerrar")));
            }
            let text = self.parse_text()?;
            element.push_node(Node::Text(text));
        }
    }

    fn parse_attr_value(&mut self) -> Result<String, DomainError> {
        let quote = match self.bump() {
            Some(c @ ('"' | '\'')) => c,
            _ => return Err(self.error("se esperaba comilla de atributo")),
        };
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("atributo sin cerrar")),
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(value);
                }
                Some('&') => value.push(self.parse_entity()?),
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn parse_text(&mut self) -> Result<String, DomainError> {
        let mut text = String::new();
        loop {
            match self.peek() {
                None | Some('<') => return Ok(text),
                Some('&') => text.push(self.parse_entity()?),
                Some(c) => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn parse_entity(&mut self) -> Result<char, DomainError> {
        self.expect("&")?;
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c != ';') {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect();
        self.expect(";")?;
        match name.as_str() {
            "amp" => Ok('&'),
            "lt" => Ok('<'),
            "gt" => Ok('>'),
            "quot" => Ok('"'),
            "apos" => Ok('\''),
            numeric if numeric.starts_with('#') => {
                let code = if let Some(hex) = numeric.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16)
                } else {
                    numeric[1..].parse()
                };
                code.ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error(&format!("entidad numérica inválida: &{numeric};")))
            }
            other => Err(self.error(&format!("entidad desconocida: &{other};"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Element};

    fn roundtrip(doc: &Document) {
        let text = doc.serialize();
        let parsed = parse_document(&text).expect("parse de salida propia");
        assert_eq!(&parsed, doc, "round-trip alterado para {text}");
    }

    #[test]
    fn roundtrip_raiz_vacia() {
        roundtrip(&Document::new(Element::named("root")));
    }

    #[test]
    fn roundtrip_arbol_anidado() {
        let doc = Document::new(Element::named("beans")
                                    .attr("xmlns", "urn:demo")
                                    .child(Element::named("bean").attr("id", "a").text("uno & dos"))
                                    .child(Element::named("bean").attr("id", "b")));
        roundtrip(&doc);
    }

    #[test]
    fn acepta_declaracion_y_comentarios() {
        let parsed = parse_document("<?xml version=\"1.0\"?>\n<!-- c -->\n<r a='1'><!-- dentro --><x/></r>\n")
            .expect("parse");
        assert_eq!(parsed.root().name(), "r");
        assert_eq!(parsed.root().attributes().get("a").map(String::as_str), Some("1"));
        assert_eq!(parsed.root().children().len(), 1);
    }

    #[test]
    fn decodifica_entidades() {
        let parsed = parse_document("<t>&lt;a&gt; &amp; &#65;&#x42;</t>").expect("parse");
        match &parsed.root().children()[0] {
            crate::document::Node::Text(t) => assert_eq!(t, "<a> & AB"),
            other => unreachable!("se esperaba texto, hay {other:?}"),
        }
    }

    #[test]
    fn rechaza_cierre_desbalanceado() {
        assert!(parse_document("<a><b></a></b>").is_err());
        assert!(parse_document("<a>").is_err());
        assert!(parse_document("<a/><b/>").is_err());
    }
}
