//! TypeScript rendering of the declaration model.

use crate::decl::{Declaration, Field, InterfaceDecl, TsType};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Renders an ordered sequence of declarations as TypeScript source.
///
/// # Examples
///
/// ```
/// use cube_records_codegen::{Declaration, print_declarations};
///
/// let decls = vec![
///     Declaration::Import { module: "cube-records".to_string() },
///     Declaration::EmptyExport,
/// ];
/// let source = print_declarations(&decls);
/// assert_eq!(source, "import \"cube-records\";\nexport {};\n");
/// ```
#[must_use]
pub fn print_declarations(declarations: &[Declaration]) -> String {
    let mut out = String::new();
    for declaration in declarations {
        render_declaration(&mut out, declaration, 0);
        out.push('\n');
    }
    out
}

fn render_declaration(out: &mut String, declaration: &Declaration, indent: usize) {
    match declaration {
        Declaration::Import { module } => {
            let _ = write!(out, "{}import {};", INDENT.repeat(indent), quote(module));
        }
        Declaration::Interface(decl) => render_interface(out, decl, indent),
        Declaration::TypeAlias { name, ty } => {
            let _ = write!(out, "{}type {name} = ", INDENT.repeat(indent));
            render_type(out, ty, indent);
            out.push(';');
        }
        Declaration::ModuleAugmentation { module, body } => {
            let _ = write!(out, "{}declare module {} {{", INDENT.repeat(indent), quote(module));
            for nested in body {
                out.push('\n');
                render_declaration(out, nested, indent + 1);
            }
            let _ = write!(out, "\n{}}}", INDENT.repeat(indent));
        }
        Declaration::EmptyExport => {
            let _ = write!(out, "{}export {{}};", INDENT.repeat(indent));
        }
    }
}

fn render_interface(out: &mut String, decl: &InterfaceDecl, indent: usize) {
    let _ = write!(out, "{}interface {}", INDENT.repeat(indent), decl.name);
    if !decl.type_params.is_empty() {
        let _ = write!(out, "<{}>", decl.type_params.join(", "));
    }
    out.push_str(" {");
    for field in &decl.fields {
        out.push('\n');
        render_field(out, field, indent + 1);
    }
    if decl.fields.is_empty() {
        out.push('}');
    } else {
        let _ = write!(out, "\n{}}}", INDENT.repeat(indent));
    }
}

fn render_field(out: &mut String, field: &Field, indent: usize) {
    let _ = write!(
        out,
        "{}{}{}: ",
        INDENT.repeat(indent),
        property_name(&field.name),
        if field.optional { "?" } else { "" }
    );
    render_type(out, &field.ty, indent);
    out.push(';');
}

fn render_type(out: &mut String, ty: &TsType, indent: usize) {
    match ty {
        TsType::Primitive(primitive) => out.push_str(primitive.as_str()),
        TsType::StringLiteral(value) => out.push_str(&quote(value)),
        TsType::Tuple(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render_type(out, element, indent);
            }
            out.push(']');
        }
        TsType::Object(fields) => {
            if fields.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for field in fields {
                out.push('\n');
                render_field(out, field, indent + 1);
            }
            let _ = write!(out, "\n{}}}", INDENT.repeat(indent));
        }
        TsType::Reference { name, args } => {
            out.push_str(name);
            if !args.is_empty() {
                out.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    render_type(out, arg, indent);
                }
                out.push('>');
            }
        }
        TsType::Union(alternatives) => {
            for (i, alternative) in alternatives.iter().enumerate() {
                if i > 0 {
                    out.push_str(" | ");
                }
                render_type(out, alternative, indent);
            }
        }
    }
}

/// Renders a property name, quoting it when it is not a valid identifier.
fn property_name(name: &str) -> String {
    if is_valid_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
