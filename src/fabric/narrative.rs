//! Narrative text collaborator
//!
//! Template rendering is injected into the generators as a trait so
//! the conservation engine never touches vocabulary. Templates use
//! `{placeholder}` tokens; unmatched tokens are left in place (they
//! indicate a template/context mismatch worth seeing in the output).

/// Placeholder values for one rendering.
pub type TemplateContext = [(&'static str, String)];

/// Renders a template against a placeholder context.
pub trait Narrative {
    fn render(&self, template: &str, ctx: &TemplateContext) -> String;
}

/// Default renderer: straight `{key}` substitution.
#[derive(Debug, Default, Clone)]
pub struct PhraseBook;

impl Narrative for PhraseBook {
    fn render(&self, template: &str, ctx: &TemplateContext) -> String {
        let mut out = template.to_string();
        for (key, value) in ctx {
            let token = format!("{{{key}}}");
            if out.contains(&token) {
                out = out.replace(&token, value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_placeholders() {
        let book = PhraseBook;
        let ctx = [("grid", "B-7".to_string()), ("room", "Room 204".to_string())];
        assert_eq!(
            book.render("Conflict at grid {grid} near {room}", &ctx),
            "Conflict at grid B-7 near Room 204"
        );
    }

    #[test]
    fn leaves_unknown_placeholders_visible() {
        let book = PhraseBook;
        assert_eq!(book.render("Missing {thing}", &[]), "Missing {thing}");
    }
}
