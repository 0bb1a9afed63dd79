use axum::response::Html;
use handlebars::Handlebars;
use rust_embed::RustEmbed;
use serde::Serialize;

#[derive(RustEmbed)]
#[folder = "assets/templates"]
#[include = "*.hbs"]
struct TemplateAssets;

/// Builds the handlebars registry from the embedded page templates. Called
/// once at startup; a malformed template is a packaging error, so this panics.
pub fn create_registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry
        .register_embed_templates_with_extension::<TemplateAssets>(".hbs")
        .expect("Failed to register embedded templates");
    registry
}

pub enum Error {
    RenderFailed,
}

pub fn render<C: Serialize>(
    registry: &Handlebars<'static>,
    template: &str,
    context: &C,
) -> Result<Html<String>, Error> {
    match registry.render(template, context) {
        Ok(body) => Ok(Html(body)),
        Err(err) => {
            tracing::error!("Failed to render template {}: {}", template, err);
            Err(Error::RenderFailed)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn registers_every_page_template() {
        let registry = create_registry();

        for template in [
            "restaurants",
            "restaurant",
            "restaurant-menus",
            "timeslots",
            "add-restaurant",
        ] {
            assert!(registry.has_template(template), "missing {}", template);
        }
    }

    #[test]
    fn renders_the_restaurant_list() {
        let registry = create_registry();

        let page = render(
            &registry,
            "restaurants",
            &json!({
                "title": "Restaurants",
                "restaurants": [
                    { "rname": "Joe's", "raddress": "1 Main St", "cuisine": "Thai" }
                ]
            }),
        );

        let Ok(Html(body)) = page else {
            panic!("restaurant list failed to render");
        };
        assert!(body.contains("Joe's"));
    }

    #[test]
    fn renders_the_add_form_notice_only_when_present() {
        let registry = create_registry();

        let Ok(Html(with_notice)) = render(
            &registry,
            "add-restaurant",
            &json!({ "notice": "Fields must not be blank!" }),
        ) else {
            panic!("add form failed to render");
        };
        assert!(with_notice.contains("Fields must not be blank!"));

        let Ok(Html(without_notice)) = render(&registry, "add-restaurant", &json!({})) else {
            panic!("add form failed to render");
        };
        assert!(!without_notice.contains("Fields must not be blank!"));
    }
}
