//! Built-in schema.org type table.

use super::{PropertyKind::*, PropertySpec, SchemaDefinition};

fn schema(type_name: &str, props: &[(&str, super::PropertyKind)]) -> SchemaDefinition {
    SchemaDefinition {
        type_name: type_name.to_string(),
        properties: props.iter().map(|(n, k)| PropertySpec::new(*n, *k)).collect(),
    }
}

pub(super) fn definitions() -> Vec<SchemaDefinition> {
    vec![
        schema(
            "CreativeWork",
            &[
                ("about", Text),
                ("author", Text),
                ("contributor", Text),
                ("dateCreated", Date),
                ("dateModified", Date),
                ("headline", Text),
                ("keywords", Text),
                ("publisher", Text),
                ("text", Text),
                ("version", Number),
            ],
        ),
        schema(
            "Article",
            &[
                ("articleBody", Text),
                ("articleSection", Text),
                ("wordCount", Number),
                ("author", Text),
                ("datePublished", Date),
                ("headline", Text),
                ("publisher", Text),
            ],
        ),
        schema(
            "Book",
            &[
                ("author", Text),
                ("bookEdition", Text),
                ("bookFormat", Text),
                ("illustrator", Text),
                ("isbn", Text),
                ("numberOfPages", Number),
            ],
        ),
        schema(
            "Event",
            &[
                ("name", Text),
                ("startDate", DateTime),
                ("endDate", DateTime),
                ("location", Text),
                ("performer", Text),
                ("offers", Text),
                ("eventStatus", Text),
                ("organizer", Text),
            ],
        ),
        schema(
            "LocalBusiness",
            &[
                ("name", Text),
                ("address", Text),
                ("telephone", Text),
                ("openingHours", Text),
                ("priceRange", Text),
            ],
        ),
        schema(
            "Organization",
            &[
                ("name", Text),
                ("url", Url),
                ("logo", Url),
                ("address", Text),
                ("contactPoint", Text),
                ("email", Email),
                ("telephone", Text),
            ],
        ),
        schema(
            "Person",
            &[
                ("name", Text),
                ("email", Email),
                ("telephone", Text),
                ("url", Url),
                ("jobTitle", Text),
                ("affiliation", Text),
                ("birthDate", Date),
            ],
        ),
        schema(
            "Product",
            &[
                ("name", Text),
                ("image", Url),
                ("description", Text),
                ("brand", Text),
                ("sku", Text),
                ("mpn", Text),
                ("offers", Text),
            ],
        ),
        schema(
            "Recipe",
            &[
                ("name", Text),
                ("recipeIngredient", Text),
                ("recipeInstructions", Text),
                ("cookTime", Text),
                ("prepTime", Text),
                ("totalTime", Text),
                ("recipeYield", Text),
            ],
        ),
        schema(
            "WebSite",
            &[
                ("name", Text),
                ("url", Url),
                ("potentialAction", Text),
            ],
        ),
        schema(
            "FAQPage",
            &[
                ("mainEntity", Text),
            ],
        ),
        schema(
            "BreadcrumbList",
            &[
                ("itemListElement", Text),
                ("itemListOrder", Text),
                ("numberOfItems", Number),
            ],
        ),
        schema(
            "VideoObject",
            &[
                ("name", Text),
                ("description", Text),
                ("thumbnailUrl", Url),
                ("uploadDate", Date),
                ("duration", Text),
                ("contentUrl", Url),
            ],
        ),
        schema(
            "ImageObject",
            &[
                ("name", Text),
                ("contentUrl", Url),
                ("caption", Text),
                ("exifData", Text),
            ],
        ),
    ]
}
