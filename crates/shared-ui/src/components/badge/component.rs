use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline pill for statuses, grades and priorities.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variant_classes_are_distinct() {
        let all = [
            BadgeVariant::Primary,
            BadgeVariant::Secondary,
            BadgeVariant::Success,
            BadgeVariant::Warning,
            BadgeVariant::Destructive,
            BadgeVariant::Outline,
        ];
        let mut classes: Vec<_> = all.iter().map(BadgeVariant::class).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), all.len());
    }

    #[test]
    fn renders_variant_as_data_style() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Warning, "Pending" }
        });
        assert!(html.contains(r#"data-style="warning""#), "{html}");
        assert!(html.contains("Pending"));
    }
}
