//! Card theme

mod styles;

pub use styles::CARD_STYLES;

#[cfg(test)]
mod tests {
    use super::CARD_STYLES;
    use character_card_core::CharacterStatus;

    /// Declarations of the first rule whose selector is exactly `selector`
    fn declarations(selector: &str) -> Vec<(String, String)> {
        let header = format!("\n{} {{", selector);
        let start = CARD_STYLES
            .find(&header)
            .unwrap_or_else(|| panic!("no rule for {selector}"))
            + header.len();
        let end = start + CARD_STYLES[start..].find('}').unwrap();

        strip_comments(&CARD_STYLES[start..end])
            .split(';')
            .filter_map(|decl| {
                let (prop, value) = decl.split_once(':')?;
                Some((prop.trim().to_string(), value.trim().to_string()))
            })
            .collect()
    }

    fn strip_comments(css: &str) -> String {
        let mut out = String::new();
        let mut rest = css;
        while let Some(open) = rest.find("/*") {
            out.push_str(&rest[..open]);
            match rest[open..].find("*/") {
                Some(close) => rest = &rest[open + close + 2..],
                None => return out,
            }
        }
        out.push_str(rest);
        out
    }

    fn assert_rule(selector: &str, expected: &[(&str, &str)]) {
        let decls = declarations(selector);
        for (prop, value) in expected {
            let found = decls.iter().find(|(p, _)| p == prop);
            assert_eq!(
                found.map(|(_, v)| v.as_str()),
                Some(*value),
                "{selector} {{ {prop} }}"
            );
        }
    }

    #[test]
    fn card_root_contract() {
        assert_rule(
            ".card",
            &[
                ("display", "flex"),
                ("position", "relative"),
                ("min-width", "326px"),
                ("max-height", "140px"),
                ("margin", "5px"),
            ],
        );
        // Width is only bounded by the inline max-width override
        assert!(declarations(".card").iter().all(|(p, _)| p != "max-width"));
    }

    #[test]
    fn image_contract() {
        assert_rule(
            ".card__image",
            &[
                ("width", "140px"),
                ("height", "140px"),
                ("border-top-left-radius", "10px"),
                ("border-bottom-left-radius", "10px"),
            ],
        );
    }

    #[test]
    fn content_contract() {
        assert_rule(
            ".card__content",
            &[
                ("flex", "3 1 0%"),
                ("position", "relative"),
                ("padding", "0.5rem"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("color", "#000000"),
                ("border-top-right-radius", "10px"),
                ("border-bottom-right-radius", "10px"),
                ("border", "1px solid #e0e0e0"),
                ("font-size", "10px"),
            ],
        );
        assert!(declarations(".card__content")
            .iter()
            .all(|(p, _)| p != "background-color" && p != "background"));
    }

    #[test]
    fn section_contract() {
        assert_rule(
            ".card-content__section",
            &[
                ("flex", "1 1 0%"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("justify-content", "center"),
            ],
        );
    }

    #[test]
    fn favorite_contract() {
        assert_rule(
            ".card__favorite",
            &[
                ("width", "30px"),
                ("height", "30px"),
                ("left", "101px"),
                ("top", "105px"),
                ("position", "absolute"),
                ("background", "#f2f2f2"),
                ("border-radius", "9999px"),
            ],
        );
        assert_rule(
            ".card__star-container",
            &[
                ("width", "18px"),
                ("height", "18px"),
                ("left", "107px"),
                ("top", "111px"),
                ("position", "absolute"),
            ],
        );
    }

    #[test]
    fn text_contract() {
        assert_rule(
            ".card__status",
            &[
                ("height", "0.5rem"),
                ("width", "0.5rem"),
                ("margin-right", "0.375rem"),
                ("border-radius", "50%"),
            ],
        );
        assert_rule(".card__status-species", &[("color", "#4f4f4f"), ("font-size", "10px")]);
        assert_rule(".card__character-name", &[("font-size", "16px")]);
        assert_rule(".card__label", &[("color", "#828282")]);
        assert_rule(".card__field", &[("font-size", "12px")]);
    }

    #[test]
    fn status_colors_match_core() {
        let root = declarations(":root");
        for status in [CharacterStatus::Alive, CharacterStatus::Dead, CharacterStatus::Unknown] {
            let var = format!("--status-{}", status.modifier());
            let value = root.iter().find(|(p, _)| *p == var).map(|(_, v)| v.as_str());
            assert_eq!(value, Some(status.color()), "{var}");

            let selector = format!(".card__status--{}", status.modifier());
            let expected = format!("var({})", var);
            assert_rule(&selector, &[("background-color", expected.as_str())]);
        }
    }
}
