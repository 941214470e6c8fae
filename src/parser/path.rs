use scraper::ElementRef;

/// One step of a relative path: a child element with the expected tag,
/// either at a fixed 1-based position among all element children or the
/// first child carrying that tag.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub tag: &'static str,
    pub nth: Option<usize>,
}

impl Step {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, nth: None }
    }

    pub const fn nth(tag: &'static str, nth: usize) -> Self {
        Self { tag, nth: Some(nth) }
    }
}

/// Walk a relative path down from `from`, one child element per step.
/// Returns None as soon as a step cannot be satisfied.
pub fn resolve<'a>(from: ElementRef<'a>, path: &[Step]) -> Option<ElementRef<'a>> {
    let mut current = from;
    for step in path {
        current = child_at(current, *step)?;
    }
    Some(current)
}

/// Resolve a single step against `parent`'s element children. Positions
/// count every element child, tag match or not, mirroring how the source
/// layout is addressed.
pub fn child_at(parent: ElementRef<'_>, step: Step) -> Option<ElementRef<'_>> {
    let mut children = parent.children().filter_map(ElementRef::wrap);
    match step.nth {
        Some(n) => children.nth(n - 1).filter(|c| c.value().name() == step.tag),
        None => children.find(|c| c.value().name() == step.tag),
    }
}

/// Text content of `el` with every subtree rooted at `excluded_tag`
/// left out. Read-side only; the tree is never mutated.
pub fn text_excluding(el: ElementRef<'_>, excluded_tag: &str) -> String {
    let mut out = String::new();
    collect_text(el, excluded_tag, &mut out);
    out.trim().to_string()
}

fn collect_text(el: ElementRef<'_>, excluded_tag: &str, out: &mut String) {
    for child in el.children() {
        if let Some(element) = ElementRef::wrap(child) {
            if element.value().name() == excluded_tag {
                continue;
            }
            collect_text(element, excluded_tag, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_center(doc: &Html) -> ElementRef<'_> {
        let body = crate::parser::body_of(doc).unwrap();
        child_at(body, Step::tag("center")).unwrap()
    }

    #[test]
    fn resolves_positional_chain() {
        let doc = Html::parse_document(
            "<body><center><table><tbody>\
             <tr><td>a</td><td><img alt=\"w\"></td></tr>\
             </tbody></table></center></body>",
        );
        let tbody = resolve(first_center(&doc), &[Step::tag("table"), Step::tag("tbody")]).unwrap();
        let img = resolve(
            tbody,
            &[Step::nth("tr", 1), Step::nth("td", 2), Step::tag("img")],
        )
        .unwrap();
        assert_eq!(img.value().attr("alt"), Some("w"));
    }

    #[test]
    fn positional_step_requires_matching_tag() {
        let doc = Html::parse_document("<body><center><p></p><img></center></body>");
        let center = first_center(&doc);
        // Position 2 exists but is an <img>, not a <p>.
        assert!(child_at(center, Step::nth("p", 2)).is_none());
        assert!(child_at(center, Step::nth("img", 2)).is_some());
        assert!(child_at(center, Step::nth("p", 3)).is_none());
    }

    #[test]
    fn untagged_position_takes_first_match() {
        let doc = Html::parse_document("<body><center><img alt=\"a\"><b><img alt=\"b\"></b></center></body>");
        let img = child_at(first_center(&doc), Step::tag("img")).unwrap();
        assert_eq!(img.value().attr("alt"), Some("a"));
    }

    #[test]
    fn excludes_decorative_subtree() {
        let doc = Html::parse_document(
            "<body><center><b><font color=\"red\">ヒント：</font>カタカナ四文字</b></center></body>",
        );
        let b = child_at(first_center(&doc), Step::tag("b")).unwrap();
        assert_eq!(text_excluding(b, "font"), "カタカナ四文字");
    }

    #[test]
    fn zero_or_many_decorative_elements() {
        let none = Html::parse_document("<body><center><b>そのまま</b></center></body>");
        let b = child_at(first_center(&none), Step::tag("b")).unwrap();
        assert_eq!(text_excluding(b, "font"), "そのまま");

        let many = Html::parse_document(
            "<body><center><b><font>x</font>のこ<font>y</font>る</b></center></body>",
        );
        let b = child_at(first_center(&many), Step::tag("b")).unwrap();
        assert_eq!(text_excluding(b, "font"), "のこる");
    }
}
