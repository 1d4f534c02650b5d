//! The segmented list component
//!
//! `render` is the single entry point: it resolves the separator from the
//! props, splits the text, and projects every segment into a display node.
//! Nothing is cached between calls; every call builds a fresh tree.

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use crate::segment::{segment, Separator};

/// Input of the component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    pub text: String,
    pub delimiter: Option<String>,
}

impl Props {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delimiter: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }
}

/// Identity of a rendered item among its siblings.
///
/// Segment text alone is not unique ("a,a" has two "a" items), so the
/// position is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub index: usize,
    pub value: String,
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.value)
    }
}

impl Serialize for ItemKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub key: ItemKey,
    pub content: String,
}

impl DisplayNode {
    pub fn index(&self) -> usize {
        self.key.index
    }
}

/// Container wrapping the rendered items, in segment order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentList {
    pub separator: Separator,
    pub items: Vec<DisplayNode>,
}

impl SegmentList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a list built by `render`, which yields at least one item
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayNode> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn contents(&self) -> Vec<&str> {
        self.items.iter().map(|n| n.content.as_str()).collect()
    }

    /// Whether two or more items show the same text
    pub fn has_repeated_content(&self) -> bool {
        let mut seen = HashSet::new();
        self.items.iter().any(|n| !seen.insert(n.content.as_str()))
    }
}

// JSON output: {"separator": ",", "items": [{"key": "0:a", "index": 0, "text": "a"}]}
impl Serialize for SegmentList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        #[derive(Serialize)]
        struct Item<'a> {
            key: &'a ItemKey,
            index: usize,
            text: &'a str,
        }

        let items: Vec<Item> = self
            .items
            .iter()
            .map(|n| Item {
                key: &n.key,
                index: n.index(),
                text: &n.content,
            })
            .collect();

        let mut s = serializer.serialize_struct("SegmentList", 2)?;
        s.serialize_field("separator", self.separator.as_str())?;
        s.serialize_field("items", &items)?;
        s.end()
    }
}

/// Render the props into a list, one item per segment
pub fn render(props: &Props) -> SegmentList {
    let separator = Separator::resolve(props.delimiter.as_deref());

    let items: Vec<DisplayNode> = segment(&props.text, &separator)
        .into_iter()
        .enumerate()
        .map(|(index, bit)| DisplayNode {
            key: ItemKey {
                index,
                value: bit.to_string(),
            },
            content: bit.to_string(),
        })
        .collect();

    let list = SegmentList { separator, items };

    if list.has_repeated_content() {
        tracing::debug!(
            "Repeated segment text in {} items, keys disambiguated by position",
            list.len()
        );
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_renders_one_item_per_segment_in_order() {
        let list = render(&Props::new("a,b,c"));
        assert_eq!(list.contents(), vec!["a", "b", "c"]);
        let indexes: Vec<usize> = list.iter().map(|n| n.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_text_renders_one_empty_item() {
        let list = render(&Props::new(""));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].content, "");
        assert_eq!(list.items[0].key.to_string(), "0:");
    }

    #[test]
    fn test_middle_item_empty() {
        let list = render(&Props::new("a,,b"));
        assert_eq!(list.contents(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_explicit_delimiter_is_used() {
        let list = render(&Props::new("a-b-c").with_delimiter("-"));
        assert_eq!(list.contents(), vec!["a", "b", "c"]);
        assert_eq!(list.separator.as_str(), "-");
    }

    #[test]
    fn test_repeated_content_gets_distinct_keys() {
        let list = render(&Props::new("x,y,x"));
        assert!(list.has_repeated_content());
        let keys: HashSet<&ItemKey> = list.iter().map(|n| &n.key).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(list.items[0].key.to_string(), "0:x");
        assert_eq!(list.items[2].key.to_string(), "2:x");
    }

    #[test]
    fn test_render_is_fresh_per_call() {
        let props = Props::new("a,b");
        assert_eq!(render(&props), render(&props));
        assert!(!render(&props).has_repeated_content());
    }

    #[test]
    fn test_json_shape() {
        let list = render(&Props::new("a,a"));
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "separator": ",",
                "items": [
                    { "key": "0:a", "index": 0, "text": "a" },
                    { "key": "1:a", "index": 1, "text": "a" },
                ]
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_items_follow_segment_order(
            text in "[a-c,;-]{0,40}",
            delimiter in prop::option::of(prop_oneof![Just(","), Just(";"), Just("-"), Just("")]),
        ) {
            let props = Props { text, delimiter: delimiter.map(str::to_string) };
            let separator = Separator::resolve(props.delimiter.as_deref());
            let list = render(&props);

            prop_assert_eq!(list.contents(), segment(&props.text, &separator));
            let indexes: Vec<usize> = list.iter().map(|n| n.index()).collect();
            prop_assert_eq!(indexes, (0..list.len()).collect::<Vec<_>>());
            for node in list.iter() {
                prop_assert_eq!(&node.key.value, &node.content);
            }
        }
    }
}
