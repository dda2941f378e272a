//! HAL-style response envelopes.
//!
//! ```text
//! {"id":1,"name":"Alice","_links":{"self":{"href":"http://host/users/1"}}}
//! {"_embedded":{"users":[...]},"_links":{"self":{"href":"http://host/users"}}}
//! ```
//!
//! Links serialise as an object keyed by relation name, in insertion order.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// A named navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    rel: &'static str,
    href: String,
}

impl Link {
    /// Relation name used for a resource's own URL.
    pub const SELF: &'static str = "self";

    /// Build a link for `rel` pointing at `href`.
    pub fn new(rel: &'static str, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
        }
    }

    /// Relation name.
    #[must_use]
    pub const fn rel(&self) -> &'static str {
        self.rel
    }

    /// Target URL.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }
}

struct Href<'a>(&'a str);

impl Serialize for Href<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Href", 1)?;
        state.serialize_field("href", self.0)?;
        state.end()
    }
}

/// Ordered set of links rendered as `{rel: {"href": url}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    /// Look up the target of `rel`.
    #[must_use]
    pub fn href(&self, rel: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|link| link.rel == rel)
            .map(Link::href)
    }

    /// Relation names in rendering order.
    pub fn rels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(Link::rel)
    }
}

impl FromIterator<Link> for Links {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for link in &self.0 {
            map.serialize_entry(link.rel, &Href(&link.href))?;
        }
        map.end()
    }
}

/// A payload together with its affordance links.
///
/// The payload's fields are flattened next to `_links`, so `T` must
/// serialise as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    content: T,
    #[serde(rename = "_links")]
    links: Links,
}

impl<T> EntityModel<T> {
    /// Wrap `content` with `links`.
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }

    /// Wrapped payload.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Attached links.
    pub const fn links(&self) -> &Links {
        &self.links
    }
}

/// A list of entity envelopes plus collection-level links.
///
/// Items render under `_embedded.{rel}`; the key is present even when the
/// collection is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionModel<T> {
    rel: &'static str,
    items: Vec<EntityModel<T>>,
    links: Links,
}

impl<T> CollectionModel<T> {
    /// Build a collection embedded under `rel`.
    pub fn new(rel: &'static str, items: Vec<EntityModel<T>>, links: Links) -> Self {
        Self { rel, items, links }
    }

    /// Embedded items.
    pub fn items(&self) -> &[EntityModel<T>] {
        &self.items
    }

    /// Collection-level links.
    pub const fn links(&self) -> &Links {
        &self.links
    }
}

struct Embedded<'a, T> {
    rel: &'static str,
    items: &'a [EntityModel<T>],
}

impl<T: Serialize> Serialize for Embedded<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.rel, self.items)?;
        map.end()
    }
}

impl<T: Serialize> Serialize for CollectionModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CollectionModel", 2)?;
        state.serialize_field(
            "_embedded",
            &Embedded {
                rel: self.rel,
                items: &self.items,
            },
        )?;
        state.serialize_field("_links", &self.links)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[derive(Serialize, Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
    }

    fn links() -> Links {
        [
            Link::new(Link::SELF, "http://h/items/1"),
            Link::new("zeta", "http://h/z"),
            Link::new("alpha", "http://h/a"),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn links_keep_insertion_order() {
        let rendered = serde_json::to_string(&links()).expect("serialise links");
        assert_eq!(
            rendered,
            r#"{"self":{"href":"http://h/items/1"},"zeta":{"href":"http://h/z"},"alpha":{"href":"http://h/a"}}"#
        );
    }

    #[rstest]
    fn entity_flattens_content() {
        let entity = EntityModel::new(Item { id: 1 }, links());
        let value = serde_json::to_value(&entity).expect("serialise entity");
        assert_eq!(value.get("id"), Some(&json!(1)));
        assert_eq!(
            value.pointer("/_links/self/href").and_then(Value::as_str),
            Some("http://h/items/1")
        );
    }

    #[rstest]
    fn empty_collection_still_embeds_key() {
        let collection: CollectionModel<Item> =
            CollectionModel::new("items", Vec::new(), links());
        let value = serde_json::to_value(&collection).expect("serialise collection");
        assert_eq!(value.pointer("/_embedded/items"), Some(&json!([])));
        assert!(value.pointer("/_links/alpha").is_some());
    }

    #[rstest]
    fn href_lookup_by_rel() {
        let links = links();
        assert_eq!(links.href("zeta"), Some("http://h/z"));
        assert_eq!(links.href("missing"), None);
        assert_eq!(links.rels().collect::<Vec<_>>(), vec!["self", "zeta", "alpha"]);
    }
}
