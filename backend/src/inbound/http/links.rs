//! URL templates for the user endpoints and the link sets each response
//! carries.
//!
//! Hrefs are absolute, rooted at the scheme and host the request arrived on.
//! Path segments are percent-encoded and query values form-encoded, so
//! `user name` becomes `user%20name` in a path and `user+name` in a query.
//! Affordances without a concrete target use placeholder arguments: id `0`,
//! name `user name` for creation and `new user name` for renaming.

use actix_web::HttpRequest;
use url::Url;

use super::hypermedia::{Link, Links};
use crate::domain::{Error, UserId};

/// Relation for the user collection when linked from a single user.
pub const REL_USERS: &str = "users";
/// Relation for the user collection when linked from a mutation response.
pub const REL_GET_USERS: &str = "getUsers";
/// Relation for fetching a single user.
pub const REL_GET_USER: &str = "getUser";
/// Relation for creating a user.
pub const REL_NEW_USER: &str = "newUser";
/// Relation for renaming a user.
pub const REL_UPDATED_USER: &str = "updatedUser";
/// Relation for deleting a user.
pub const REL_DELETE_USER: &str = "deleteUser";

/// Placeholder identifier for affordances with no specific target.
pub const PLACEHOLDER_ID: UserId = UserId::new(0);
/// Placeholder name for the create affordance.
pub const PLACEHOLDER_NEW_NAME: &str = "user name";
/// Placeholder name for the rename affordance.
pub const PLACEHOLDER_RENAME: &str = "new user name";

const USERS: &str = "users";
const USER: &str = "user";

/// Builds absolute hrefs for the user endpoints.
///
/// # Examples
/// ```
/// use url::Url;
/// use users_api::domain::UserId;
/// use users_api::inbound::http::links::UserLinks;
///
/// let links = UserLinks::new(Url::parse("http://localhost:8080").unwrap());
/// assert_eq!(links.user(UserId::new(3)), "http://localhost:8080/users/3");
/// assert_eq!(
///     links.update(UserId::new(3), "new user name"),
///     "http://localhost:8080/users/user/3?name=new+user+name",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UserLinks {
    base: Url,
}

impl UserLinks {
    /// Root hrefs at `base`. Any path or query on `base` is replaced.
    #[must_use]
    pub const fn new(base: Url) -> Self {
        Self { base }
    }

    /// Root hrefs at the scheme and host the request was addressed to.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error when the host cannot form a URL.
    pub fn from_request(req: &HttpRequest) -> Result<Self, Error> {
        let info = req.connection_info();
        let raw = format!("{}://{}", info.scheme(), info.host());
        let base = Url::parse(&raw)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| Error::invalid_request(format!("cannot build links for host {raw}")))?;
        Ok(Self::new(base))
    }

    fn href(&self, segments: &[&str], query: Option<(&str, &str)>) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        url.into()
    }

    /// `GET /users`
    #[must_use]
    pub fn users(&self) -> String {
        self.href(&[USERS], None)
    }

    /// `GET /users/{id}`
    #[must_use]
    pub fn user(&self, id: UserId) -> String {
        let id = id.to_string();
        self.href(&[USERS, id.as_str()], None)
    }

    /// `POST /users/user/{text}`
    #[must_use]
    pub fn create(&self, text: &str) -> String {
        self.href(&[USERS, USER, text], None)
    }

    /// `PUT /users/user/{id}?name={name}`
    #[must_use]
    pub fn update(&self, id: UserId, name: &str) -> String {
        let id = id.to_string();
        self.href(&[USERS, USER, id.as_str()], Some(("name", name)))
    }

    /// `DELETE /users/user/{id}`
    #[must_use]
    pub fn delete(&self, id: UserId) -> String {
        let id = id.to_string();
        self.href(&[USERS, USER, id.as_str()], None)
    }

    /// Links attached to a single user fetched by id.
    #[must_use]
    pub fn for_user(&self, id: UserId) -> Links {
        [
            Link::new(Link::SELF, self.user(id)),
            Link::new(REL_USERS, self.users()),
            Link::new(REL_NEW_USER, self.create(PLACEHOLDER_NEW_NAME)),
            Link::new(REL_UPDATED_USER, self.update(id, PLACEHOLDER_RENAME)),
            Link::new(REL_DELETE_USER, self.delete(id)),
        ]
        .into_iter()
        .collect()
    }

    /// The single link attached to each user inside a listing.
    #[must_use]
    pub fn for_listed_user(&self, id: UserId) -> Links {
        std::iter::once(Link::new(Link::SELF, self.user(id))).collect()
    }

    /// Collection-level links of the user listing.
    #[must_use]
    pub fn for_collection(&self) -> Links {
        [
            Link::new(Link::SELF, self.users()),
            Link::new(REL_GET_USER, self.user(PLACEHOLDER_ID)),
            Link::new(REL_NEW_USER, self.create(PLACEHOLDER_NEW_NAME)),
            Link::new(
                REL_UPDATED_USER,
                self.update(PLACEHOLDER_ID, PLACEHOLDER_RENAME),
            ),
            Link::new(REL_DELETE_USER, self.delete(PLACEHOLDER_ID)),
        ]
        .into_iter()
        .collect()
    }

    /// Links attached to a freshly created user.
    #[must_use]
    pub fn for_created(&self, text: &str) -> Links {
        [
            Link::new(Link::SELF, self.create(text)),
            Link::new(REL_GET_USER, self.user(PLACEHOLDER_ID)),
            Link::new(REL_GET_USERS, self.users()),
            Link::new(
                REL_UPDATED_USER,
                self.update(PLACEHOLDER_ID, PLACEHOLDER_RENAME),
            ),
            Link::new(REL_DELETE_USER, self.delete(PLACEHOLDER_ID)),
        ]
        .into_iter()
        .collect()
    }

    /// Links attached to a renamed user.
    #[must_use]
    pub fn for_updated(&self, id: UserId, name: &str) -> Links {
        [
            Link::new(Link::SELF, self.update(id, name)),
            Link::new(REL_GET_USER, self.user(PLACEHOLDER_ID)),
            Link::new(REL_GET_USERS, self.users()),
            Link::new(REL_NEW_USER, self.create(PLACEHOLDER_NEW_NAME)),
            Link::new(REL_DELETE_USER, self.delete(PLACEHOLDER_ID)),
        ]
        .into_iter()
        .collect()
    }

    /// Links attached to a delete acknowledgement.
    #[must_use]
    pub fn for_deleted(&self, id: UserId) -> Links {
        [
            Link::new(Link::SELF, self.delete(id)),
            Link::new(REL_GET_USER, self.user(PLACEHOLDER_ID)),
            Link::new(REL_GET_USERS, self.users()),
            Link::new(REL_NEW_USER, self.create(PLACEHOLDER_NEW_NAME)),
            Link::new(REL_UPDATED_USER, self.update(id, PLACEHOLDER_RENAME)),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::{fixture, rstest};

    #[fixture]
    fn links() -> UserLinks {
        UserLinks::new(Url::parse("http://api.test:9000").expect("valid base"))
    }

    #[rstest]
    fn get_user_affordances(links: UserLinks) {
        let set = links.for_user(UserId::new(7));
        assert_eq!(
            set.rels().collect::<Vec<_>>(),
            vec!["self", "users", "newUser", "updatedUser", "deleteUser"]
        );
        assert_eq!(set.href("self"), Some("http://api.test:9000/users/7"));
        assert_eq!(set.href("users"), Some("http://api.test:9000/users"));
        assert_eq!(
            set.href("newUser"),
            Some("http://api.test:9000/users/user/user%20name")
        );
        assert_eq!(
            set.href("updatedUser"),
            Some("http://api.test:9000/users/user/7?name=new+user+name")
        );
        assert_eq!(
            set.href("deleteUser"),
            Some("http://api.test:9000/users/user/7")
        );
    }

    #[rstest]
    fn collection_affordances_use_placeholder_id(links: UserLinks) {
        let set = links.for_collection();
        assert_eq!(
            set.rels().collect::<Vec<_>>(),
            vec!["self", "getUser", "newUser", "updatedUser", "deleteUser"]
        );
        assert_eq!(set.href("getUser"), Some("http://api.test:9000/users/0"));
        assert_eq!(
            set.href("updatedUser"),
            Some("http://api.test:9000/users/user/0?name=new+user+name")
        );
        assert_eq!(
            set.href("deleteUser"),
            Some("http://api.test:9000/users/user/0")
        );
    }

    #[rstest]
    fn created_self_link_echoes_text(links: UserLinks) {
        let set = links.for_created("Ada Lovelace");
        assert_eq!(
            set.rels().collect::<Vec<_>>(),
            vec!["self", "getUser", "getUsers", "updatedUser", "deleteUser"]
        );
        assert_eq!(
            set.href("self"),
            Some("http://api.test:9000/users/user/Ada%20Lovelace")
        );
    }

    #[rstest]
    fn updated_self_link_carries_name(links: UserLinks) {
        let set = links.for_updated(UserId::new(2), "Bob");
        assert_eq!(
            set.rels().collect::<Vec<_>>(),
            vec!["self", "getUser", "getUsers", "newUser", "deleteUser"]
        );
        assert_eq!(
            set.href("self"),
            Some("http://api.test:9000/users/user/2?name=Bob")
        );
    }

    #[rstest]
    fn deleted_links_target_deleted_id(links: UserLinks) {
        let set = links.for_deleted(UserId::new(5));
        assert_eq!(
            set.rels().collect::<Vec<_>>(),
            vec!["self", "getUser", "getUsers", "newUser", "updatedUser"]
        );
        assert_eq!(set.href("self"), Some("http://api.test:9000/users/user/5"));
        assert_eq!(
            set.href("updatedUser"),
            Some("http://api.test:9000/users/user/5?name=new+user+name")
        );
    }

    #[rstest]
    #[case("a/b", "http://api.test:9000/users/user/a%2Fb")]
    #[case("x?y", "http://api.test:9000/users/user/x%3Fy")]
    fn reserved_characters_stay_inside_segment(
        links: UserLinks,
        #[case] text: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(links.create(text), expected);
    }

    #[rstest]
    fn base_path_is_replaced() {
        let links = UserLinks::new(Url::parse("https://h.test/prefix?q=1").expect("valid url"));
        assert_eq!(links.users(), "https://h.test/users");
    }

    #[rstest]
    fn request_host_becomes_base() {
        let req = TestRequest::default()
            .insert_header(("host", "example.org:8443"))
            .to_http_request();
        let links = UserLinks::from_request(&req).expect("valid host");
        assert_eq!(links.users(), "http://example.org:8443/users");
    }
}
